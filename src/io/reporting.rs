// src/io/reporting.rs

use crate::error::ReportError;
use crate::model::outcome::{DayResult, SimulationTotals};
use crate::simulation::analysis::{expected_daily_profit, scenario_frequencies};
use crate::simulation::engine::SimulationRun;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Formats money as a dollar amount with two decimals, e.g. `$210.00`.
/// Negative amounts keep the sign after the dollar: `$-12.50`.
pub fn format_money(value: f64) -> String {
    // Avoid printing "$-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("${:.2}", value)
}

const HEADER: [&str; 10] = [
    "Day", "Random", "Scenario", "Demand", "Sold", "Revenue", "Cost", "Salvage", "Lost", "Profit",
];

/// One line per simulated day, under a header row.
pub fn render_table(days: &[DayResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>7} {:<8} {:>6} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5], HEADER[6], HEADER[7],
        HEADER[8], HEADER[9]
    );

    for day in days {
        let _ = writeln!(
            out,
            "{:>5} {:>7.3} {:<8} {:>6} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
            day.day,
            day.random_draw,
            day.scenario.label,
            day.demand,
            day.units_sold,
            format_money(day.revenue),
            format_money(day.cost),
            format_money(day.salvage),
            format_money(day.lost_profit),
            format_money(day.daily_profit),
        );
    }
    out
}

/// The totals block. `SimulationTotals::default()` renders the cleared view.
pub fn render_totals(totals: &SimulationTotals) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Revenue:     {}", format_money(totals.revenue));
    let _ = writeln!(out, "Total Cost:        {}", format_money(totals.cost));
    let _ = writeln!(out, "Total Salvage:     {}", format_money(totals.salvage));
    let _ = writeln!(out, "Total Lost Profit: {}", format_money(totals.lost_profit));
    let _ = writeln!(out, "Total Profit:      {}", format_money(totals.profit));
    out
}

/// Mean against expectation, and how often each scenario came up.
pub fn render_summary(run: &SimulationRun) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mean daily profit:     {}",
        format_money(run.mean_daily_profit())
    );
    let _ = writeln!(
        out,
        "Expected daily profit: {} (order quantity {})",
        format_money(expected_daily_profit(run.order_quantity())),
        run.order_quantity()
    );
    for freq in scenario_frequencies(run) {
        let _ = writeln!(
            out,
            "  {:<8} {:>5} days ({:>5.1}% observed, {:>5.1}% expected)",
            freq.scenario.label,
            freq.days,
            freq.share * 100.0,
            freq.scenario.probability * 100.0
        );
    }
    out
}

/// Writes the day records of a run to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to write, e.g. "results/run_1.csv". Replaced if present.
/// * `days` - The day records, in order.
pub fn write_simulation_log(file_path: &Path, days: &[DayResult]) -> Result<(), ReportError> {
    let csv_error = |source| ReportError::Csv {
        path: file_path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(file_path).map_err(csv_error)?;

    for record in days {
        wtr.serialize(record).map_err(csv_error)?;
    }

    wtr.flush().map_err(|source| ReportError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    info!(
        "Exported {} rows to '{}'",
        days.len(),
        file_path.display()
    );
    Ok(())
}
