// src/io/chart.rs

use crate::error::ReportError;
use crate::simulation::engine::SimulationRun;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const BAR_COLOR: RGBColor = RGBColor(0x5c, 0x7c, 0xfa);

/// Daily profit keyed by "Day N", ready to plot.
///
/// Values are rounded to cents. Totals never come from this series.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ProfitSeries {
    pub fn from_run(run: &SimulationRun) -> Self {
        let days = run.days();
        Self {
            labels: days.iter().map(|d| format!("Day {}", d.day)).collect(),
            values: days.iter().map(|d| d.rounded_profit()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Y axis range. Always includes zero, with some headroom.
    fn value_range(&self) -> (f64, f64) {
        let min = self.values.iter().cloned().fold(0.0, f64::min);
        let max = self.values.iter().cloned().fold(0.0, f64::max);
        if min == max {
            return (min, min + 1.0);
        }
        let pad = (max - min) * 0.1;
        (if min < 0.0 { min - pad } else { 0.0 }, max + pad)
    }

    /// Tick label for a point on the segmented day axis. Only bar centres
    /// carry a label, so each bar gets exactly one.
    fn day_label(&self, x: &SegmentValue<u32>) -> String {
        match x {
            SegmentValue::CenterOf(idx) => self
                .labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
        }
    }
}

/// Renders the series as a PNG bar chart. An existing file is replaced.
pub fn render_profit_chart(path: &Path, series: &ProfitSeries) -> Result<(), ReportError> {
    if series.is_empty() {
        return Err(ReportError::EmptySeries);
    }

    draw_bars(path, series).map_err(|source| ReportError::Chart {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Profit chart saved to {}", path.display());
    Ok(())
}

fn draw_bars(
    path: &Path,
    series: &ProfitSeries,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (y_min, y_max) = series.value_range();
    let n = series.len() as u32;

    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Profit ($)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..n).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.min(25) as usize)
        .x_label_formatter(&|x| series.day_label(x))
        .y_label_formatter(&|v| format!("${:.0}", v))
        .draw()?;

    chart.draw_series(series.values.iter().zip(0u32..).map(|(&value, i)| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), value)],
            BAR_COLOR.filled(),
        );
        bar.set_margin(0, 0, 3, 3);
        bar
    }))?;

    root.present()?;
    Ok(())
}
