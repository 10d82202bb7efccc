// src/simulation/engine.rs

use crate::error::SimulationError;
use crate::model::outcome::{DayResult, SimulationTotals, UnitEconomics};
use crate::model::scenario::sample;
use crate::random::traits::RandomSource;
use crate::simulation::config::clamp_count;
use tracing::{debug, info, warn};

const MAX_RESERVED_DAYS: u32 = 4096;

/// Everything one call to `run` produced: the days in order plus their sums.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    order_quantity: u32,
    days: Vec<DayResult>,
    totals: SimulationTotals,
}

impl SimulationRun {
    /// The order quantity actually used, after clamping.
    pub fn order_quantity(&self) -> u32 {
        self.order_quantity
    }

    pub fn days(&self) -> &[DayResult] {
        &self.days
    }

    pub fn totals(&self) -> &SimulationTotals {
        &self.totals
    }

    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn mean_daily_profit(&self) -> f64 {
        // A run always has at least one day.
        self.totals.profit / self.days.len() as f64
    }
}

/// Settles a single day: picks the scenario for `r` and applies the
/// standard unit economics.
pub fn evaluate(day: u32, order_quantity: u32, r: f64) -> DayResult {
    DayResult::settle(day, r, sample(r), order_quantity, &UnitEconomics::STANDARD)
}

/// Runs `num_days` independent days at a fixed order quantity.
///
/// Both counts are floored at 1 before anything is computed. Exactly one
/// draw is taken from `source` per day, in day order. The run is all or
/// nothing: a draw outside `[0, 1)` or an exhausted source aborts it.
pub fn run<S>(
    order_quantity: i64,
    num_days: i64,
    source: &mut S,
) -> Result<SimulationRun, SimulationError>
where
    S: RandomSource + ?Sized,
{
    let effective_quantity = clamp_count(order_quantity);
    let effective_days = clamp_count(num_days);
    if i64::from(effective_quantity) != order_quantity {
        warn!(
            "order quantity {} clamped to {}",
            order_quantity, effective_quantity
        );
    }
    if i64::from(effective_days) != num_days {
        warn!("number of days {} clamped to {}", num_days, effective_days);
    }

    info!(
        "Running {} days at an order quantity of {}",
        effective_days, effective_quantity
    );

    // Capped reservation: memory grows with the days actually simulated.
    let mut days = Vec::with_capacity(effective_days.min(MAX_RESERVED_DAYS) as usize);
    let mut totals = SimulationTotals::default();

    for day in 1..=effective_days {
        let r = next_checked_draw(source, day)?;
        let result = evaluate(day, effective_quantity, r);

        debug!(
            "Day {}: r={:.3} {} demand={} sold={} profit=${:.2}",
            day,
            r,
            result.scenario.label,
            result.demand,
            result.units_sold,
            result.daily_profit
        );

        totals.accumulate(&result);
        days.push(result);
    }

    info!(
        "Run complete: total profit ${:.2} over {} days",
        totals.profit, effective_days
    );

    Ok(SimulationRun {
        order_quantity: effective_quantity,
        days,
        totals,
    })
}

fn next_checked_draw<S>(source: &mut S, day: u32) -> Result<f64, SimulationError>
where
    S: RandomSource + ?Sized,
{
    let value = source
        .next_draw()
        .ok_or(SimulationError::RandomSourceExhausted { day })?;

    // NaN fails `contains` as well.
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimulationError::RandomDrawOutOfRange { day, value })
    }
}
