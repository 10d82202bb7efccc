// src/model/outcome.rs

use crate::model::scenario::DemandScenario;
use serde::{Serialize, Serializer};

/// Per-unit money figures for the product. Fixed, not derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEconomics {
    pub unit_price: f64,
    pub unit_cost: f64,
    pub salvage_value: f64,
    pub lost_profit_penalty: f64,
}

impl UnitEconomics {
    pub const STANDARD: UnitEconomics = UnitEconomics {
        unit_price: 15.0,
        unit_cost: 8.0,
        salvage_value: 3.0,
        lost_profit_penalty: 7.0,
    };
}

/// The outcome of one simulated day.
///
/// Money fields keep full `f64` precision; rounding is left to whoever
/// displays them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayResult {
    pub day: u32,
    pub random_draw: f64,
    #[serde(serialize_with = "scenario_label")]
    pub scenario: &'static DemandScenario,
    pub demand: u32,
    pub units_sold: u32,
    pub units_unsold: u32,
    pub units_short: u32,
    pub revenue: f64,
    pub cost: f64,
    pub salvage: f64,
    pub lost_profit: f64,
    pub daily_profit: f64,
}

// CSV rows are flat, so only the label of the scenario is written.
fn scenario_label<S: Serializer>(
    scenario: &&'static DemandScenario,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(scenario.label)
}

impl DayResult {
    /// Applies the newsvendor accounting to one day with a known scenario.
    pub fn settle(
        day: u32,
        random_draw: f64,
        scenario: &'static DemandScenario,
        order_quantity: u32,
        economics: &UnitEconomics,
    ) -> Self {
        let demand = scenario.demand_units;

        let units_sold = order_quantity.min(demand);
        let units_unsold = order_quantity.saturating_sub(demand);
        let units_short = demand.saturating_sub(order_quantity);

        let revenue = f64::from(units_sold) * economics.unit_price;
        let cost = f64::from(order_quantity) * economics.unit_cost;
        let salvage = f64::from(units_unsold) * economics.salvage_value;
        let lost_profit = f64::from(units_short) * economics.lost_profit_penalty;
        let daily_profit = revenue + salvage - cost - lost_profit;

        Self {
            day,
            random_draw,
            scenario,
            demand,
            units_sold,
            units_unsold,
            units_short,
            revenue,
            cost,
            salvage,
            lost_profit,
            daily_profit,
        }
    }

    /// Day profit rounded to cents, for chart series and exports.
    /// Never fed back into totals.
    pub fn rounded_profit(&self) -> f64 {
        round_cents(self.daily_profit)
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running sums over the days of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SimulationTotals {
    pub revenue: f64,
    pub cost: f64,
    pub salvage: f64,
    pub lost_profit: f64,
    pub profit: f64,
}

impl SimulationTotals {
    pub fn accumulate(&mut self, day: &DayResult) {
        self.revenue += day.revenue;
        self.cost += day.cost;
        self.salvage += day.salvage;
        self.lost_profit += day.lost_profit;
        self.profit += day.daily_profit;
    }
}
