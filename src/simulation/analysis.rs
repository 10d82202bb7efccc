// src/simulation/analysis.rs

//! Analytic side of the newsvendor model.
//!
//! The engine samples days at random; the functions here give the value a
//! long run should converge to, plus how often each scenario actually came
//! up, so a finished run can be read against its expectation.

use crate::model::outcome::{DayResult, UnitEconomics};
use crate::model::scenario::{DemandScenario, DEMAND_MODEL};
use crate::simulation::engine::SimulationRun;

/// Probability-weighted daily profit for a fixed order quantity.
///
/// Formula: E[profit] = sum over scenarios of P(s) * profit(q, demand(s))
pub fn expected_daily_profit(order_quantity: u32) -> f64 {
    DEMAND_MODEL
        .iter()
        .map(|scenario| {
            let day = DayResult::settle(
                1,
                0.0,
                scenario,
                order_quantity,
                &UnitEconomics::STANDARD,
            );
            scenario.probability * day.daily_profit
        })
        .sum()
}

/// How often one scenario occurred within a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioFrequency {
    pub scenario: &'static DemandScenario,
    pub days: usize,
    /// Observed share of days, to compare with `scenario.probability`.
    pub share: f64,
}

/// Counts the days of each scenario, in demand model order.
pub fn scenario_frequencies(run: &SimulationRun) -> Vec<ScenarioFrequency> {
    let total = run.num_days();

    DEMAND_MODEL
        .iter()
        .map(|scenario| {
            let days = run
                .days()
                .iter()
                .filter(|day| day.scenario.label == scenario.label)
                .count();
            ScenarioFrequency {
                scenario,
                days,
                share: days as f64 / total as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::sources::{ScriptedSource, UniformSource};
    use crate::simulation::engine::run;

    #[test]
    fn expected_profit_at_thirty_five_units() {
        // Peak 210, Normal 185, Slow 65
        let expected = 0.25 * 210.0 + 0.5 * 185.0 + 0.25 * 65.0;
        assert!((expected_daily_profit(35) - expected).abs() < 1e-9);
        assert!((expected_daily_profit(35) - 161.25).abs() < 1e-9);
    }

    #[test]
    fn frequencies_count_each_scenario() {
        let mut source = ScriptedSource::new([0.1, 0.2, 0.5, 0.9]);
        let run = run(30, 4, &mut source).unwrap();
        let freq = scenario_frequencies(&run);

        let days: Vec<usize> = freq.iter().map(|f| f.days).collect();
        assert_eq!(days, vec![2, 1, 1]);
        assert_eq!(freq[0].scenario.label, "Peak");
        assert_eq!(freq[0].share, 0.5);
    }

    #[test]
    fn long_runs_approach_the_expectation() {
        let mut source = UniformSource::seeded(314);
        let run = run(35, 20_000, &mut source).unwrap();

        let expected = expected_daily_profit(35);
        assert!(
            (run.mean_daily_profit() - expected).abs() < 5.0,
            "mean {} vs expected {}",
            run.mean_daily_profit(),
            expected
        );

        for f in scenario_frequencies(&run) {
            assert!((f.share - f.scenario.probability).abs() < 0.02);
        }
    }
}
