// src/model/scenario.rs

use serde::Serialize;

/// One discrete demand outcome of the daily demand model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandScenario {
    pub label: &'static str,
    pub demand_units: u32,
    pub probability: f64,
}

pub const PEAK: DemandScenario = DemandScenario {
    label: "Peak",
    demand_units: 40,
    probability: 0.25,
};

pub const NORMAL: DemandScenario = DemandScenario {
    label: "Normal",
    demand_units: 30,
    probability: 0.50,
};

pub const SLOW: DemandScenario = DemandScenario {
    label: "Slow",
    demand_units: 20,
    probability: 0.25,
};

/// The demand model, in the order the sampler walks it.
pub static DEMAND_MODEL: [DemandScenario; 3] = [PEAK, NORMAL, SLOW];

// Cumulative cut points of DEMAND_MODEL. Fixed constants, not a running sum,
// so the interval edges never pick up rounding drift.
const PEAK_UPPER: f64 = 0.25;
const NORMAL_UPPER: f64 = 0.75;

/// Maps a uniform draw in [0, 1) onto a demand scenario.
///
/// Intervals are lower-inclusive and upper-exclusive:
/// * `[0, 0.25)`    -> Peak
/// * `[0.25, 0.75)` -> Normal
/// * `[0.75, 1)`    -> Slow
///
/// Draws outside `[0, 1)` are rejected by the engine before they get here.
pub fn sample(r: f64) -> &'static DemandScenario {
    if r < PEAK_UPPER {
        &DEMAND_MODEL[0]
    } else if r < NORMAL_UPPER {
        &DEMAND_MODEL[1]
    } else {
        &DEMAND_MODEL[2]
    }
}

/// Sum of all scenario probabilities. Should be 1 within float tolerance.
pub fn total_probability() -> f64 {
    DEMAND_MODEL.iter().map(|s| s.probability).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities_are_non_negative_and_sum_to_one() {
        assert!(DEMAND_MODEL.iter().all(|s| s.probability >= 0.0));
        assert!((total_probability() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn thresholds_match_cumulative_probabilities() {
        assert!((PEAK_UPPER - PEAK.probability).abs() < 1e-12);
        assert!((NORMAL_UPPER - (PEAK.probability + NORMAL.probability)).abs() < 1e-12);
    }

    #[test]
    fn low_draws_are_peak_days() {
        for r in [0.0, 0.1, 0.2, 0.249_999_999] {
            assert_eq!(sample(r), &PEAK, "r = {}", r);
        }
        assert_eq!(sample(0.0).demand_units, 40);
    }

    #[test]
    fn middle_draws_are_normal_days() {
        for r in [0.25, 0.3, 0.5, 0.749_999_999] {
            assert_eq!(sample(r), &NORMAL, "r = {}", r);
        }
        assert_eq!(sample(0.5).demand_units, 30);
    }

    #[test]
    fn high_draws_are_slow_days() {
        for r in [0.75, 0.8, 0.9, 0.999_999_999] {
            assert_eq!(sample(r), &SLOW, "r = {}", r);
        }
        assert_eq!(sample(0.9).demand_units, 20);
    }

    #[test]
    fn boundaries_belong_to_the_upper_scenario() {
        assert_eq!(sample(0.25).label, "Normal");
        assert_eq!(sample(0.75).label, "Slow");
    }
}
