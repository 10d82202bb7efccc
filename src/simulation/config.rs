// src/simulation/config.rs

use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::warn;

pub const USAGE: &str = "\
Usage: newsvendor-sim [OPTIONS]

Options:
  --order-qty N   units ordered each day (default 35)
  --days N        number of simulated days (default 25)
  --seed N        seed for a reproducible run
  --csv PATH      write one row per day to a CSV file
  --chart PATH    render the daily profit bar chart to a PNG file
  -h, --help      print this message";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub order_quantity: u32,
    pub num_days: u32,
    pub seed: Option<u64>,
    pub csv_path: Option<PathBuf>,
    pub chart_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            order_quantity: 35,
            num_days: 25,
            seed: None,
            csv_path: None,
            chart_path: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(SimulationConfig),
    Help,
}

impl SimulationConfig {
    /// Parses program arguments (without the program name).
    ///
    /// Counts go through `coerce_count`, so `--days 0` or `--days abc`
    /// still yields a one-day run instead of an error.
    pub fn from_args<I>(args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "--order-qty" => {
                    let raw = next_value(&mut args, &arg)?;
                    config.order_quantity = coerce_count("order quantity", &raw);
                }
                "--days" => {
                    let raw = next_value(&mut args, &arg)?;
                    config.num_days = coerce_count("number of days", &raw);
                }
                "--seed" => {
                    let raw = next_value(&mut args, &arg)?;
                    let seed = raw
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
                    config.seed = Some(seed);
                }
                "--csv" => config.csv_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
                "--chart" => config.chart_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(Invocation::Run(config))
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

/// Floors a count at 1. Values above `u32::MAX` saturate.
pub fn clamp_count(value: i64) -> u32 {
    if value < 1 {
        1
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Reads a count from user text, leniently.
///
/// Leading whitespace and an optional sign are accepted, and parsing stops
/// at the first non-digit ("12abc" is 12, "3.7" is 3). Text with no leading
/// digits, zero and negative numbers all become 1.
pub fn coerce_count(what: &str, raw: &str) -> u32 {
    let parsed = leading_integer(raw);
    let count = parsed.map_or(1, clamp_count);

    if parsed != Some(i64::from(count)) {
        warn!("{} '{}' is not a positive integer, using {}", what, raw, count);
    }
    count
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Anything too long for i64 is far past u32::MAX anyway.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_config(list: &[&str]) -> SimulationConfig {
        match SimulationConfig::from_args(args(list)) {
            Ok(Invocation::Run(config)) => config,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let config = run_config(&[]);
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.order_quantity, 35);
        assert_eq!(config.num_days, 25);
    }

    #[test]
    fn all_flags_are_read() {
        let config = run_config(&[
            "--order-qty", "30", "--days", "10", "--seed", "99", "--csv", "out.csv", "--chart",
            "profit.png",
        ]);
        assert_eq!(config.order_quantity, 30);
        assert_eq!(config.num_days, 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.csv_path, Some(PathBuf::from("out.csv")));
        assert_eq!(config.chart_path, Some(PathBuf::from("profit.png")));
    }

    #[test]
    fn bad_counts_fall_back_to_one() {
        let config = run_config(&["--order-qty", "0", "--days", "abc"]);
        assert_eq!(config.order_quantity, 1);
        assert_eq!(config.num_days, 1);

        let config = run_config(&["--order-qty", "-12", "--days", ""]);
        assert_eq!(config.order_quantity, 1);
        assert_eq!(config.num_days, 1);
    }

    #[test]
    fn counts_parse_like_a_lenient_integer_reader() {
        assert_eq!(coerce_count("n", "12abc"), 12);
        assert_eq!(coerce_count("n", "3.7"), 3);
        assert_eq!(coerce_count("n", "  +8"), 8);
        assert_eq!(coerce_count("n", "99999999999999999999999"), u32::MAX);
    }

    #[test]
    fn clamp_floors_at_one() {
        assert_eq!(clamp_count(-5), 1);
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(1), 1);
        assert_eq!(clamp_count(40), 40);
        assert_eq!(clamp_count(i64::MAX), u32::MAX);
    }

    #[test]
    fn help_wins() {
        let parsed = SimulationConfig::from_args(args(&["--days", "3", "--help"]));
        assert_eq!(parsed, Ok(Invocation::Help));
    }

    #[test]
    fn argument_errors() {
        assert_eq!(
            SimulationConfig::from_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument("--verbose".into()))
        );
        assert_eq!(
            SimulationConfig::from_args(args(&["--days"])),
            Err(ConfigError::MissingValue("--days".into()))
        );
        assert_eq!(
            SimulationConfig::from_args(args(&["--seed", "-1"])),
            Err(ConfigError::InvalidSeed("-1".into()))
        );
    }
}
