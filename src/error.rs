// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a simulation run. A run that fails returns no partial days.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("random draw for day {day} is {value}, expected a value in [0, 1)")]
    RandomDrawOutOfRange { day: u32, value: f64 },

    #[error("random source ran out of draws at day {day}")]
    RandomSourceExhausted { day: u32 },
}

/// Problems with command-line arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid seed '{0}', expected an unsigned integer")]
    InvalidSeed(String),
}

/// Failures while writing results out.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush CSV to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart to {path}: {source}")]
    Chart {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("nothing to chart: the profit series is empty")]
    EmptySeries,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn chart_error_keeps_its_cause() {
        let err = ReportError::Chart {
            path: PathBuf::from("profit.png"),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only directory",
            )),
        };

        assert_eq!(
            err.to_string(),
            "failed to render chart to profit.png: read-only directory"
        );
        let cause = err.source().expect("chart error should expose its cause");
        assert_eq!(cause.to_string(), "read-only directory");
        assert!(cause.downcast_ref::<std::io::Error>().is_some());
    }
}
