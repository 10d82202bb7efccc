// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global log subscriber.
///
/// The level comes from `RUST_LOG` (default: info), e.g.
/// `RUST_LOG=newsvendor_sim=debug` to see every simulated day.
/// Logs go to stderr so the result table on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
