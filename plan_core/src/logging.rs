//! Logging infrastructure for fitplan.
//!
//! The engines log their decisions (protocol choice, focus muscles, pool
//! padding, meal fallbacks) at debug and composer events at info. Output
//! goes to stderr so `fitplan --json` keeps stdout parseable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging for the CLI at INFO
///
/// This sets up tracing with:
/// - Environment-based filtering (RUST_LOG)
/// - Compact format on stderr
///
/// RUST_LOG wins over the default, e.g. `RUST_LOG=plan_core::meal=debug`
/// to see only the slot fallbacks.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default directive when RUST_LOG is unset; `--verbose`
///   passes `debug`
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route engine logs through the test harness so failing tests show them
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("plan_core=debug"))
        .try_init();
}
