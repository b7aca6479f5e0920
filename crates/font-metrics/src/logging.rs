//! Logging setup for the `font-metrics` binary.
//!
//! Logs go to stderr, keeping stdout free for the metric labels.
//!
//! ## Environment Variables
//!
//! 1. **`FONT_METRICS_LOG`** (highest priority) - filter for this tool only
//! 2. **`RUST_LOG`** - standard tracing environment variable
//! 3. **Default** - `warn`

use std::{env, io};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter")]
    Filter(#[from] ParseError),
    #[error("failed to install global subscriber")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber.
pub fn init() -> Result<(), LoggingError> {
    let filter = create_filter()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Initialize logging for tests.
///
/// Output is captured by the test harness. Safe to call from every test,
/// only the first call installs a subscriber.
pub fn test() {
    if let Ok(filter) = create_filter() {
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    }
}

fn create_filter() -> Result<EnvFilter, ParseError> {
    let directives = env::var("FONT_METRICS_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    EnvFilter::try_new(directives)
}
