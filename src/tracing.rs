//! Console tracing setup for the demo binary.
//!
//! Filtering follows RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mentions::editor=debug` - module-level filtering

use tracing_subscriber::EnvFilter;

/// Initialize the console tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
