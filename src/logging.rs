//! Diagnostic logging for the `pagetrace` binary

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PAGETRACE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `tracing` subscriber filtered by [`LOG_ENV`].
///
/// Stdout is left for trace output. Calling this more than once is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Fails only when a subscriber is already installed.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
