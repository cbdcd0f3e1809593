//! Log subscriber setup for the binary.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The filter comes from `LEDGERLOCK_LOG` (same syntax as `RUST_LOG`)
//! and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LEDGERLOCK_LOG";

/// Install the global fmt subscriber.  A second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
