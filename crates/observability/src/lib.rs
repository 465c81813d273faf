//! Process-wide tracing/logging setup.
//!
//! The configuration surface is the `RUST_LOG` environment variable; the
//! default filter is `info`.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber: JSON records, env-filtered.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
