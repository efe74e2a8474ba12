//! JSON log subscriber wiring.

use tracing_subscriber::EnvFilter;

/// Level directives used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info";

/// Install the process-wide subscriber: flattened JSON lines on stdout,
/// levels taken from `RUST_LOG` when present.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
