//! Logging setup shared by the binary and any future workers.

pub mod tracing;

/// Install the process-wide subscriber. Idempotent.
pub fn init() {
    tracing::init();
}
