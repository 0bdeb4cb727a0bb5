// src/logging.rs
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sends diagnostics to stderr; stdout is kept for the rename/fix audit trail.
///
/// `RUST_LOG` wins when set, otherwise `info`, or `debug` with `verbose`.
#[inline]
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
