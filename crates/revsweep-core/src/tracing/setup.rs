//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the revsweep tracing/logging system.
///
/// Reads the `REVSWEEP_LOG` environment variable for per-crate log levels.
/// Format: `REVSWEEP_LOG=revsweep_scan=debug,revsweep_core=info`
///
/// Falls back to `revsweep=warn` if `REVSWEEP_LOG` is not set or is invalid.
/// Output goes to stderr so stdout carries only the report.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REVSWEEP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("revsweep=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
