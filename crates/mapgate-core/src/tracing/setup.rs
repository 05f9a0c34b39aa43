//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the mapgate logging system.
///
/// Reads `MAPGATE_LOG` for per-module log levels, e.g.
/// `MAPGATE_LOG=mapgate_engine=debug,mapgate_cli=warn`.
///
/// Falls back to `mapgate=info` if `MAPGATE_LOG` is not set or is invalid.
/// Output goes to stderr so stdout only carries the report.
///
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(filter)
            .try_init();
    });
}
