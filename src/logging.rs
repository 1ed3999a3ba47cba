//! Tracing setup for the command-line binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV_VAR: &str = "PROJECTIONS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "projections=warn";

/// Installs the global subscriber. Later calls are no-ops.
///
/// Filters come from `PROJECTIONS_LOG` (e.g. `projections=debug`) and fall
/// back to warnings only. Output goes to stderr so reports on stdout stay
/// clean.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
