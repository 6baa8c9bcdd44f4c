//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Verity tracing/logging system with structured JSON output.
///
/// Reads the `VERITY_LOG` environment variable for filtering, e.g.
/// `VERITY_LOG=verity_heuristics=debug`. Falls back to `verity=info` if it is
/// not set or is invalid.
///
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("verity=info"));
        install(filter);
    });
}

/// Initialize tracing with a custom filter string, such as
/// `ObservabilityConfig::log_level`. Shares the once-guard with `init_tracing`.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = filter.to_string();
    INIT.call_once(move || install(EnvFilter::new(filter)));
}

/// Initialize tracing from the `[observability]` config section. `VERITY_LOG`
/// still takes precedence when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(format!("verity={}", config.log_level)));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    // `try_init` so an embedding application's subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}
