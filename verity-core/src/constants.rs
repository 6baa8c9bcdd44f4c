/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest confidence a verdict may carry.
pub const MIN_VERDICT_CONFIDENCE: f64 = 0.01;

/// Highest confidence a verdict may carry.
pub const MAX_VERDICT_CONFIDENCE: f64 = 0.99;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "VERITY_LOG";
