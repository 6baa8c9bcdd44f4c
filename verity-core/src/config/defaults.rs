// Single source of truth for all default values.

// --- Input ---
pub const DEFAULT_MIN_ARTICLE_CHARS: usize = 50;

// --- Decision rule ---
pub const DEFAULT_HYSTERESIS_MARGIN: u32 = 2;
pub const DEFAULT_FAKE_BASE_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_FAKE_CONFIDENCE_STEP: f64 = 0.1;
pub const DEFAULT_REAL_BASE_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_REAL_CONFIDENCE_STEP: f64 = 0.08;
pub const DEFAULT_DECISIVE_CONFIDENCE_CAP: f64 = 0.95;
pub const DEFAULT_UNCERTAIN_BASE_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_QUALITY_CONFIDENCE_STEP: f64 = 0.05;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.01;
pub const DEFAULT_MAX_CONFIDENCE: f64 = 0.99;

// --- Escalation signals ---
pub const DEFAULT_ALL_CAPS_MIN_RUN: usize = 4;
pub const DEFAULT_ALL_CAPS_RATIO: f64 = 0.05;
pub const DEFAULT_EMOTIONAL_WORD_RATIO: f64 = 0.02;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
