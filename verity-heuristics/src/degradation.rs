//! Built-in patterns that failed to compile.
//!
//! A failing regex is skipped and the classifier keeps scoring with the rest
//! of its table. `PatternSet` owns the tracker, and reports list its entries.

use tracing::warn;

/// One built-in regex that could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    /// `fake`, `real`, `quality`, or `signal` for the emotional vocabulary.
    pub category: String,
    /// The compiler's own message.
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a compile failure and log it once.
    pub fn record_failure(&mut self, pattern_name: &str, category: &str, error: &regex::Error) {
        warn!(
            pattern = pattern_name,
            category,
            error = %error,
            "built-in pattern failed to compile, skipping"
        );
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            category: category.to_string(),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn is_degraded(&self, pattern_name: &str) -> bool {
        self.failures.iter().any(|f| f.pattern_name == pattern_name)
    }

    /// Names of the skipped patterns, in the order they failed.
    pub fn pattern_names(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.pattern_name.clone()).collect()
    }
}
