//! Span definitions per operation.
//!
//! The macros expand to `tracing::info_span!`, so calling crates need a
//! `tracing` dependency.

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($analyzer:expr, $chars:expr) => {
        tracing::info_span!("verity.classify", analyzer = %$analyzer, chars = $chars)
    };
}

/// Create a batch classification span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("verity.classify_batch", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "verity.classify";
    pub const CLASSIFY_BATCH: &str = "verity.classify_batch";
}
