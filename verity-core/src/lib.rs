//! # verity-core
//!
//! Foundation crate for the Verity credibility classifier.
//! Defines the verdict types, the analyzer trait, errors, config, constants,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::VerityConfig;
pub use errors::{VerityError, VerityResult};
pub use models::{AnalysisVerdict, PatternCategory, VerdictLabel};
pub use traits::IAnalyzer;
