//! # verity-heuristics
//!
//! Offline credibility classifier for news articles.
//! Three ordered tables of regex indicators (fake, real, quality), two
//! ratio-based escalation signals, and a hysteresis decision rule produce a
//! `fake` / `real` / `uncertain` verdict with a bounded confidence.

pub mod degradation;
pub mod engine;
pub mod patterns;
pub mod reasoning;
pub mod scoring;
pub mod signals;

pub use engine::{classify, HeuristicClassifier};
pub use patterns::{IndicatorPattern, PatternSet};
