use serde::{Deserialize, Serialize};

use crate::models::PatternCategory;

/// Adjustments applied on top of the built-in pattern tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Built-in pattern names to drop.
    pub disabled: Vec<String>,
    /// Extra patterns, compiled case-insensitively.
    pub custom: Vec<CustomPattern>,
}

/// A user-supplied indicator pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub name: String,
    pub category: PatternCategory,
    pub regex: String,
}
