mod classifier_config;
pub mod defaults;
mod observability_config;
mod pattern_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use observability_config::ObservabilityConfig;
pub use pattern_config::{CustomPattern, PatternConfig};

use crate::errors::{ConfigError, VerityResult};

/// Top-level configuration aggregating every subsystem config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub classifier: ClassifierConfig,
    pub patterns: PatternConfig,
    pub observability: ObservabilityConfig,
}

impl VerityConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> VerityResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> VerityResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> VerityResult<()> {
        self.classifier.validate()
    }
}
