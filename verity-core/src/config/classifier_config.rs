use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_VERDICT_CONFIDENCE, MIN_VERDICT_CONFIDENCE};
use crate::errors::{ConfigError, VerityError, VerityResult};

/// Calibration parameters for the heuristic classifier.
///
/// The defaults reproduce the product-tuned constants exactly. None of them
/// come from a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum trimmed article length, in characters.
    pub min_article_chars: usize,
    /// Gap one indicator count must exceed the other by before committing.
    pub hysteresis_margin: u32,
    pub fake_base_confidence: f64,
    /// Added per fake indicator.
    pub fake_confidence_step: f64,
    pub real_base_confidence: f64,
    /// Added per real indicator.
    pub real_confidence_step: f64,
    /// Ceiling for fake/real confidences before the final clamp.
    pub decisive_confidence_cap: f64,
    pub uncertain_base_confidence: f64,
    /// Added per quality pattern on the uncertain branch.
    pub quality_confidence_step: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    /// Shortest run of uppercase letters counted as shouting.
    pub all_caps_min_run: usize,
    /// Escalate when all-caps runs exceed this fraction of the word count.
    pub all_caps_ratio: f64,
    /// Escalate when emotional words exceed this fraction of the word count.
    pub emotional_word_ratio: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_article_chars: defaults::DEFAULT_MIN_ARTICLE_CHARS,
            hysteresis_margin: defaults::DEFAULT_HYSTERESIS_MARGIN,
            fake_base_confidence: defaults::DEFAULT_FAKE_BASE_CONFIDENCE,
            fake_confidence_step: defaults::DEFAULT_FAKE_CONFIDENCE_STEP,
            real_base_confidence: defaults::DEFAULT_REAL_BASE_CONFIDENCE,
            real_confidence_step: defaults::DEFAULT_REAL_CONFIDENCE_STEP,
            decisive_confidence_cap: defaults::DEFAULT_DECISIVE_CONFIDENCE_CAP,
            uncertain_base_confidence: defaults::DEFAULT_UNCERTAIN_BASE_CONFIDENCE,
            quality_confidence_step: defaults::DEFAULT_QUALITY_CONFIDENCE_STEP,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            max_confidence: defaults::DEFAULT_MAX_CONFIDENCE,
            all_caps_min_run: defaults::DEFAULT_ALL_CAPS_MIN_RUN,
            all_caps_ratio: defaults::DEFAULT_ALL_CAPS_RATIO,
            emotional_word_ratio: defaults::DEFAULT_EMOTIONAL_WORD_RATIO,
        }
    }
}

impl ClassifierConfig {
    /// Check that every value is usable by the scoring algorithm.
    pub fn validate(&self) -> VerityResult<()> {
        let probabilities = [
            ("fake_base_confidence", self.fake_base_confidence),
            ("real_base_confidence", self.real_base_confidence),
            ("decisive_confidence_cap", self.decisive_confidence_cap),
            ("uncertain_base_confidence", self.uncertain_base_confidence),
            ("min_confidence", self.min_confidence),
            ("max_confidence", self.max_confidence),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("must be within [0, 1], got {value}")));
            }
        }

        let non_negative = [
            ("fake_confidence_step", self.fake_confidence_step),
            ("real_confidence_step", self.real_confidence_step),
            ("quality_confidence_step", self.quality_confidence_step),
            ("all_caps_ratio", self.all_caps_ratio),
            ("emotional_word_ratio", self.emotional_word_ratio),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be a non-negative number, got {value}")));
            }
        }

        if self.min_confidence < MIN_VERDICT_CONFIDENCE {
            return Err(invalid(
                "min_confidence",
                format!("must be at least {MIN_VERDICT_CONFIDENCE}, got {}", self.min_confidence),
            ));
        }
        if self.max_confidence > MAX_VERDICT_CONFIDENCE {
            return Err(invalid(
                "max_confidence",
                format!("must be at most {MAX_VERDICT_CONFIDENCE}, got {}", self.max_confidence),
            ));
        }

        if self.min_confidence > self.max_confidence {
            return Err(invalid(
                "min_confidence",
                format!(
                    "{} exceeds max_confidence {}",
                    self.min_confidence, self.max_confidence
                ),
            ));
        }

        if self.all_caps_min_run == 0 {
            return Err(invalid("all_caps_min_run", "must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> VerityError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message,
    }
    .into()
}
