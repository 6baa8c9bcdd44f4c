use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_VERDICT_CONFIDENCE, MIN_VERDICT_CONFIDENCE};
use crate::errors::{ClassifierError, VerityResult};

/// Credibility category assigned to an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Fake,
    Real,
    Uncertain,
}

impl VerdictLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "fake",
            Self::Real => "real",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerdictLabel {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fake" => Ok(Self::Fake),
            "real" => Ok(Self::Real),
            "uncertain" => Ok(Self::Uncertain),
            other => Err(ClassifierError::InvalidVerdict {
                reason: format!("unknown result label: {other:?}"),
            }),
        }
    }
}

/// The structured output of classification.
///
/// Serializes to exactly `{ result, confidence, reasoning }`. Every instance
/// satisfies `0.01 <= confidence <= 0.99` and carries non-blank reasoning;
/// deserialization goes through the same checks as [`AnalysisVerdict::new`].
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AnalysisVerdict {
    result: VerdictLabel,
    confidence: f64,
    reasoning: String,
}

impl AnalysisVerdict {
    /// Build a verdict, rejecting out-of-range confidence and blank reasoning.
    pub fn new(
        result: VerdictLabel,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> VerityResult<Self> {
        if !(MIN_VERDICT_CONFIDENCE..=MAX_VERDICT_CONFIDENCE).contains(&confidence) {
            return Err(ClassifierError::InvalidVerdict {
                reason: format!(
                    "confidence {confidence} outside [{MIN_VERDICT_CONFIDENCE}, {MAX_VERDICT_CONFIDENCE}]"
                ),
            }
            .into());
        }
        let reasoning = reasoning.into();
        if reasoning.trim().is_empty() {
            return Err(ClassifierError::InvalidVerdict {
                reason: "reasoning is empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            result,
            confidence,
            reasoning,
        })
    }

    /// Build a verdict from an external 0–1 score, clamping it into the
    /// verdict range. NaN and infinite scores are still rejected.
    pub fn clamped(
        result: VerdictLabel,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> VerityResult<Self> {
        if !confidence.is_finite() {
            return Err(ClassifierError::InvalidVerdict {
                reason: format!("confidence {confidence} is not a finite number"),
            }
            .into());
        }
        Self::new(
            result,
            confidence.clamp(MIN_VERDICT_CONFIDENCE, MAX_VERDICT_CONFIDENCE),
            reasoning,
        )
    }

    pub fn result(&self) -> VerdictLabel {
        self.result
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn into_parts(self) -> (VerdictLabel, f64, String) {
        (self.result, self.confidence, self.reasoning)
    }

    /// Parse a verdict from an external analyzer's JSON reply. Malformed JSON
    /// and invariant violations both surface as `SerializationError`.
    pub fn from_json(json: &str) -> VerityResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> VerityResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Deserialize)]
struct RawVerdict {
    result: VerdictLabel,
    confidence: f64,
    reasoning: String,
}

impl<'de> Deserialize<'de> for AnalysisVerdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawVerdict::deserialize(deserializer)?;
        Self::new(raw.result, raw.confidence, raw.reasoning).map_err(serde::de::Error::custom)
    }
}
