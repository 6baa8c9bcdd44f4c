use std::fmt;

use serde::{Deserialize, Serialize};

/// Which score an indicator pattern contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Misinformation signals: sensationalism, conspiracy, urgency.
    Fake,
    /// Credible-journalism signals: attribution, citations.
    Real,
    /// Analytical writing style: connectives, investigative vocabulary.
    Quality,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 3] = [Self::Fake, Self::Real, Self::Quality];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "fake",
            Self::Real => "real",
            Self::Quality => "quality",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
