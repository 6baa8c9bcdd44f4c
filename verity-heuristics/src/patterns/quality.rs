//! Analytical writing style: discourse connectives and investigative
//! vocabulary. Matched against lowercased text.

use regex::Regex;
use std::sync::LazyLock;

use super::{BuiltinPattern, LazyPattern};

macro_rules! quality_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyPattern = LazyLock::new(|| Regex::new($regex_str));
    };
}

// ── Discourse connectives ──────────────────────────────────────────────────
quality_pattern!(RE_HOWEVER, r"\bhowever\b");
quality_pattern!(RE_FURTHERMORE, r"\b(?:furthermore|moreover|additionally)\b");
quality_pattern!(RE_THEREFORE, r"\b(?:therefore|consequently|thus)\b");
quality_pattern!(RE_NEVERTHELESS, r"\b(?:nevertheless|nonetheless)\b");
quality_pattern!(RE_CONTRAST, r"\b(?:in\s+contrast|on\s+the\s+other\s+hand)\b");

// ── Investigative vocabulary ───────────────────────────────────────────────
quality_pattern!(RE_INVESTIGATION, r"\binvestigat(?:ion|ions|ed|ing|ors?)\b");
quality_pattern!(RE_ANALYSIS, r"\banaly(?:sis|ses|zed|sed)\b");
quality_pattern!(RE_EVIDENCE, r"\bevidence\b");
quality_pattern!(RE_METHODOLOGY, r"\bmethodolog(?:y|ies)\b");

/// All quality patterns in table order.
pub fn all_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "however",
            regex: &RE_HOWEVER,
        },
        BuiltinPattern {
            name: "furthermore",
            regex: &RE_FURTHERMORE,
        },
        BuiltinPattern {
            name: "therefore",
            regex: &RE_THEREFORE,
        },
        BuiltinPattern {
            name: "nevertheless",
            regex: &RE_NEVERTHELESS,
        },
        BuiltinPattern {
            name: "contrast",
            regex: &RE_CONTRAST,
        },
        BuiltinPattern {
            name: "investigation",
            regex: &RE_INVESTIGATION,
        },
        BuiltinPattern {
            name: "analysis",
            regex: &RE_ANALYSIS,
        },
        BuiltinPattern {
            name: "evidence",
            regex: &RE_EVIDENCE,
        },
        BuiltinPattern {
            name: "methodology",
            regex: &RE_METHODOLOGY,
        },
    ]
}
