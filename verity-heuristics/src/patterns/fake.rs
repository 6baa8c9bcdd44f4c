//! Misinformation signals: sensational framing, conspiratorial phrasing,
//! urgency pressure, and excessive exclamation.
//!
//! Matched against lowercased text.

use regex::Regex;
use std::sync::LazyLock;

use super::{BuiltinPattern, LazyPattern};

macro_rules! fake_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyPattern = LazyLock::new(|| Regex::new($regex_str));
    };
}

// ── Sensationalism ─────────────────────────────────────────────────────────
fake_pattern!(RE_SHOCKING_TRUTH, r"\bshocking\s+truth\b");
fake_pattern!(RE_YOU_WONT_BELIEVE, r"\byou\s+won'?t\s+believe\b");
fake_pattern!(RE_MIRACLE_CURE, r"\bmiracle\s+(?:cure|pill|remedy|treatment)s?\b");
fake_pattern!(RE_DOCTORS_HATE, r"\bdoctors\s+hate\b");
fake_pattern!(RE_EXPOSED, r"\b(?:exposed|revealed)\s*!");
fake_pattern!(RE_ABSOLUTE_PROOF, r"\b100\s*%\s+(?:proof|proven|guaranteed|true)\b");

// ── Conspiratorial phrasing ────────────────────────────────────────────────
fake_pattern!(RE_WAKE_UP_SHEEPLE, r"\bwake\s+up,?\s+sheeple\b");
fake_pattern!(RE_CONSPIRACY, r"\bconspirac(?:y|ies)\b");
fake_pattern!(
    RE_THEY_DONT_WANT_YOU_TO_KNOW,
    r"\bthey\s+(?:don'?t|do\s+not)\s+want\s+you\s+to\s+know\b"
);
fake_pattern!(RE_COVER_UP, r"\bcover[\s-]?ups?\b");
fake_pattern!(RE_DEEP_STATE, r"\bdeep\s+state\b");
fake_pattern!(RE_HOAX, r"\bhoax(?:es)?\b");
fake_pattern!(RE_BIG_PHARMA, r"\bbig\s+pharma\b");
fake_pattern!(
    RE_MEDIA_LIES,
    r"\b(?:msm|mainstream\s+media)\s+(?:lies|is\s+lying|won'?t\s+(?:tell|report|show))\b"
);

// ── Urgency framing ────────────────────────────────────────────────────────
fake_pattern!(
    RE_SHARE_BEFORE_DELETED,
    r"\bshare\s+(?:this\s+)?before\s+(?:it\s+(?:is|gets)\s+|it'?s\s+)?(?:deleted|removed|banned|censored)\b"
);
fake_pattern!(
    RE_ACT_NOW,
    r"\b(?:act\s+now|before\s+it'?s\s+too\s+late|time\s+is\s+running\s+out)\b"
);

// ── Excessive exclamation ──────────────────────────────────────────────────
fake_pattern!(RE_EXCESSIVE_EXCLAMATION, r"!{2,}");

/// All fake-indicator patterns in table order.
pub fn all_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "shocking_truth",
            regex: &RE_SHOCKING_TRUTH,
        },
        BuiltinPattern {
            name: "you_wont_believe",
            regex: &RE_YOU_WONT_BELIEVE,
        },
        BuiltinPattern {
            name: "miracle_cure",
            regex: &RE_MIRACLE_CURE,
        },
        BuiltinPattern {
            name: "doctors_hate",
            regex: &RE_DOCTORS_HATE,
        },
        BuiltinPattern {
            name: "exposed",
            regex: &RE_EXPOSED,
        },
        BuiltinPattern {
            name: "absolute_proof",
            regex: &RE_ABSOLUTE_PROOF,
        },
        BuiltinPattern {
            name: "wake_up_sheeple",
            regex: &RE_WAKE_UP_SHEEPLE,
        },
        BuiltinPattern {
            name: "conspiracy",
            regex: &RE_CONSPIRACY,
        },
        BuiltinPattern {
            name: "they_dont_want_you_to_know",
            regex: &RE_THEY_DONT_WANT_YOU_TO_KNOW,
        },
        BuiltinPattern {
            name: "cover_up",
            regex: &RE_COVER_UP,
        },
        BuiltinPattern {
            name: "deep_state",
            regex: &RE_DEEP_STATE,
        },
        BuiltinPattern {
            name: "hoax",
            regex: &RE_HOAX,
        },
        BuiltinPattern {
            name: "big_pharma",
            regex: &RE_BIG_PHARMA,
        },
        BuiltinPattern {
            name: "media_lies",
            regex: &RE_MEDIA_LIES,
        },
        BuiltinPattern {
            name: "share_before_deleted",
            regex: &RE_SHARE_BEFORE_DELETED,
        },
        BuiltinPattern {
            name: "act_now",
            regex: &RE_ACT_NOW,
        },
        BuiltinPattern {
            name: "excessive_exclamation",
            regex: &RE_EXCESSIVE_EXCLAMATION,
        },
    ]
}
