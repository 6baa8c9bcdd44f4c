//! Credible-journalism signals: attribution phrases and citations of
//! research or official sources. Matched against lowercased text.

use regex::Regex;
use std::sync::LazyLock;

use super::{BuiltinPattern, LazyPattern};

macro_rules! real_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyPattern = LazyLock::new(|| Regex::new($regex_str));
    };
}

// ── Attribution ────────────────────────────────────────────────────────────
real_pattern!(RE_ACCORDING_TO, r"\baccording\s+to\b");
real_pattern!(
    RE_OFFICIAL_STATEMENT,
    r"\b(?:officials?|spokes(?:person|man|woman)|ministry|department)\s+(?:said|stated|confirmed|announced)\b"
);
real_pattern!(RE_SAID_IN_STATEMENT, r"\bsaid\s+in\s+a\s+(?:statement|press\s+release|briefing)\b");
real_pattern!(RE_CONFIRMED_BY, r"\bconfirmed\s+by\b");

// ── Research and sources ───────────────────────────────────────────────────
real_pattern!(
    RE_RESEARCH_SHOWS,
    r"\b(?:research|studies|study|data)\s+(?:shows?|suggests?|indicates?|found)\b"
);
real_pattern!(RE_PUBLISHED_IN, r"\bpublished\s+in\b");
real_pattern!(RE_PEER_REVIEWED, r"\bpeer[\s-]reviewed\b");
real_pattern!(RE_RESEARCHERS_AT, r"\bresearchers\s+(?:at|from)\b");
real_pattern!(RE_DATA_FROM, r"\b(?:data|figures|statistics)\s+(?:from|released\s+by)\b");
real_pattern!(RE_REPORT_BY, r"\b(?:report|survey|census)\s+(?:by|from)\b");

/// All real-indicator patterns in table order.
pub fn all_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "according_to",
            regex: &RE_ACCORDING_TO,
        },
        BuiltinPattern {
            name: "official_statement",
            regex: &RE_OFFICIAL_STATEMENT,
        },
        BuiltinPattern {
            name: "said_in_statement",
            regex: &RE_SAID_IN_STATEMENT,
        },
        BuiltinPattern {
            name: "confirmed_by",
            regex: &RE_CONFIRMED_BY,
        },
        BuiltinPattern {
            name: "research_shows",
            regex: &RE_RESEARCH_SHOWS,
        },
        BuiltinPattern {
            name: "published_in",
            regex: &RE_PUBLISHED_IN,
        },
        BuiltinPattern {
            name: "peer_reviewed",
            regex: &RE_PEER_REVIEWED,
        },
        BuiltinPattern {
            name: "researchers_at",
            regex: &RE_RESEARCHERS_AT,
        },
        BuiltinPattern {
            name: "data_from",
            regex: &RE_DATA_FROM,
        },
        BuiltinPattern {
            name: "report_by",
            regex: &RE_REPORT_BY,
        },
    ]
}
