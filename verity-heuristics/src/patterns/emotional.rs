//! Emotional-intensity vocabulary.
//!
//! Unlike the indicator tables, every occurrence counts, and the count only
//! matters relative to the word count (see `signals`).

use regex::Regex;
use std::sync::LazyLock;

use super::LazyPattern;

pub const VOCABULARY_NAME: &str = "emotional_vocabulary";

pub static RE_EMOTIONAL_WORDS: LazyPattern = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:amazing|terrible|horrible|disgusting|love|hate|outrageous|furious|evil|insane|disgraceful|unbelievable)\b",
    )
});

/// Count every occurrence of an emotional word. Zero if the vocabulary
/// failed to compile.
pub fn count_emotional_words(text: &str) -> usize {
    RE_EMOTIONAL_WORDS
        .as_ref()
        .map_or(0, |re| re.find_iter(text).count())
}
