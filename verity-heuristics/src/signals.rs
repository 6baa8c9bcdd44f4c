//! Ratio-based auxiliary signals measured on the original (un-lowercased)
//! text.
//!
//! These are not indicator patterns: a pattern counts once when present,
//! while each signal here adds a fake indicator only when its count exceeds a
//! fraction of the word count.

use crate::patterns::emotional::count_emotional_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSignals {
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Maximal runs of uppercase letters at least `min_run` long.
    pub all_caps_runs: usize,
    /// Occurrences of emotional-intensity words.
    pub emotional_words: usize,
}

impl TextSignals {
    pub fn measure(text: &str, all_caps_min_run: usize) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            all_caps_runs: count_all_caps_runs(text, all_caps_min_run),
            emotional_words: count_emotional_words(text),
        }
    }

    /// Shouting escalation. Never fires on empty text.
    pub fn all_caps_escalates(&self, ratio: f64) -> bool {
        exceeds_ratio(self.all_caps_runs, self.word_count, ratio)
    }

    /// Emotional-language escalation. Never fires on empty text.
    pub fn emotional_escalates(&self, ratio: f64) -> bool {
        exceeds_ratio(self.emotional_words, self.word_count, ratio)
    }
}

fn exceeds_ratio(count: usize, word_count: usize, ratio: f64) -> bool {
    if word_count == 0 {
        return false;
    }
    count as f64 > ratio * word_count as f64
}

/// Count maximal runs of consecutive uppercase letters of length `min_run`
/// or more.
pub fn count_all_caps_runs(text: &str, min_run: usize) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for c in text.chars() {
        if c.is_uppercase() {
            current += 1;
        } else {
            if current >= min_run {
                runs += 1;
            }
            current = 0;
        }
    }
    if current >= min_run {
        runs += 1;
    }
    runs
}
