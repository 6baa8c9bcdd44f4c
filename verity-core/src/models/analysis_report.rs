use serde::{Deserialize, Serialize};

use super::verdict::AnalysisVerdict;

/// Every intermediate signal behind a verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    /// Fake-indicator count after escalations.
    pub fake_indicators: u32,
    pub real_indicators: u32,
    pub quality_score: u32,
    /// Names of fake patterns that matched, in table order.
    pub matched_fake: Vec<String>,
    pub matched_real: Vec<String>,
    pub matched_quality: Vec<String>,
    pub word_count: usize,
    pub all_caps_runs: usize,
    pub emotional_words: usize,
    /// Whether the all-caps ratio added a fake indicator.
    pub all_caps_escalated: bool,
    /// Whether the emotional-word ratio added a fake indicator.
    pub emotional_escalated: bool,
}

/// A verdict together with the signals that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub verdict: AnalysisVerdict,
    pub signals: SignalBreakdown,
    /// Built-in patterns skipped because they failed to compile.
    pub degraded_patterns: Vec<String>,
}
