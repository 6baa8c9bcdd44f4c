//! Reasoning templates, one per branch of the decision rule.

use verity_core::VerdictLabel;

use crate::scoring::IndicatorCounts;

pub const UNCERTAIN_REASONING: &str = "The article shows mixed or insufficient credibility signals \
to reach a confident verdict. Verify its claims with independent, reputable sources before sharing it.";

pub fn fake_reasoning(fake_indicators: u32) -> String {
    format!(
        "Found {fake_indicators} misinformation {} such as sensational, conspiratorial, or \
         emotionally charged language. Treat this article with skepticism and check its claims \
         against trusted outlets.",
        plural(fake_indicators)
    )
}

pub fn real_reasoning(real_indicators: u32) -> String {
    format!(
        "Found {real_indicators} credibility {} such as source attribution or references to \
         published research and official statements.",
        plural(real_indicators)
    )
}

/// Render the template for the branch the decision rule took.
pub fn reasoning_for(label: VerdictLabel, counts: IndicatorCounts) -> String {
    match label {
        VerdictLabel::Fake => fake_reasoning(counts.fake),
        VerdictLabel::Real => real_reasoning(counts.real),
        VerdictLabel::Uncertain => UNCERTAIN_REASONING.to_string(),
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        "indicator"
    } else {
        "indicators"
    }
}
