//! Decision rule and confidence model.

use verity_core::config::ClassifierConfig;
use verity_core::VerdictLabel;

/// Indicator totals fed into the decision rule. `fake` includes escalations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorCounts {
    pub fake: u32,
    pub real: u32,
    pub quality: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub label: VerdictLabel,
    pub confidence: f64,
}

/// Apply the hysteresis rule. Fake is tested before real, and both
/// comparisons are strict, so a gap equal to the margin stays uncertain.
///
/// `config` must have passed `ClassifierConfig::validate`; `HeuristicClassifier`
/// is the only caller and validates on construction.
pub(crate) fn decide(counts: IndicatorCounts, config: &ClassifierConfig) -> Decision {
    let margin = config.hysteresis_margin;

    let (label, raw) = if counts.fake > counts.real.saturating_add(margin) {
        let raw = config.fake_base_confidence + config.fake_confidence_step * f64::from(counts.fake);
        (VerdictLabel::Fake, raw.min(config.decisive_confidence_cap))
    } else if counts.real > counts.fake.saturating_add(margin) {
        let raw = config.real_base_confidence + config.real_confidence_step * f64::from(counts.real);
        (VerdictLabel::Real, raw.min(config.decisive_confidence_cap))
    } else {
        let raw = config.uncertain_base_confidence
            + config.quality_confidence_step * f64::from(counts.quality);
        (VerdictLabel::Uncertain, raw)
    };

    Decision {
        label,
        confidence: raw.clamp(config.min_confidence, config.max_confidence),
    }
}
