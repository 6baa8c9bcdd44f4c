use std::sync::LazyLock;

use rayon::prelude::*;
use tracing::debug;
use verity_core::config::{ClassifierConfig, VerityConfig};
use verity_core::errors::{ClassifierError, VerityResult};
use verity_core::models::{AnalysisReport, SignalBreakdown};
use verity_core::traits::IAnalyzer;
use verity_core::{AnalysisVerdict, PatternCategory};

use crate::patterns::PatternSet;
use crate::reasoning;
use crate::scoring::{self, IndicatorCounts};
use crate::signals::TextSignals;

static DEFAULT_CLASSIFIER: LazyLock<HeuristicClassifier> = LazyLock::new(HeuristicClassifier::new);

/// Classify article text with the default calibration and built-in patterns.
pub fn classify(article_text: &str) -> VerityResult<AnalysisVerdict> {
    DEFAULT_CLASSIFIER.classify(article_text)
}

/// Deterministic, pattern-based credibility classifier.
///
/// Implements `IAnalyzer` from verity-core. Holds no per-call state, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    config: ClassifierConfig,
    patterns: PatternSet,
}

impl HeuristicClassifier {
    /// Default calibration with the built-in pattern tables.
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            patterns: PatternSet::shared_builtin().clone(),
        }
    }

    /// Custom calibration with the built-in pattern tables.
    pub fn with_config(config: ClassifierConfig) -> VerityResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            patterns: PatternSet::shared_builtin().clone(),
        })
    }

    /// Calibration and pattern adjustments from a loaded config file.
    pub fn from_config(config: &VerityConfig) -> VerityResult<Self> {
        let classifier = Self::with_config(config.classifier.clone())?;
        let patterns = classifier.patterns.clone().apply_config(&config.patterns)?;
        Ok(classifier.with_patterns(patterns))
    }

    /// Replace the pattern set. The scoring algorithm is unaffected.
    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Classify one article.
    pub fn classify(&self, article_text: &str) -> VerityResult<AnalysisVerdict> {
        Ok(self.classify_with_report(article_text)?.verdict)
    }

    /// Classify one article and keep every intermediate signal.
    pub fn classify_with_report(&self, article_text: &str) -> VerityResult<AnalysisReport> {
        let _span =
            verity_core::classify_span!(self.name(), article_text.chars().count()).entered();

        self.check_length(article_text)?;

        // Patterns see lowercased text; the auxiliary signals need the
        // original casing.
        let normalized = article_text.to_lowercase();
        let matched_fake = self.patterns.matched(PatternCategory::Fake, &normalized);
        let matched_real = self.patterns.matched(PatternCategory::Real, &normalized);
        let matched_quality = self.patterns.matched(PatternCategory::Quality, &normalized);

        let signals = TextSignals::measure(article_text, self.config.all_caps_min_run);
        let all_caps_escalated = signals.all_caps_escalates(self.config.all_caps_ratio);
        let emotional_escalated = signals.emotional_escalates(self.config.emotional_word_ratio);

        let counts = IndicatorCounts {
            fake: count(&matched_fake) + u32::from(all_caps_escalated) + u32::from(emotional_escalated),
            real: count(&matched_real),
            quality: count(&matched_quality),
        };

        let decision = scoring::decide(counts, &self.config);
        let verdict = AnalysisVerdict::new(
            decision.label,
            decision.confidence,
            reasoning::reasoning_for(decision.label, counts),
        )?;

        debug!(
            result = %decision.label,
            confidence = decision.confidence,
            fake = counts.fake,
            real = counts.real,
            quality = counts.quality,
            words = signals.word_count,
            all_caps_escalated,
            emotional_escalated,
            "classified article"
        );

        Ok(AnalysisReport {
            verdict,
            signals: SignalBreakdown {
                fake_indicators: counts.fake,
                real_indicators: counts.real,
                quality_score: counts.quality,
                matched_fake,
                matched_real,
                matched_quality,
                word_count: signals.word_count,
                all_caps_runs: signals.all_caps_runs,
                emotional_words: signals.emotional_words,
                all_caps_escalated,
                emotional_escalated,
            },
            degraded_patterns: self.patterns.degraded_patterns(),
        })
    }

    /// Classify many articles in parallel. Results keep the input order.
    pub fn classify_batch<S>(&self, articles: &[S]) -> Vec<VerityResult<AnalysisVerdict>>
    where
        S: AsRef<str> + Sync,
    {
        let _span = verity_core::batch_span!(articles.len()).entered();
        articles
            .par_iter()
            .map(|article| self.classify(article.as_ref()))
            .collect()
    }

    fn check_length(&self, article_text: &str) -> VerityResult<()> {
        let length = article_text.trim().chars().count();
        if length < self.config.min_article_chars {
            debug!(length, minimum = self.config.min_article_chars, "article too short");
            return Err(ClassifierError::InputTooShort {
                length,
                minimum: self.config.min_article_chars,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IAnalyzer for HeuristicClassifier {
    fn analyze(&self, article_text: &str) -> VerityResult<AnalysisVerdict> {
        self.classify(article_text)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

fn count(matched: &[String]) -> u32 {
    u32::try_from(matched.len()).unwrap_or(u32::MAX)
}
