pub mod emotional;
pub mod fake;
pub mod quality;
pub mod real;

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use verity_core::config::PatternConfig;
use verity_core::errors::{ConfigError, VerityResult};
use verity_core::PatternCategory;

use crate::degradation::DegradationTracker;

/// A lazily compiled built-in regex. The compile error is kept so a broken
/// pattern can be reported with the compiler's message.
pub type LazyPattern = LazyLock<Result<Regex, regex::Error>>;

/// A built-in pattern as declared in the category tables.
pub struct BuiltinPattern {
    pub name: &'static str,
    pub regex: &'static LazyPattern,
}

/// A compiled indicator pattern tagged with the score it feeds.
#[derive(Debug, Clone)]
pub struct IndicatorPattern {
    name: String,
    category: PatternCategory,
    regex: Regex,
}

impl IndicatorPattern {
    /// Compile a pattern case-insensitively.
    pub fn new(
        name: impl Into<String>,
        category: PatternCategory,
        pattern: &str,
    ) -> VerityResult<Self> {
        let name = name.into();
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                name: name.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            name,
            category,
            regex,
        })
    }

    pub fn from_regex(name: impl Into<String>, category: PatternCategory, regex: Regex) -> Self {
        Self {
            name: name.into(),
            category,
            regex,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> PatternCategory {
        self.category
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

static BUILTIN: LazyLock<PatternSet> = LazyLock::new(PatternSet::builtin);

/// Ordered, category-tagged collection of indicator patterns.
///
/// Each pattern counts at most once per text, however often it occurs.
/// Pattern names are unique within a set.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<IndicatorPattern>,
    degradation: DegradationTracker,
}

impl PatternSet {
    /// A set with no patterns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in tables. Patterns that fail to compile are skipped and
    /// recorded in [`PatternSet::degradation`].
    pub fn builtin() -> Self {
        Self::from_tables(
            [
                (PatternCategory::Fake, fake::all_patterns()),
                (PatternCategory::Real, real::all_patterns()),
                (PatternCategory::Quality, quality::all_patterns()),
            ],
            &emotional::RE_EMOTIONAL_WORDS,
        )
    }

    /// The process-wide built-in set, compiled on first use.
    pub fn shared_builtin() -> &'static PatternSet {
        &BUILTIN
    }

    fn from_tables<I>(tables: I, vocabulary: &LazyPattern) -> Self
    where
        I: IntoIterator<Item = (PatternCategory, Vec<BuiltinPattern>)>,
    {
        let mut set = Self::empty();
        for (category, table) in tables {
            for pat in table {
                match pat.regex.as_ref() {
                    Ok(re) => set.patterns.push(IndicatorPattern::from_regex(
                        pat.name,
                        category,
                        re.clone(),
                    )),
                    Err(e) => set.degradation.record_failure(pat.name, category.as_str(), e),
                }
            }
        }

        if let Err(e) = vocabulary.as_ref() {
            set.degradation
                .record_failure(emotional::VOCABULARY_NAME, "signal", e);
        }

        set
    }

    /// Add a pattern, replacing any existing pattern with the same name.
    pub fn with_pattern(mut self, pattern: IndicatorPattern) -> Self {
        match self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
        self
    }

    /// Remove a pattern by name. Unknown names are ignored.
    pub fn without_pattern(mut self, name: &str) -> Self {
        self.patterns.retain(|p| p.name != name);
        self
    }

    /// Drop the disabled patterns and compile the custom ones. A disabled
    /// name must refer to a pattern in the set or to a degraded built-in.
    pub fn apply_config(self, config: &PatternConfig) -> VerityResult<Self> {
        let mut set = self;
        for name in &config.disabled {
            if !set.contains(name) && !set.degradation.is_degraded(name) {
                return Err(ConfigError::InvalidValue {
                    field: "patterns.disabled".to_string(),
                    message: format!("unknown pattern '{name}'"),
                }
                .into());
            }
            set = set.without_pattern(name);
        }
        for custom in &config.custom {
            let pattern = IndicatorPattern::new(&custom.name, custom.category, &custom.regex)?;
            set = set.with_pattern(pattern);
        }
        Ok(set)
    }

    pub fn iter(&self, category: PatternCategory) -> impl Iterator<Item = &IndicatorPattern> {
        self.patterns.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self, category: PatternCategory) -> usize {
        self.iter(category).count()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.name == name)
    }

    /// Names of the patterns in `category` that match `text`, in table order.
    pub fn matched(&self, category: PatternCategory, text: &str) -> Vec<String> {
        self.iter(category)
            .filter(|p| p.is_match(text))
            .map(|p| p.name.clone())
            .collect()
    }

    /// Names of the built-in patterns skipped because they failed to compile.
    pub fn degraded_patterns(&self) -> Vec<String> {
        self.degradation.pattern_names()
    }

    pub fn degradation(&self) -> &DegradationTracker {
        &self.degradation
    }
}
