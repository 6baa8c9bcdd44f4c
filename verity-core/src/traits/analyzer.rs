use crate::errors::VerityResult;
use crate::models::AnalysisVerdict;

/// Credibility analysis of a single article.
///
/// The heuristic classifier implements this; so can any external analyzer
/// (for example one backed by a hosted language model) that a request
/// handler wants to swap in.
pub trait IAnalyzer: Send + Sync {
    /// Analyze article text and return a fully populated verdict.
    fn analyze(&self, article_text: &str) -> VerityResult<AnalysisVerdict>;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}
