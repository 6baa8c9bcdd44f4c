mod analysis_report;
mod pattern_category;
mod verdict;

pub use analysis_report::{AnalysisReport, SignalBreakdown};
pub use pattern_category::PatternCategory;
pub use verdict::{AnalysisVerdict, VerdictLabel};
