mod analyzer;

pub use analyzer::IAnalyzer;
