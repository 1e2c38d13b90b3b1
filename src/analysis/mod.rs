//! Market readiness scoring, gap analysis, and learning recommendations.

pub mod analyzer;
pub mod recommendations;
pub mod similarity;

pub use analyzer::{AnalysisResult, MarketAnalyzer, MarketReadiness};
pub use recommendations::{Priority, Recommendation, RecommendationType};
pub use similarity::skills_similar;
