//! Resume insights library
//!
//! Extracts skill mentions from pre-extracted resume text, attributes them
//! to document sections with confidence scores, and combines them with
//! heuristic experience/education/project sub-scores into a market
//! readiness report for a target role.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod parsing;

pub use analysis::analyzer::{AnalysisResult, MarketAnalyzer, MarketReadiness};
pub use analysis::recommendations::{Priority, Recommendation, RecommendationType};
pub use config::Config;
pub use engine::{InsightEngine, ResumeReport};
pub use error::{Result, ResumeInsightsError};
pub use knowledge::KnowledgeBase;
pub use parsing::matcher::SkillMatch;
pub use parsing::resume::{ParsedResume, ResumeParser};
pub use parsing::sections::SectionType;
