//! Top-level engine facade wiring parsing and analysis together

use crate::analysis::{AnalysisResult, MarketAnalyzer};
use crate::config::Config;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::parsing::{ParsedResume, ResumeParser};
use serde::{Deserialize, Serialize};

/// Complete output for one analysis request: the parsed intermediate plus
/// the scoring result, both serializable for downstream rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub resume: ParsedResume,
    pub analysis: AnalysisResult,
}

/// Entry point for resume analysis. Construction validates the knowledge
/// base and compiles the vocabulary once; after that every call is pure and
/// the engine can be shared freely across threads.
pub struct InsightEngine {
    parser: ResumeParser,
    analyzer: MarketAnalyzer,
}

impl InsightEngine {
    pub fn new(config: Config, knowledge: KnowledgeBase) -> Result<Self> {
        knowledge.validate()?;
        let parser = ResumeParser::new(&knowledge.vocabulary, config.processing)?;
        let analyzer = MarketAnalyzer::new(&knowledge);

        log::info!(
            "Engine ready: {} skill variants, {} roles",
            parser.vocabulary().variant_count(),
            knowledge.roles.roles.len()
        );

        Ok(Self { parser, analyzer })
    }

    /// Engine over the built-in vocabulary, role, and resource tables.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default(), KnowledgeBase::default())
    }

    /// Parse resume text without scoring it.
    pub fn parse(&self, text: &str) -> Result<ParsedResume> {
        self.parser.parse(text)
    }

    /// Parse and score resume text against a target role. Unknown roles fall
    /// back to the knowledge base's default role.
    pub fn analyze(&self, text: &str, target_role: &str) -> Result<ResumeReport> {
        let resume = self.parser.parse(text)?;
        let analysis = self.analyzer.analyze(&resume, target_role);

        log::debug!(
            "Analyzed {} chars for '{}': score {}, {} skills",
            text.len(),
            target_role,
            analysis.overall_score,
            analysis.skills_found.len()
        );

        Ok(ResumeReport { resume, analysis })
    }
}
