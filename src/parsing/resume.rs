//! Resume parsing orchestration

use crate::config::ProcessingConfig;
use crate::error::Result;
use crate::knowledge::{SkillVocabulary, VocabularyTable};
use crate::parsing::fields::FieldExtractor;
use crate::parsing::matcher::{SkillMatch, SkillMatcher};
use serde::{Deserialize, Serialize};

/// Everything extracted from one resume. Owned by the caller for the
/// duration of one analysis; nothing here is persisted by the engine.
/// Scalar fields are empty strings when not found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub degree: String,
    pub graduation_year: String,
    pub skills: Vec<SkillMatch>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub raw_text: String,
}

/// Turns pre-extracted plain text into a `ParsedResume`. Holds the compiled
/// vocabulary matcher and field extractors; stateless across calls.
pub struct ResumeParser {
    matcher: SkillMatcher,
    fields: FieldExtractor,
    processing: ProcessingConfig,
}

impl ResumeParser {
    pub fn new(vocabulary: &VocabularyTable, processing: ProcessingConfig) -> Result<Self> {
        let vocabulary = SkillVocabulary::compile(vocabulary)?;
        Ok(Self {
            matcher: SkillMatcher::new(vocabulary)?,
            fields: FieldExtractor::new(),
            processing,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        self.matcher.vocabulary()
    }

    /// Parse one resume. Single-field extraction failures degrade to empty
    /// values; this only fails on pathological inputs the caller should know
    /// about.
    pub fn parse(&self, raw_text: &str) -> Result<ParsedResume> {
        let text = self.bounded(raw_text);

        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        Ok(ParsedResume {
            name: self.fields.extract_name(text),
            email: self.fields.extract_email(text),
            phone: self.fields.extract_phone(text),
            university: self.fields.extract_university(text),
            degree: self.fields.extract_degree(text),
            graduation_year: self.fields.extract_graduation_year(text),
            skills: self
                .matcher
                .extract_skills(text, self.processing.max_skill_matches),
            education: self
                .fields
                .extract_education_lines(&lines, self.processing.max_education_lines),
            experience: self
                .fields
                .extract_experience_lines(&lines, self.processing.max_experience_lines),
            projects: self
                .fields
                .extract_project_lines(&lines, self.processing.max_project_lines),
            raw_text: text.to_string(),
        })
    }

    /// Bound pathological inputs before the vocabulary scan. Truncation
    /// lands on a char boundary.
    fn bounded<'a>(&self, raw_text: &'a str) -> &'a str {
        let max = self.processing.max_text_chars;
        match raw_text.char_indices().nth(max) {
            Some((byte_index, _)) => {
                log::warn!(
                    "input of {} chars exceeds limit {}, truncating",
                    raw_text.chars().count(),
                    max
                );
                &raw_text[..byte_index]
            }
            None => raw_text,
        }
    }
}
