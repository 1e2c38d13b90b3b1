//! Skill mention detection and confidence scoring

use crate::error::{Result, ResumeInsightsError};
use crate::knowledge::SkillVocabulary;
use crate::parsing::sections::{SectionSegmenter, SectionType};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Matches below this never enter the candidate pool.
const RECORD_THRESHOLD: f32 = 0.3;
/// Candidates at or below this are dropped in the final pass. The two
/// thresholds are distinct on purpose: the wide intermediate net decides
/// which (skill, line) pairs exist for deduplication before quality is
/// enforced globally.
const ACCEPT_THRESHOLD: f32 = 0.5;

/// One detected skill mention. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Surface text as it appeared in the resume.
    pub surface: String,
    /// Canonical skill name from the vocabulary.
    pub skill: String,
    /// Trimmed line containing the mention.
    pub context: String,
    pub section: SectionType,
    pub confidence: f32,
}

/// Scans text for vocabulary variants. The aho-corasick pass finds which
/// variants occur at all; only those get a word-bounded regex pass, keeping
/// the vocabulary-times-text scan tractable for large inputs.
pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
    prefilter: AhoCorasick,
    segmenter: SectionSegmenter,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self> {
        let variants: Vec<&str> = vocabulary
            .variant_patterns()
            .iter()
            .map(|p| p.variant.as_str())
            .collect();
        let prefilter = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&variants)
            .map_err(|e| {
                ResumeInsightsError::Vocabulary(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            vocabulary,
            prefilter,
            segmenter: SectionSegmenter::new(),
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extract skill mentions: whole-word, case-insensitive variant search,
    /// section-aware confidence scoring, per-(skill, line) deduplication,
    /// then the final quality cut, ranking, and cap.
    pub fn extract_skills(&self, text: &str, max_matches: usize) -> Vec<SkillMatch> {
        let lines: Vec<&str> = text.split('\n').collect();
        let sections = self.segmenter.segment(&lines);

        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            line_starts.push(offset);
            offset += line.len() + 1;
        }

        let present: HashSet<usize> = self
            .prefilter
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect();

        let mut matches: Vec<SkillMatch> = Vec::new();
        let mut seen: HashSet<(String, usize)> = HashSet::new();

        for (pattern_id, pattern) in self.vocabulary.variant_patterns().iter().enumerate() {
            if !present.contains(&pattern_id) {
                continue;
            }
            for found in pattern.regex.find_iter(text) {
                let line_index = line_starts.partition_point(|&start| start <= found.start()) - 1;
                let context = lines[line_index].trim();
                let section = sections.section_for_line(line_index);
                let confidence = score_confidence(&pattern.variant, context, section);

                let key = (pattern.canonical.clone(), line_index);
                if confidence > RECORD_THRESHOLD && !seen.contains(&key) {
                    seen.insert(key);
                    matches.push(SkillMatch {
                        surface: found.as_str().to_string(),
                        skill: pattern.canonical.clone(),
                        context: context.to_string(),
                        section,
                        confidence,
                    });
                }
            }
        }

        matches.retain(|m| m.confidence > ACCEPT_THRESHOLD);
        // Ties break on canonical name so output is deterministic for
        // identical input.
        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.skill.cmp(&b.skill))
        });
        matches.truncate(max_matches);
        matches
    }
}

/// Additive confidence score, clamped to [0, 1]. `variant` must be
/// lower-cased.
fn score_confidence(variant: &str, context: &str, section: SectionType) -> f32 {
    let mut confidence: f32 = 0.5;

    confidence += match section {
        SectionType::Skills => 0.3,
        SectionType::Experience | SectionType::Projects => 0.2,
        SectionType::Certifications => 0.25,
        _ => 0.0,
    };

    let context_lower = context.to_lowercase();

    if context_lower.contains("proficient") || context_lower.contains("expert") {
        confidence += 0.2;
    }
    if context_lower.contains("experience with") || context_lower.contains("using") {
        confidence += 0.15;
    }
    if context_lower.contains("developed") || context_lower.contains("built") {
        confidence += 0.1;
    }
    if context_lower.contains("years") && context_lower.contains(variant) {
        confidence += 0.15;
    }

    // "learning" as part of a skill name ("machine learning") is not an
    // intent signal; only a standalone use of the word is.
    let stripped = context_lower
        .replace("machine learning", "")
        .replace("deep learning", "")
        .replace("reinforcement learning", "")
        .replace("transfer learning", "");
    if stripped.contains("learning") || context_lower.contains("interested in") {
        confidence -= 0.2;
    }
    if context_lower.contains("basic") || context_lower.contains("beginner") {
        confidence -= 0.1;
    }

    // Longer variants are more specific mentions.
    if variant.len() > 8 {
        confidence += 0.05;
    }

    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{SkillVocabulary, VocabularyTable};

    fn matcher() -> SkillMatcher {
        let vocab = SkillVocabulary::compile(&VocabularyTable::default()).unwrap();
        SkillMatcher::new(vocab).unwrap()
    }

    #[test]
    fn test_skills_section_confidence() {
        let text = "SKILLS\nPython, SQL, Machine Learning";
        let matches = matcher().extract_skills(text, 20);

        let python = matches.iter().find(|m| m.skill == "python").unwrap();
        assert_eq!(python.section, SectionType::Skills);
        assert!((python.confidence - 0.8).abs() < 1e-6);

        let ml = matches.iter().find(|m| m.skill == "machine learning").unwrap();
        // Variant longer than 8 chars picks up the specificity bonus.
        assert!((ml.confidence - 0.85).abs() < 1e-6);

        assert!(matches.iter().any(|m| m.skill == "sql"));
    }

    #[test]
    fn test_abbreviation_canonicalizes() {
        let text = "SKILLS\nML and NLP";
        let matches = matcher().extract_skills(text, 20);
        assert!(matches.iter().any(|m| m.skill == "machine learning" && m.surface == "ML"));
        assert!(matches.iter().any(|m| m.skill == "natural language processing"));
    }

    #[test]
    fn test_same_line_dedup() {
        let text = "SKILLS\nPython and Python again";
        let matches = matcher().extract_skills(text, 20);
        assert_eq!(matches.iter().filter(|m| m.skill == "python").count(), 1);
    }

    #[test]
    fn test_distinct_lines_scored_independently() {
        let text = "SKILLS\nPython\nEXPERIENCE\nDeveloped services using Python";
        let matches = matcher().extract_skills(text, 20);

        let python: Vec<_> = matches.iter().filter(|m| m.skill == "python").collect();
        assert_eq!(python.len(), 2);
        let sections: Vec<SectionType> = python.iter().map(|m| m.section).collect();
        assert!(sections.contains(&SectionType::Skills));
        assert!(sections.contains(&SectionType::Experience));
    }

    #[test]
    fn test_negative_cues_suppress_low_intent_mentions() {
        let text = "Learning Python, interested in Machine Learning";
        let matches = matcher().extract_skills(text, 20);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_positive_cues_stack_and_clamp() {
        let text = "EXPERIENCE\n5 years developing models using Python, developed pipelines";
        let matches = matcher().extract_skills(text, 20);
        let python = matches.iter().find(|m| m.skill == "python").unwrap();
        // 0.5 + 0.2 (experience) + 0.15 (using) + 0.1 (developed) + 0.15 (years)
        assert!((python.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_result_is_capped_and_sorted() {
        let mut text = String::from("SKILLS\n");
        for skill in [
            "Python", "SQL", "Java", "Scala", "TensorFlow", "PyTorch", "Keras", "Pandas",
            "NumPy", "Matplotlib", "Seaborn", "Plotly", "OpenCV", "Spacy", "NLTK", "XGBoost",
            "LightGBM", "CatBoost", "Hadoop", "Kafka", "Airflow", "Docker", "Kubernetes",
            "Terraform", "Jenkins",
        ] {
            text.push_str(skill);
            text.push('\n');
        }

        let matches = matcher().extract_skills(&text, 20);
        assert_eq!(matches.len(), 20);
        for pair in matches.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_no_vocabulary_hits() {
        let matches = matcher().extract_skills("Enthusiastic about gardening and chess", 20);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_returned_confidence_above_final_threshold() {
        let text = "SKILLS\nPython\nEXPERIENCE\n5 years of expert Python, proficient with SQL";
        for m in matcher().extract_skills(text, 20) {
            assert!(m.confidence > 0.5 && m.confidence <= 1.0);
        }
    }
}
