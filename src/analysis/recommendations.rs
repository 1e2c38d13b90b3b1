//! Turns skill gaps into prioritized learning recommendations

use crate::knowledge::ResourceCatalog;
use serde::{Deserialize, Serialize};

/// Low is part of the public value set but current generation only produces
/// High and Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationType {
    Course,
    Certification,
    Practice,
}

/// One actionable learning recommendation for a missing skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub priority: Priority,
    pub impact: String,
    pub resources: Vec<String>,
    #[serde(rename = "type")]
    pub rec_type: RecommendationType,
    pub estimated_time: String,
    pub cost_range: String,
}

/// Build recommendations for the first four gaps. The first two carry High
/// priority. Skills with a curated resource bundle get its top course,
/// certification, and practice entry; anything else gets a synthesized
/// generic bundle.
pub fn build_recommendations(
    gaps: &[String],
    target_role: &str,
    catalog: &ResourceCatalog,
) -> Vec<Recommendation> {
    gaps.iter()
        .take(4)
        .enumerate()
        .map(|(index, skill)| {
            let priority = if index < 2 {
                Priority::High
            } else {
                Priority::Medium
            };
            let impact = catalog
                .impact_for(skill, target_role)
                .map(|s| s.to_string())
                .unwrap_or_else(|| {
                    format!(
                        "Valuable skill for {} career advancement - enhances market competitiveness",
                        target_role
                    )
                });

            match catalog.bundle_for(skill) {
                Some(bundle) => Recommendation {
                    skill: skill.clone(),
                    priority,
                    impact,
                    resources: vec![
                        bundle.courses.first().cloned().unwrap_or_default(),
                        bundle.certifications.first().cloned().unwrap_or_default(),
                        bundle.practice.first().cloned().unwrap_or_default(),
                    ],
                    rec_type: match index % 3 {
                        0 => RecommendationType::Course,
                        1 => RecommendationType::Certification,
                        _ => RecommendationType::Practice,
                    },
                    estimated_time: bundle.estimated_time.clone(),
                    cost_range: bundle.cost_range.clone(),
                },
                None => Recommendation {
                    skill: skill.clone(),
                    priority,
                    impact,
                    resources: vec![
                        format!("Online courses for {}", skill),
                        format!("Professional certification in {}", skill),
                        format!("Hands-on projects using {}", skill),
                    ],
                    rec_type: RecommendationType::Course,
                    estimated_time: "2-4 months".to_string(),
                    cost_range: "\u{a3}50-\u{a3}300".to_string(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaps(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_two_gaps_are_high_priority() {
        let catalog = ResourceCatalog::default();
        let recs = build_recommendations(
            &gaps(&["Machine Learning", "Python", "SQL", "Tableau"]),
            "Data Scientist",
            &catalog,
        );
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::High);
        assert_eq!(recs[2].priority, Priority::Medium);
        assert_eq!(recs[3].priority, Priority::Medium);
    }

    #[test]
    fn test_cap_at_four() {
        let catalog = ResourceCatalog::default();
        let recs = build_recommendations(
            &gaps(&["Python", "SQL", "AWS", "Docker", "Tableau", "R"]),
            "Data Scientist",
            &catalog,
        );
        assert_eq!(recs.len(), 4);
    }

    #[test]
    fn test_curated_bundle_used_when_present() {
        let catalog = ResourceCatalog::default();
        let recs = build_recommendations(&gaps(&["Machine Learning"]), "Data Scientist", &catalog);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].resources.len(), 3);
        assert!(recs[0].impact.contains("95%"));
        assert_eq!(recs[0].rec_type, RecommendationType::Course);
        assert_ne!(recs[0].estimated_time, "2-4 months");
    }

    #[test]
    fn test_generic_bundle_for_unknown_skill() {
        let catalog = ResourceCatalog::default();
        let recs = build_recommendations(&gaps(&["Elixir"]), "Data Scientist", &catalog);
        assert_eq!(recs[0].resources[0], "Online courses for Elixir");
        assert_eq!(recs[0].estimated_time, "2-4 months");
        assert!(recs[0].impact.contains("Data Scientist"));
        assert_eq!(recs[0].rec_type, RecommendationType::Course);
    }

    #[test]
    fn test_type_cycles_by_index() {
        let catalog = ResourceCatalog::default();
        let recs = build_recommendations(
            &gaps(&["Machine Learning", "Python", "SQL", "Tableau"]),
            "ML Engineer",
            &catalog,
        );
        assert_eq!(recs[0].rec_type, RecommendationType::Course);
        assert_eq!(recs[1].rec_type, RecommendationType::Certification);
        assert_eq!(recs[2].rec_type, RecommendationType::Practice);
        assert_eq!(recs[3].rec_type, RecommendationType::Course);
    }
}
