//! Market readiness scoring against a target role

use crate::analysis::recommendations::{build_recommendations, Recommendation};
use crate::analysis::similarity::skills_similar;
use crate::knowledge::{KnowledgeBase, ResourceCatalog, RoleCatalog, RoleRequirements};
use crate::parsing::{ParsedResume, SectionType, SkillMatch};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Weighted contribution of each component to the overall score. Must sum
/// to 1.00.
const ESSENTIAL_WEIGHT: f32 = 0.35;
const IMPORTANT_WEIGHT: f32 = 0.25;
const VALUABLE_WEIGHT: f32 = 0.15;
const EXPERIENCE_WEIGHT: f32 = 0.15;
const SKILL_QUALITY_WEIGHT: f32 = 0.05;
const EDUCATION_WEIGHT: f32 = 0.03;
const PROJECT_WEIGHT: f32 = 0.02;

const RELEVANT_FIELDS: &[&str] = &[
    "data science",
    "computer science",
    "mathematics",
    "statistics",
    "artificial intelligence",
    "machine learning",
    "physics",
    "engineering",
    "computational",
    "quantitative",
    "analytics",
];

const TOP_UNIVERSITIES: &[&str] = &[
    "cambridge",
    "oxford",
    "imperial",
    "ucl",
    "edinburgh",
    "manchester",
    "warwick",
    "bristol",
    "glasgow",
    "birmingham",
    "leeds",
    "sheffield",
];

const PROJECT_TECH_KEYWORDS: &[&str] = &[
    "machine learning",
    "deep learning",
    "neural network",
    "ai",
    "prediction",
    "classification",
    "regression",
    "clustering",
    "nlp",
    "computer vision",
    "data pipeline",
    "etl",
    "dashboard",
    "visualization",
    "analysis",
];

const PROJECT_DEPLOYMENT_KEYWORDS: &[&str] =
    &["deployed", "production", "api", "web app", "dashboard", "system", "platform"];

const ELITE_EMPLOYERS: &[&str] =
    &["google", "microsoft", "amazon", "meta", "apple", "netflix", "deepmind"];

/// Per-tier requirement coverage, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketReadiness {
    pub essential: u8,
    pub important: u8,
    pub valuable: u8,
}

/// Full scoring output for one (resume, target role) pair. Purely derived;
/// identical inputs produce an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub skills_found: Vec<SkillMatch>,
    pub market_readiness: MarketReadiness,
}

/// Scores a parsed resume against role requirements. Holds cloned catalogs so
/// a knowledge base reload never invalidates an analyzer mid-use.
pub struct MarketAnalyzer {
    roles: RoleCatalog,
    resources: ResourceCatalog,
    years_pattern: Regex,
}

impl MarketAnalyzer {
    pub fn new(knowledge: &KnowledgeBase) -> Self {
        Self {
            roles: knowledge.roles.clone(),
            resources: knowledge.resources.clone(),
            years_pattern: Regex::new(r"(\d+)\s*years?").expect("Invalid years regex"),
        }
    }

    pub fn analyze(&self, resume: &ParsedResume, target_role: &str) -> AnalysisResult {
        let requirements = self.roles.requirements_for(target_role);
        let user_skills: Vec<String> =
            resume.skills.iter().map(|m| m.skill.to_lowercase()).collect();

        let essential = tier_coverage(&user_skills, &requirements.essential);
        let important = tier_coverage(&user_skills, &requirements.important);
        let valuable = tier_coverage(&user_skills, &requirements.valuable);

        let experience = self.experience_score(&resume.experience, target_role);
        let education = education_score(&resume.education, &resume.degree);
        let project = project_score(&resume.projects);
        let skill_quality = skill_quality_score(&resume.skills);

        debug_assert!(
            (ESSENTIAL_WEIGHT
                + IMPORTANT_WEIGHT
                + VALUABLE_WEIGHT
                + EXPERIENCE_WEIGHT
                + SKILL_QUALITY_WEIGHT
                + EDUCATION_WEIGHT
                + PROJECT_WEIGHT
                - 1.0)
                .abs()
                < 1e-6
        );
        let overall = (f32::from(essential) * ESSENTIAL_WEIGHT
            + f32::from(important) * IMPORTANT_WEIGHT
            + f32::from(valuable) * VALUABLE_WEIGHT
            + experience * EXPERIENCE_WEIGHT
            + skill_quality * SKILL_QUALITY_WEIGHT
            + education * EDUCATION_WEIGHT
            + project * PROJECT_WEIGHT)
            .round()
            .clamp(0.0, 100.0) as u8;

        let strengths = identify_strengths(resume, requirements);
        let gaps = identify_gaps(&user_skills, requirements);
        let recommendations = build_recommendations(&gaps, target_role, &self.resources);

        AnalysisResult {
            overall_score: overall,
            strengths,
            gaps,
            recommendations,
            skills_found: resume.skills.clone(),
            market_readiness: MarketReadiness {
                essential,
                important,
                valuable,
            },
        }
    }

    /// Experience heuristic: role keyword hit-rate at 40% weight, then
    /// additive bonuses for seniority phrasing (these stack), years of
    /// experience (8 points per year, capped at 40), quantified impact, and
    /// leadership verbs.
    fn experience_score(&self, experience: &[String], target_role: &str) -> f32 {
        let text = experience.join(" ").to_lowercase();
        let mut score = 0.0;

        let keywords = self.roles.keywords_for(target_role);
        if !keywords.is_empty() {
            let hits = keywords.iter().filter(|k| text.contains(k.as_str())).count();
            score += hits as f32 / keywords.len() as f32 * 40.0;
        }

        if text.contains("senior") || text.contains("lead") {
            score += 25.0;
        }
        if text.contains("principal") || text.contains("manager") {
            score += 35.0;
        }
        if text.contains("director") || text.contains("head of") {
            score += 40.0;
        }

        let years = self
            .years_pattern
            .captures_iter(&text)
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .max();
        if let Some(years) = years {
            score += (years as f32 * 8.0).min(40.0);
        }

        if text.contains('%') || text.contains("million") || text.contains("thousand") {
            score += 15.0;
        }
        if text.contains("led") || text.contains("managed") || text.contains("mentored") {
            score += 10.0;
        }

        score.min(100.0)
    }
}

/// Percentage of a requirement tier the user's skills cover, via exact or
/// similar-name matching. An empty tier counts as zero coverage.
fn tier_coverage(user_skills: &[String], tier: &[String]) -> u8 {
    if tier.is_empty() {
        return 0;
    }
    let matched = tier
        .iter()
        .filter(|req| covers_requirement(user_skills, req))
        .count();
    (matched as f32 / tier.len() as f32 * 100.0).round() as u8
}

fn covers_requirement(user_skills: &[String], requirement: &str) -> bool {
    let requirement = requirement.to_lowercase();
    user_skills
        .iter()
        .any(|skill| *skill == requirement || skills_similar(skill, &requirement))
}

/// Education heuristic: highest degree tier only, relevant-field coverage at
/// 30% weight, elite-university bonus.
fn education_score(education: &[String], degree: &str) -> f32 {
    let text = format!("{} {}", education.join(" "), degree).to_lowercase();
    let mut score = 0.0;

    if text.contains("phd") || text.contains("doctorate") {
        score += 40.0;
    } else if text.contains("msc") || text.contains("master") {
        score += 30.0;
    } else if text.contains("bsc") || text.contains("bachelor") {
        score += 20.0;
    }

    let field_hits = RELEVANT_FIELDS.iter().filter(|f| text.contains(**f)).count();
    score += field_hits as f32 / RELEVANT_FIELDS.len() as f32 * 30.0;

    if TOP_UNIVERSITIES.iter().any(|uni| text.contains(uni)) {
        score += 20.0;
    }

    score.min(100.0)
}

/// Project heuristic: 15 points per project, keyword coverage for technical
/// depth and deployment evidence, impact and collaboration bonuses.
fn project_score(projects: &[String]) -> f32 {
    let text = projects.join(" ").to_lowercase();
    let mut score = projects.len() as f32 * 15.0;

    let tech_hits = PROJECT_TECH_KEYWORDS.iter().filter(|k| text.contains(**k)).count();
    score += tech_hits as f32 / PROJECT_TECH_KEYWORDS.len() as f32 * 30.0;

    let deploy_hits = PROJECT_DEPLOYMENT_KEYWORDS
        .iter()
        .filter(|k| text.contains(**k))
        .count();
    score += deploy_hits as f32 / PROJECT_DEPLOYMENT_KEYWORDS.len() as f32 * 25.0;

    if text.contains('%')
        || text.contains("improved")
        || text.contains("increased")
        || text.contains("reduced")
        || text.contains("optimized")
    {
        score += 20.0;
    }
    if text.contains("team") || text.contains("collaborated") || text.contains("led") {
        score += 10.0;
    }

    score.min(100.0)
}

/// Skill quality: 60% weight on the fraction of matches found in technical
/// sections, 40% on mean confidence. Zero with no matches at all.
fn skill_quality_score(skills: &[SkillMatch]) -> f32 {
    if skills.is_empty() {
        return 0.0;
    }

    let technical = skills
        .iter()
        .filter(|m| {
            matches!(
                m.section,
                SectionType::Skills | SectionType::Experience | SectionType::Projects
            )
        })
        .count();
    let section_score = technical as f32 / skills.len() as f32 * 100.0;

    let avg_confidence =
        skills.iter().map(|m| m.confidence).sum::<f32>() / skills.len() as f32;
    let confidence_score = avg_confidence * 100.0;

    (section_score * 0.6 + confidence_score * 0.4).round()
}

/// Up to five strengths in a fixed generation order; the list is truncated,
/// never reordered.
fn identify_strengths(resume: &ParsedResume, requirements: &RoleRequirements) -> Vec<String> {
    let mut strengths = Vec::new();

    let strong: Vec<&SkillMatch> = resume
        .skills
        .iter()
        .filter(|m| m.confidence > 0.7)
        .filter(|m| requirements.essential.iter().any(|req| skills_similar(&m.skill, req)))
        .take(3)
        .collect();
    if !strong.is_empty() {
        let names: Vec<&str> = strong.iter().map(|m| m.surface.as_str()).collect();
        strengths.push(format!(
            "Strong foundation in essential skills: {}",
            names.join(", ")
        ));
    }

    let degree = resume.degree.to_lowercase();
    if degree.contains("phd") {
        strengths.push("Advanced doctoral-level expertise in relevant field".to_string());
    } else if degree.contains("msc") || degree.contains("master") {
        strengths.push("Advanced academic qualifications with specialized knowledge".to_string());
    }

    let experience_text = resume.experience.join(" ").to_lowercase();
    if experience_text.contains("senior")
        || experience_text.contains("lead")
        || experience_text.contains("principal")
    {
        strengths.push("Demonstrated leadership and senior-level experience".to_string());
    }
    if experience_text.contains("managed")
        || experience_text.contains("led team")
        || experience_text.contains("mentored")
    {
        strengths.push("Proven team leadership and mentoring capabilities".to_string());
    }

    if resume.projects.len() >= 3 {
        strengths.push(format!(
            "Extensive practical experience with {} documented projects",
            resume.projects.len()
        ));
    }

    if ELITE_EMPLOYERS.iter().any(|c| experience_text.contains(c)) {
        strengths.push("Experience at leading technology companies".to_string());
    }

    if experience_text.contains("published")
        || experience_text.contains("research")
        || experience_text.contains("paper")
    {
        strengths
            .push("Research experience with publications and academic contributions".to_string());
    }

    if experience_text.contains("certified") || experience_text.contains("certification") {
        strengths.push("Professional certifications demonstrating validated expertise".to_string());
    }

    strengths.truncate(5);
    strengths
}

/// Missing essential skills first (up to 3), then missing important skills
/// (up to 3), six total.
fn identify_gaps(user_skills: &[String], requirements: &RoleRequirements) -> Vec<String> {
    let mut gaps: Vec<String> = requirements
        .essential
        .iter()
        .filter(|req| !covers_requirement(user_skills, req))
        .take(3)
        .cloned()
        .collect();
    gaps.extend(
        requirements
            .important
            .iter()
            .filter(|req| !covers_requirement(user_skills, req))
            .take(3)
            .cloned(),
    );
    gaps.truncate(6);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> MarketAnalyzer {
        MarketAnalyzer::new(&KnowledgeBase::default())
    }

    fn skill_match(skill: &str, section: SectionType, confidence: f32) -> SkillMatch {
        SkillMatch {
            surface: skill.to_string(),
            skill: skill.to_string(),
            context: String::new(),
            section,
            confidence,
        }
    }

    fn empty_resume() -> ParsedResume {
        ParsedResume {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            university: String::new(),
            degree: String::new(),
            graduation_year: String::new(),
            skills: Vec::new(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_tier_coverage_with_similar_skills() {
        let user = vec!["python".to_string(), "ml".to_string(), "sql".to_string()];
        let tier = vec![
            "Python".to_string(),
            "Machine Learning".to_string(),
            "Statistics".to_string(),
            "SQL".to_string(),
            "Data Analysis".to_string(),
        ];
        // ml matches Machine Learning via the synonym table
        assert_eq!(tier_coverage(&user, &tier), 60);
    }

    #[test]
    fn test_tier_coverage_empty_tier_is_zero() {
        assert_eq!(tier_coverage(&["python".to_string()], &[]), 0);
    }

    #[test]
    fn test_experience_score_stacks_bonuses() {
        let analyzer = analyzer();
        let experience = vec![
            "Senior Data Scientist with 5 years of experience".to_string(),
            "Led analytics team, improved revenue by 20%".to_string(),
        ];
        // keywords: data scientist + analytics = 2/5 * 40 = 16
        // senior/lead 25, 5 years -> 40, impact 15, led 10 = 106 -> 100
        let score = analyzer.experience_score(&experience, "Data Scientist");
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_experience_score_empty_is_zero() {
        assert_eq!(analyzer().experience_score(&[], "Data Scientist"), 0.0);
    }

    #[test]
    fn test_years_bonus_caps_at_forty() {
        let analyzer = analyzer();
        let score = analyzer.experience_score(&["20 years of work".to_string()], "Unknown Role");
        // no keyword hits (fallback list unmatched), years capped at 40
        assert_eq!(score, 40.0);
    }

    #[test]
    fn test_education_score_first_degree_tier_only() {
        // phd branch taken, msc ignored
        let with_both = education_score(&["PhD and MSc in Computer Science".to_string()], "");
        let phd_only = education_score(&["PhD in Computer Science".to_string()], "");
        assert_eq!(with_both, phd_only);
    }

    #[test]
    fn test_education_score_university_bonus() {
        let base = education_score(&["BSc Mathematics".to_string()], "");
        let elite = education_score(&["BSc Mathematics, Cambridge".to_string()], "");
        assert!((elite - base - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_project_score_base_per_project() {
        let projects = vec!["one generic undertaking".to_string(); 2];
        assert_eq!(project_score(&projects), 30.0);
        assert_eq!(project_score(&[]), 0.0);
    }

    #[test]
    fn test_skill_quality_empty_is_zero() {
        assert_eq!(skill_quality_score(&[]), 0.0);
    }

    #[test]
    fn test_skill_quality_blends_section_and_confidence() {
        let skills = vec![
            skill_match("python", SectionType::Skills, 0.8),
            skill_match("sql", SectionType::Other, 0.6),
        ];
        // section: 1/2 * 100 = 50, confidence: 0.7 * 100 = 70
        // 50 * 0.6 + 70 * 0.4 = 58
        assert_eq!(skill_quality_score(&skills), 58.0);
    }

    #[test]
    fn test_analyze_empty_resume_is_defined() {
        let result = analyzer().analyze(&empty_resume(), "Data Scientist");
        assert_eq!(
            result.market_readiness,
            MarketReadiness {
                essential: 0,
                important: 0,
                valuable: 0
            }
        );
        assert_eq!(result.overall_score, 0);
        assert!(result.skills_found.is_empty());
        assert!(result.strengths.is_empty());
        assert_eq!(result.gaps.len(), 6);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_gaps_prioritize_essential() {
        let result = analyzer().analyze(&empty_resume(), "Data Scientist");
        let catalog = RoleCatalog::default();
        let essential = &catalog.requirements_for("Data Scientist").essential;
        for gap in &result.gaps[..3] {
            assert!(essential.contains(gap), "{} should be essential", gap);
        }
    }

    #[test]
    fn test_strengths_fixed_order_and_cap() {
        let mut resume = empty_resume();
        resume.skills = vec![
            skill_match("python", SectionType::Skills, 0.8),
            skill_match("sql", SectionType::Skills, 0.85),
        ];
        resume.degree = "PhD Machine Learning".to_string();
        resume.experience = vec![
            "Senior researcher at Google, managed and mentored a team".to_string(),
            "Published research papers, certified in cloud platforms".to_string(),
        ];
        resume.projects = vec!["a".repeat(12), "b".repeat(12), "c".repeat(12)];

        let strengths = identify_strengths(
            &resume,
            RoleCatalog::default().requirements_for("Data Scientist"),
        );
        assert_eq!(strengths.len(), 5);
        assert!(strengths[0].starts_with("Strong foundation in essential skills"));
        assert_eq!(strengths[1], "Advanced doctoral-level expertise in relevant field");
    }

    #[test]
    fn test_unknown_role_uses_default_requirements() {
        let analyzer = analyzer();
        let resume = empty_resume();
        let fallback = analyzer.analyze(&resume, "Quantum Gardener");
        let default = analyzer.analyze(&resume, "Data Scientist");
        assert_eq!(fallback.gaps, default.gaps);
    }

    #[test]
    fn test_overall_score_bounds() {
        let mut resume = empty_resume();
        resume.skills = vec![
            skill_match("python", SectionType::Skills, 1.0),
            skill_match("machine learning", SectionType::Skills, 1.0),
            skill_match("statistics", SectionType::Skills, 1.0),
            skill_match("sql", SectionType::Skills, 1.0),
            skill_match("data analysis", SectionType::Skills, 1.0),
        ];
        resume.degree = "PhD Data Science".to_string();
        resume.experience = vec![
            "Senior principal director, 10 years, led team, improved by 50%".to_string()
        ];
        resume.projects = vec!["deployed production machine learning dashboard".repeat(2); 7];

        let result = analyzer().analyze(&resume, "Data Scientist");
        assert!(result.overall_score <= 100);
        assert_eq!(result.market_readiness.essential, 100);
    }
}
