//! End-to-end tests for the resume insights engine

use resume_insights::{InsightEngine, SectionType};

const SENIOR_RESUME: &str = "SKILLS\nPython, SQL, Machine Learning\nEXPERIENCE\n5 years as a Senior Data Scientist, developed ML models using Python";

fn engine() -> InsightEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    InsightEngine::with_defaults().unwrap()
}

#[test]
fn test_full_analysis_of_senior_resume() {
    let report = engine().analyze(SENIOR_RESUME, "Data Scientist").unwrap();
    let skills = &report.analysis.skills_found;

    for expected in ["python", "sql", "machine learning"] {
        assert!(
            skills.iter().any(|m| m.skill == expected),
            "{} missing from skills",
            expected
        );
    }

    // Mentions inside the skills section carry the section bonus.
    let python_in_skills = skills
        .iter()
        .find(|m| m.skill == "python" && m.section == SectionType::Skills)
        .unwrap();
    assert!(python_in_skills.confidence >= 0.8);

    // 3 of 5 essential skills present (Statistics and Data Analysis absent).
    assert_eq!(report.analysis.market_readiness.essential, 60);
    assert!(report.analysis.overall_score > 0);
}

#[test]
fn test_unrecognized_text_degrades_gracefully() {
    let report = engine()
        .analyze(
            "Enthusiastic choir member, fond of hiking and sourdough baking",
            "Data Scientist",
        )
        .unwrap();

    assert!(report.analysis.skills_found.is_empty());
    assert_eq!(report.analysis.market_readiness.essential, 0);
    assert_eq!(report.analysis.market_readiness.important, 0);
    assert_eq!(report.analysis.market_readiness.valuable, 0);
    assert!(report.analysis.overall_score <= 100);
}

#[test]
fn test_unknown_role_falls_back_to_default() {
    let engine = engine();
    let fallback = engine.analyze(SENIOR_RESUME, "Nonexistent Role").unwrap();
    let default = engine.analyze(SENIOR_RESUME, "Data Scientist").unwrap();

    assert_eq!(fallback.analysis.gaps, default.analysis.gaps);
    assert_eq!(
        fallback.analysis.market_readiness,
        default.analysis.market_readiness
    );
}

#[test]
fn test_abbreviation_counts_toward_tier() {
    let report = engine()
        .analyze("SKILLS\nML and Python and SQL", "Data Scientist")
        .unwrap();

    assert!(report
        .analysis
        .skills_found
        .iter()
        .any(|m| m.skill == "machine learning"));
    // Python, Machine Learning, SQL cover 3 of 5 essentials.
    assert_eq!(report.analysis.market_readiness.essential, 60);
}

#[test]
fn test_low_intent_mentions_are_suppressed() {
    let report = engine()
        .analyze(
            "Learning Python, interested in Machine Learning",
            "Data Scientist",
        )
        .unwrap();
    assert!(report.analysis.skills_found.is_empty());
}

#[test]
fn test_analysis_is_idempotent() {
    let engine = engine();
    let first = engine.analyze(SENIOR_RESUME, "Data Scientist").unwrap();
    let second = engine.analyze(SENIOR_RESUME, "Data Scientist").unwrap();

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_caps_hold() {
    let mut text = String::from("SKILLS\n");
    for skill in [
        "Python", "SQL", "Java", "Scala", "TensorFlow", "PyTorch", "Keras", "Pandas", "NumPy",
        "Matplotlib", "Seaborn", "Plotly", "OpenCV", "Spacy", "NLTK", "XGBoost", "LightGBM",
        "CatBoost", "Hadoop", "Kafka", "Airflow", "Docker", "Kubernetes", "Terraform", "Jenkins",
    ] {
        text.push_str(skill);
        text.push('\n');
    }
    text.push_str("EXPERIENCE\nSenior lead, managed and mentored a team of 8\nPROJECTS\nBuilt a deployed production dashboard\n");

    let report = engine().analyze(&text, "Data Scientist").unwrap();
    assert!(report.analysis.skills_found.len() <= 20);
    assert!(report.analysis.gaps.len() <= 6);
    assert!(report.analysis.recommendations.len() <= 4);
    assert!(report.analysis.strengths.len() <= 5);

    for m in &report.analysis.skills_found {
        assert!(m.confidence > 0.5 && m.confidence <= 1.0);
    }
}

#[test]
fn test_empty_input_does_not_fail() {
    let report = engine().analyze("", "Data Scientist").unwrap();
    assert!(report.analysis.skills_found.is_empty());
    assert!(report.analysis.overall_score <= 100);
    assert_eq!(report.analysis.recommendations.len(), 4);
}

#[test]
fn test_gap_recommendations_reference_missing_skills() {
    let report = engine()
        .analyze("SKILLS\nPython, SQL", "Data Scientist")
        .unwrap();

    for rec in &report.analysis.recommendations {
        assert!(report.analysis.gaps.contains(&rec.skill));
        assert_eq!(rec.resources.len(), 3);
        assert!(!rec.impact.is_empty());
    }
}
