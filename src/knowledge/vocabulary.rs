//! Skill vocabulary: canonical names, surface variants, reverse lookup

use crate::error::{Result, ResumeInsightsError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Serde-facing vocabulary table: canonical skill name to surface variants.
/// Loadable from TOML; `Default` carries the built-in dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyTable {
    pub skills: BTreeMap<String, Vec<String>>,
}

/// Compiled, immutable vocabulary. Built once at startup; variants are
/// lower-cased and each maps to exactly one canonical skill. When two
/// canonical skills claim the same variant, the last registration wins
/// (registration follows the table's sorted canonical order) - a documented
/// precedence rule, not a defect.
#[derive(Debug)]
pub struct SkillVocabulary {
    patterns: Vec<VariantPattern>,
    reverse: HashMap<String, String>,
}

/// One surface variant with its word-bounded, case-insensitive literal
/// pattern and the canonical skill it resolves to.
#[derive(Debug)]
pub struct VariantPattern {
    pub variant: String,
    pub canonical: String,
    pub regex: Regex,
}

impl SkillVocabulary {
    /// Compile a vocabulary table. A variant that is empty or does not
    /// compile into a literal word-bounded pattern is an authoring bug and
    /// fails here, at load time.
    pub fn compile(table: &VocabularyTable) -> Result<Self> {
        let mut reverse = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (canonical, variants) in &table.skills {
            if canonical.trim().is_empty() {
                return Err(ResumeInsightsError::Vocabulary(
                    "empty canonical skill name".to_string(),
                ));
            }
            for variant in variants {
                let lowered = variant.trim().to_lowercase();
                if lowered.is_empty() {
                    return Err(ResumeInsightsError::Vocabulary(format!(
                        "empty variant for skill '{}'",
                        canonical
                    )));
                }
                if !reverse.contains_key(&lowered) {
                    order.push(lowered.clone());
                }
                reverse.insert(lowered, canonical.clone());
            }
        }

        let mut patterns = Vec::with_capacity(order.len());
        for variant in order {
            let canonical = reverse[&variant].clone();
            let regex = compile_variant_pattern(&variant).map_err(|e| {
                ResumeInsightsError::Vocabulary(format!(
                    "variant '{}' for skill '{}' is not a usable pattern: {}",
                    variant, canonical, e
                ))
            })?;
            patterns.push(VariantPattern {
                variant,
                canonical,
                regex,
            });
        }

        Ok(Self { patterns, reverse })
    }

    /// Resolve a surface variant to its canonical skill name.
    pub fn canonicalize(&self, variant: &str) -> Option<&str> {
        self.reverse
            .get(&variant.trim().to_lowercase())
            .map(|s| s.as_str())
    }

    pub fn variant_patterns(&self) -> &[VariantPattern] {
        &self.patterns
    }

    pub fn variant_count(&self) -> usize {
        self.patterns.len()
    }
}

/// Case-insensitive whole-word pattern for a literal variant. `\b` only
/// works next to word characters, so variants ending in symbols ("c++",
/// "c#") get a boundary on the word-character side only.
fn compile_variant_pattern(variant: &str) -> std::result::Result<Regex, regex::Error> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if variant.chars().next().map_or(false, is_word) {
        r"\b"
    } else {
        ""
    };
    let trail = if variant.chars().last().map_or(false, is_word) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("(?i){}{}{}", lead, regex::escape(variant), trail))
}

impl Default for VocabularyTable {
    fn default() -> Self {
        let entries: &[(&str, &[&str])] = &[
            // Programming languages
            ("python", &["python", "py", "python3", "python 3"]),
            ("javascript", &["javascript", "js", "node.js", "nodejs", "node js"]),
            ("java", &["java", "java 8", "java 11", "java 17"]),
            ("r", &["r programming", "r language", "r studio", "rstudio"]),
            ("sql", &["sql", "mysql", "postgresql", "postgres", "sqlite", "tsql", "t-sql"]),
            ("scala", &["scala", "scala 2", "scala 3"]),
            ("c++", &["c++", "cpp", "c plus plus"]),
            ("c#", &["c#", "csharp", "c sharp"]),
            ("go", &["golang", "go lang"]),
            ("rust", &["rust lang", "rust language"]),
            ("julia", &["julia lang", "julia language"]),
            // Machine learning and AI
            ("machine learning", &["machine learning", "ml", "artificial intelligence", "ai"]),
            ("deep learning", &["deep learning", "dl", "neural networks", "neural nets"]),
            ("natural language processing", &["nlp", "natural language processing", "text mining", "text analytics"]),
            ("computer vision", &["computer vision", "cv", "image processing", "image recognition"]),
            ("reinforcement learning", &["reinforcement learning", "rl", "q-learning"]),
            ("supervised learning", &["supervised learning", "classification", "regression"]),
            ("unsupervised learning", &["unsupervised learning", "clustering", "dimensionality reduction"]),
            ("time series analysis", &["time series", "time series analysis", "forecasting"]),
            ("feature engineering", &["feature engineering", "feature selection", "feature extraction"]),
            ("model deployment", &["model deployment", "model serving", "production ml"]),
            ("mlops", &["mlops", "ml ops", "machine learning operations"]),
            // Frameworks and libraries
            ("tensorflow", &["tensorflow", "tf", "tensor flow"]),
            ("pytorch", &["pytorch", "torch", "py torch"]),
            ("keras", &["keras"]),
            ("scikit-learn", &["scikit-learn", "sklearn", "scikit learn"]),
            ("pandas", &["pandas", "pd"]),
            ("numpy", &["numpy", "np"]),
            ("matplotlib", &["matplotlib", "pyplot"]),
            ("seaborn", &["seaborn", "sns"]),
            ("plotly", &["plotly", "plotly dash"]),
            ("opencv", &["opencv", "cv2", "open cv"]),
            ("spacy", &["spacy", "spa cy"]),
            ("nltk", &["nltk", "natural language toolkit"]),
            ("hugging face", &["hugging face", "transformers", "huggingface"]),
            ("xgboost", &["xgboost", "xg boost", "extreme gradient boosting"]),
            ("lightgbm", &["lightgbm", "light gbm", "lgbm"]),
            ("catboost", &["catboost", "cat boost"]),
            ("apache spark", &["apache spark", "spark", "pyspark", "spark sql"]),
            ("hadoop", &["hadoop", "hdfs", "mapreduce"]),
            ("kafka", &["apache kafka", "kafka"]),
            ("airflow", &["apache airflow", "airflow"]),
            ("dask", &["dask"]),
            ("ray", &["ray distributed"]),
            // Cloud platforms
            ("aws", &["aws", "amazon web services", "amazon aws"]),
            ("azure", &["azure", "microsoft azure"]),
            ("gcp", &["gcp", "google cloud", "google cloud platform"]),
            ("docker", &["docker", "containerization"]),
            ("kubernetes", &["kubernetes", "k8s"]),
            ("terraform", &["terraform"]),
            ("jenkins", &["jenkins", "ci/cd"]),
            // Databases
            ("mongodb", &["mongodb", "mongo db", "mongo"]),
            ("redis", &["redis"]),
            ("elasticsearch", &["elasticsearch", "elastic search"]),
            ("cassandra", &["cassandra", "apache cassandra"]),
            ("neo4j", &["neo4j", "graph database"]),
            ("snowflake", &["snowflake"]),
            ("bigquery", &["bigquery", "big query"]),
            ("redshift", &["redshift", "amazon redshift"]),
            // Visualization tools
            ("tableau", &["tableau", "tableau desktop", "tableau server"]),
            ("power bi", &["power bi", "powerbi", "microsoft power bi"]),
            ("qlik", &["qlik", "qlikview", "qlik sense"]),
            ("looker", &["looker", "google looker"]),
            ("d3.js", &["d3.js", "d3", "data driven documents"]),
            // Statistical tools
            ("spss", &["spss", "ibm spss"]),
            ("sas", &["sas", "sas programming"]),
            ("stata", &["stata"]),
            ("minitab", &["minitab"]),
            // Version control and tooling
            ("git", &["git", "github", "gitlab", "bitbucket"]),
            ("jupyter", &["jupyter", "jupyter notebook", "jupyter lab"]),
            ("anaconda", &["anaconda", "conda"]),
            ("vs code", &["vs code", "visual studio code", "vscode"]),
            ("pycharm", &["pycharm"]),
            ("rstudio", &["rstudio", "r studio"]),
            // Methodologies
            ("agile", &["agile", "scrum", "kanban"]),
            ("devops", &["devops", "dev ops"]),
            ("a/b testing", &["a/b testing", "ab testing", "split testing"]),
            ("statistical analysis", &["statistical analysis", "statistics", "statistical modeling"]),
            ("data mining", &["data mining", "knowledge discovery"]),
            ("etl", &["etl", "extract transform load", "data pipeline"]),
            ("data warehousing", &["data warehousing", "data warehouse"]),
            ("business intelligence", &["business intelligence", "bi"]),
            ("data governance", &["data governance", "data quality"]),
            ("data visualization", &["data visualization", "data viz", "dataviz"]),
            // Certifications
            ("aws certified", &["aws certified", "amazon certified"]),
            ("azure certified", &["azure certified", "microsoft certified"]),
            ("google cloud certified", &["google cloud certified", "gcp certified"]),
            ("tableau certified", &["tableau certified"]),
            ("pmp", &["pmp", "project management professional"]),
            ("six sigma", &["six sigma", "lean six sigma"]),
            // Soft skills in technical context
            ("problem solving", &["problem solving", "analytical thinking"]),
            ("data storytelling", &["data storytelling", "data communication"]),
            ("stakeholder management", &["stakeholder management", "client communication"]),
            ("project management", &["project management", "project coordination"]),
            ("team leadership", &["team leadership", "team management"]),
            ("mentoring", &["mentoring", "coaching", "training"]),
            // Industry specific
            ("fintech", &["fintech", "financial technology"]),
            ("healthcare analytics", &["healthcare analytics", "medical data"]),
            ("retail analytics", &["retail analytics", "e-commerce analytics"]),
            ("marketing analytics", &["marketing analytics", "digital marketing"]),
            ("fraud detection", &["fraud detection", "anomaly detection"]),
            ("recommendation systems", &["recommendation systems", "recommender systems"]),
            ("search algorithms", &["search algorithms", "information retrieval"]),
            ("optimization", &["optimization", "mathematical optimization"]),
            ("simulation", &["simulation", "monte carlo"]),
            ("forecasting", &["forecasting", "demand forecasting", "predictive modeling"]),
        ];

        let skills = entries
            .iter()
            .map(|(canonical, variants)| {
                (
                    canonical.to_string(),
                    variants.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect();

        Self { skills }
    }
}
