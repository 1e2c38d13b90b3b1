//! Per-role skill tier requirements and experience keywords

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Required-skill tiers for one target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub essential: Vec<String>,
    pub important: Vec<String>,
    pub valuable: Vec<String>,
}

/// Static role knowledge: tier requirements plus the keyword list used by
/// the experience sub-score. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    pub default_role: String,
    pub roles: BTreeMap<String, RoleRequirements>,
    pub experience_keywords: BTreeMap<String, Vec<String>>,
}

impl RoleCatalog {
    /// Tier requirements for a role. Unknown roles fall back to the default
    /// role's tiers; that fallback is policy, not an error.
    pub fn requirements_for(&self, role: &str) -> &RoleRequirements {
        self.roles.get(role).unwrap_or_else(|| {
            log::debug!(
                "unknown target role '{}', falling back to '{}'",
                role,
                self.default_role
            );
            &self.roles[&self.default_role]
        })
    }

    /// Experience keywords for a role, with the same default-role fallback.
    pub fn keywords_for(&self, role: &str) -> &[String] {
        self.experience_keywords
            .get(role)
            .or_else(|| self.experience_keywords.get(&self.default_role))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(|s| s.as_str())
    }
}

fn tier(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

impl Default for RoleCatalog {
    fn default() -> Self {
        let mut roles = BTreeMap::new();

        roles.insert(
            "Data Scientist".to_string(),
            RoleRequirements {
                essential: tier(&["Python", "Machine Learning", "Statistics", "SQL", "Data Analysis"]),
                important: tier(&[
                    "TensorFlow",
                    "PyTorch",
                    "Scikit-learn",
                    "R",
                    "Deep Learning",
                    "Natural Language Processing",
                ]),
                valuable: tier(&[
                    "AWS",
                    "Docker",
                    "Git",
                    "Tableau",
                    "Apache Spark",
                    "Computer Vision",
                    "MLOps",
                    "Kubernetes",
                ]),
            },
        );
        roles.insert(
            "Data Analyst".to_string(),
            RoleRequirements {
                essential: tier(&["SQL", "Excel", "Data Analysis", "Statistics", "Data Visualization"]),
                important: tier(&["Python", "Tableau", "Power BI", "R", "Pandas", "Statistical Analysis"]),
                valuable: tier(&[
                    "Machine Learning",
                    "AWS",
                    "Git",
                    "SPSS",
                    "Advanced Excel",
                    "Business Intelligence",
                ]),
            },
        );
        roles.insert(
            "ML Engineer".to_string(),
            RoleRequirements {
                essential: tier(&["Python", "Machine Learning", "TensorFlow", "PyTorch", "Docker"]),
                important: tier(&["Kubernetes", "AWS", "MLOps", "Git", "Deep Learning", "Scikit-learn"]),
                valuable: tier(&[
                    "Apache Spark",
                    "Java",
                    "Scala",
                    "Jenkins",
                    "Computer Vision",
                    "Natural Language Processing",
                ]),
            },
        );
        roles.insert(
            "Data Engineer".to_string(),
            RoleRequirements {
                essential: tier(&["Python", "SQL", "Apache Spark", "AWS", "Docker"]),
                important: tier(&["Kubernetes", "Java", "Scala", "PostgreSQL", "MongoDB", "Git"]),
                valuable: tier(&["Hadoop", "Kafka", "Elasticsearch", "Redis", "Jenkins", "Airflow"]),
            },
        );
        roles.insert(
            "BI Analyst".to_string(),
            RoleRequirements {
                essential: tier(&["SQL", "Excel", "Data Analysis", "Tableau", "Power BI"]),
                important: tier(&["Statistics", "Python", "R", "Statistical Analysis", "Business Intelligence"]),
                valuable: tier(&["Machine Learning", "SPSS", "SAS", "Data Visualization", "Git"]),
            },
        );
        roles.insert(
            "AI Researcher".to_string(),
            RoleRequirements {
                essential: tier(&["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch"]),
                important: tier(&["Natural Language Processing", "Computer Vision", "Statistics", "Research", "Git"]),
                valuable: tier(&[
                    "Reinforcement Learning",
                    "Optimization",
                    "Mathematics",
                    "Publications",
                    "Conferences",
                ]),
            },
        );

        let mut experience_keywords = BTreeMap::new();
        experience_keywords.insert(
            "Data Scientist".to_string(),
            tier(&[
                "data scientist",
                "machine learning",
                "analytics",
                "statistical analysis",
                "predictive modeling",
            ]),
        );
        experience_keywords.insert(
            "Data Analyst".to_string(),
            tier(&["data analyst", "business analyst", "reporting", "dashboard", "data visualization"]),
        );
        experience_keywords.insert(
            "ML Engineer".to_string(),
            tier(&[
                "ml engineer",
                "machine learning engineer",
                "ai engineer",
                "mlops",
                "model deployment",
            ]),
        );
        experience_keywords.insert(
            "Data Engineer".to_string(),
            tier(&["data engineer", "etl", "data pipeline", "big data", "data infrastructure"]),
        );
        experience_keywords.insert(
            "BI Analyst".to_string(),
            tier(&["business analyst", "bi analyst", "business intelligence", "requirements", "stakeholder"]),
        );
        experience_keywords.insert(
            "AI Researcher".to_string(),
            tier(&[
                "ai researcher",
                "research scientist",
                "machine learning researcher",
                "publications",
                "conferences",
            ]),
        );

        Self {
            default_role: "Data Scientist".to_string(),
            roles,
            experience_keywords,
        }
    }
}
