//! Learning resource bundles and per-(skill, role) impact statements

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Curated learning resources for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub courses: Vec<String>,
    pub certifications: Vec<String>,
    pub practice: Vec<String>,
    pub estimated_time: String,
    pub cost_range: String,
}

/// Static resource knowledge consumed when generating recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: BTreeMap<String, ResourceBundle>,
    /// skill -> role -> impact sentence
    pub impacts: BTreeMap<String, BTreeMap<String, String>>,
}

impl ResourceCatalog {
    pub fn bundle_for(&self, skill: &str) -> Option<&ResourceBundle> {
        self.resources.get(skill)
    }

    pub fn impact_for(&self, skill: &str, role: &str) -> Option<&str> {
        self.impacts
            .get(skill)
            .and_then(|by_role| by_role.get(role))
            .map(|s| s.as_str())
    }
}

fn bundle(
    courses: &[&str],
    certifications: &[&str],
    practice: &[&str],
    estimated_time: &str,
    cost_range: &str,
) -> ResourceBundle {
    ResourceBundle {
        courses: courses.iter().map(|s| s.to_string()).collect(),
        certifications: certifications.iter().map(|s| s.to_string()).collect(),
        practice: practice.iter().map(|s| s.to_string()).collect(),
        estimated_time: estimated_time.to_string(),
        cost_range: cost_range.to_string(),
    }
}

fn impacts(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(role, text)| (role.to_string(), text.to_string()))
        .collect()
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        let mut resources = BTreeMap::new();

        resources.insert(
            "Machine Learning".to_string(),
            bundle(
                &[
                    "Machine Learning Specialization (Coursera - Andrew Ng)",
                    "Fast.ai Practical Machine Learning",
                    "edX MIT Introduction to Machine Learning",
                ],
                &[
                    "Google Cloud ML Engineer",
                    "AWS Certified Machine Learning",
                    "Microsoft Azure AI Engineer",
                ],
                &["Kaggle Competitions", "Google Colab Projects", "GitHub ML Portfolio"],
                "3-6 months",
                "\u{a3}50-\u{a3}300",
            ),
        );
        resources.insert(
            "Python".to_string(),
            bundle(
                &[
                    "Python for Data Science (DataCamp)",
                    "Complete Python Bootcamp (Udemy)",
                    "Python Programming (Coursera)",
                ],
                &[
                    "Python Institute PCAP",
                    "Microsoft Python Certification",
                    "Google IT Automation with Python",
                ],
                &["LeetCode Python Problems", "HackerRank Python Track", "Real Python Tutorials"],
                "2-4 months",
                "\u{a3}30-\u{a3}200",
            ),
        );
        resources.insert(
            "AWS".to_string(),
            bundle(
                &[
                    "AWS Cloud Practitioner Essentials",
                    "AWS Solutions Architect Course",
                    "A Cloud Guru AWS Training",
                ],
                &[
                    "AWS Cloud Practitioner",
                    "AWS Solutions Architect Associate",
                    "AWS Data Analytics Specialty",
                ],
                &["AWS Free Tier Projects", "AWS Hands-on Labs", "Cloud Resume Challenge"],
                "2-3 months",
                "\u{a3}100-\u{a3}400",
            ),
        );
        resources.insert(
            "TensorFlow".to_string(),
            bundle(
                &[
                    "TensorFlow Developer Certificate Program",
                    "Deep Learning Specialization",
                    "TensorFlow: Advanced Techniques",
                ],
                &[
                    "TensorFlow Developer Certificate",
                    "Google Cloud ML Engineer",
                    "NVIDIA Deep Learning Institute",
                ],
                &["TensorFlow Tutorials", "Keras Code Examples", "Google Colab Notebooks"],
                "3-5 months",
                "\u{a3}100-\u{a3}500",
            ),
        );
        resources.insert(
            "SQL".to_string(),
            bundle(
                &[
                    "SQL for Data Science (Coursera)",
                    "Complete SQL Bootcamp (Udemy)",
                    "W3Schools SQL Tutorial",
                ],
                &[
                    "Microsoft SQL Server Certification",
                    "Oracle Database Certification",
                    "PostgreSQL Certification",
                ],
                &[
                    "SQLBolt Interactive Lessons",
                    "HackerRank SQL Challenges",
                    "LeetCode Database Problems",
                ],
                "1-3 months",
                "\u{a3}20-\u{a3}150",
            ),
        );
        resources.insert(
            "Tableau".to_string(),
            bundle(
                &[
                    "Tableau Desktop Specialist Training",
                    "Data Visualization with Tableau",
                    "Tableau Public Training",
                ],
                &[
                    "Tableau Desktop Specialist",
                    "Tableau Desktop Certified Associate",
                    "Tableau Server Certified Associate",
                ],
                &["Tableau Public Gallery", "MakeoverMonday Challenge", "Workout Wednesday"],
                "2-4 months",
                "\u{a3}100-\u{a3}300",
            ),
        );
        resources.insert(
            "Docker".to_string(),
            bundle(
                &[
                    "Docker Mastery Course",
                    "Docker and Kubernetes Complete Guide",
                    "Docker for Developers",
                ],
                &[
                    "Docker Certified Associate",
                    "Kubernetes Administrator (CKA)",
                    "Red Hat Container Specialist",
                ],
                &["Docker Hub Projects", "Containerize Personal Projects", "Docker Compose Examples"],
                "1-2 months",
                "\u{a3}50-\u{a3}200",
            ),
        );
        resources.insert(
            "Deep Learning".to_string(),
            bundle(
                &[
                    "Deep Learning Specialization (Coursera)",
                    "Fast.ai Deep Learning Course",
                    "MIT Deep Learning Course",
                ],
                &[
                    "NVIDIA Deep Learning Institute",
                    "Google Cloud ML Engineer",
                    "AWS Machine Learning Specialty",
                ],
                &[
                    "Papers with Code Implementation",
                    "Kaggle Deep Learning Competitions",
                    "PyTorch Tutorials",
                ],
                "4-8 months",
                "\u{a3}100-\u{a3}600",
            ),
        );
        resources.insert(
            "Power BI".to_string(),
            bundle(
                &[
                    "Microsoft Power BI Complete Course",
                    "Power BI for Data Analytics",
                    "Power BI Desktop Training",
                ],
                &[
                    "Microsoft Certified: Data Analyst Associate",
                    "Power BI Certification",
                    "Microsoft Power Platform",
                ],
                &["Power BI Community Challenges", "Sample Datasets Practice", "Dashboard Gallery"],
                "2-3 months",
                "\u{a3}80-\u{a3}250",
            ),
        );
        resources.insert(
            "R".to_string(),
            bundle(
                &[
                    "R Programming (Coursera)",
                    "R for Data Science",
                    "Statistics with R Specialization",
                ],
                &[
                    "R Programming Certification",
                    "Data Science with R",
                    "Statistical Analysis with R",
                ],
                &["R-bloggers Tutorials", "Kaggle R Kernels", "RStudio Cloud Projects"],
                "2-4 months",
                "\u{a3}40-\u{a3}200",
            ),
        );

        let mut impact_table = BTreeMap::new();
        impact_table.insert(
            "Machine Learning".to_string(),
            impacts(&[
                (
                    "Data Scientist",
                    "Essential for 95% of Data Scientist roles - salary increase of \u{a3}8,000-\u{a3}15,000",
                ),
                (
                    "Data Analyst",
                    "Opens transition to Data Scientist roles - 40% salary increase potential",
                ),
                ("ML Engineer", "Core requirement - enables senior role progression"),
                (
                    "Data Engineer",
                    "Valuable for ML pipeline development - \u{a3}5,000-\u{a3}10,000 salary premium",
                ),
                (
                    "BI Analyst",
                    "Differentiates from traditional analysts - 25% more job opportunities",
                ),
                ("AI Researcher", "Fundamental requirement - essential for research positions"),
            ]),
        );
        impact_table.insert(
            "Python".to_string(),
            impacts(&[
                ("Data Scientist", "Required for 98% of positions - fundamental programming skill"),
                (
                    "Data Analyst",
                    "Increases job opportunities by 60% - essential for career growth",
                ),
                ("ML Engineer", "Primary programming language - non-negotiable requirement"),
                ("Data Engineer", "Core skill for data processing - required for 90% of roles"),
                ("BI Analyst", "Enables advanced analytics - significant competitive advantage"),
                ("AI Researcher", "Primary research tool - essential for implementation"),
            ]),
        );
        impact_table.insert(
            "AWS".to_string(),
            impacts(&[
                (
                    "Data Scientist",
                    "Cloud skills increase opportunities by 45% - \u{a3}6,000-\u{a3}12,000 premium",
                ),
                ("Data Analyst", "Growing requirement - 30% of new roles require cloud skills"),
                (
                    "ML Engineer",
                    "Essential for model deployment - required for senior positions",
                ),
                (
                    "Data Engineer",
                    "Critical for modern data infrastructure - \u{a3}8,000-\u{a3}15,000 premium",
                ),
                ("BI Analyst", "Valuable for cloud-based BI solutions - emerging requirement"),
                ("AI Researcher", "Important for scalable research infrastructure"),
            ]),
        );
        impact_table.insert(
            "SQL".to_string(),
            impacts(&[
                ("Data Scientist", "Required for 90% of positions - data access fundamental"),
                ("Data Analyst", "Essential skill - required for 99% of analyst roles"),
                ("ML Engineer", "Important for data pipeline work - widely required"),
                ("Data Engineer", "Core requirement - fundamental for data engineering"),
                ("BI Analyst", "Essential skill - required for all BI positions"),
                ("AI Researcher", "Useful for data management in research projects"),
            ]),
        );

        Self {
            resources,
            impacts: impact_table,
        }
    }
}
