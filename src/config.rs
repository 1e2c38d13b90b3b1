//! Configuration for the resume insights engine

use crate::error::{Result, ResumeInsightsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Inputs longer than this are truncated before the vocabulary scan.
    pub max_text_chars: usize,
    pub max_skill_matches: usize,
    pub max_education_lines: usize,
    pub max_experience_lines: usize,
    pub max_project_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                max_text_chars: 200_000,
                max_skill_matches: 20,
                max_education_lines: 5,
                max_experience_lines: 10,
                max_project_lines: 5,
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeInsightsError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeInsightsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }
}
