//! Static knowledge tables: skill vocabulary, role tiers, learning resources
//!
//! All tables are plain serde data loadable from TOML, so the vocabulary and
//! role requirements can be extended without touching matching or scoring
//! logic. Loaded once, read-only afterwards.

pub mod resources;
pub mod roles;
pub mod vocabulary;

pub use resources::{ResourceBundle, ResourceCatalog};
pub use roles::{RoleCatalog, RoleRequirements};
pub use vocabulary::{SkillVocabulary, VocabularyTable};

use crate::error::{Result, ResumeInsightsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub vocabulary: VocabularyTable,
    pub roles: RoleCatalog,
    pub resources: ResourceCatalog,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyTable::default(),
            roles: RoleCatalog::default(),
            resources: ResourceCatalog::default(),
        }
    }
}

impl KnowledgeBase {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let kb: KnowledgeBase = toml::from_str(content).map_err(|e| {
            ResumeInsightsError::KnowledgeBase(format!("Failed to parse knowledge base: {}", e))
        })?;
        kb.validate()?;
        Ok(kb)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Authoring checks that must fail at load time rather than surface as
    /// degraded analysis later.
    pub fn validate(&self) -> Result<()> {
        if !self.roles.roles.contains_key(&self.roles.default_role) {
            return Err(ResumeInsightsError::KnowledgeBase(format!(
                "default role '{}' has no requirement tiers",
                self.roles.default_role
            )));
        }
        // Surfaces malformed variants early; the compiled result is discarded.
        SkillVocabulary::compile(&self.vocabulary)?;
        Ok(())
    }
}
