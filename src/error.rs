//! Error handling for the resume insights engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeInsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Raised by upstream document decoding, never by this crate. Kept so
    /// callers wrapping the full pipeline share one error type.
    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type Result<T> = std::result::Result<T, ResumeInsightsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeInsightsError {
    fn from(err: anyhow::Error) -> Self {
        ResumeInsightsError::AnalysisFailed(err.to_string())
    }
}
