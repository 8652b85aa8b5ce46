//! Extraction error types

use thiserror::Error;

/// Failures while pulling questions out of a provider response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Invalid {provider} API response format")]
    InvalidResponseFormat { provider: String },

    #[error("JSON parsing failed: {0}")]
    JsonParseFailed(String),

    #[error("Generated questions are missing `{key}`")]
    MissingQuestion { key: String },
}

impl ExtractionError {
    pub fn invalid_format(provider: impl Into<String>) -> Self {
        Self::InvalidResponseFormat {
            provider: provider.into(),
        }
    }
}

impl From<serde_json::Error> for ExtractionError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseFailed(err.to_string())
    }
}
