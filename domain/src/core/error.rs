//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these are raised before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported API provider: {0}")]
    UnsupportedProvider(String),

    #[error("Unsupported grade: {0}. Supported grades: {supported}", supported = crate::Grade::supported_list())]
    UnsupportedGrade(String),

    #[error("Invalid environment: {0}. Must be one of: DEV, PROD")]
    InvalidEnvironment(String),

    #[error("{0} must be a non-empty string")]
    InvalidInput(String),

    #[error("{0} must not be empty")]
    EmptyList(String),

    #[error("No {kind} recipients configured for {environment}")]
    MissingRecipients { kind: String, environment: String },
}

impl DomainError {
    /// Check if this error was caused by caller input rather than configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnsupportedProvider(_)
                | DomainError::UnsupportedGrade(_)
                | DomainError::InvalidEnvironment(_)
                | DomainError::InvalidInput(_)
                | DomainError::EmptyList(_)
        )
    }
}
