//! API client port
//!
//! Uniform contract over the provider APIs: build and send a request,
//! parse the raw body as JSON, then pull the questions out of the
//! provider-specific envelope.

use crate::ports::http_transport::{HttpRequest, HttpTransport};
use crate::ports::secret_store::SecretStore;
use async_trait::async_trait;
use sansu_domain::{
    DomainError, Explanation, ExtractionError, ProviderId, QuestionSet, parse_json,
    require_non_empty,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Why an API call did not return a usable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCallFailure {
    /// The server answered with status >= 400
    Status { code: u16, body: String },
    /// The request never completed
    Transport(String),
}

impl std::fmt::Display for ApiCallFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiCallFailure::Status { code, body } => {
                write!(f, "returned status code {}: {}", code, body)
            }
            ApiCallFailure::Transport(message) => write!(f, "{}", message),
        }
    }
}

/// Errors raised by provider clients
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiClientError {
    #[error("{0} not found in secret store")]
    ApiKeyNotFound(String),

    #[error("{provider} API call failed: {failure}")]
    ApiCall {
        provider: String,
        failure: ApiCallFailure,
    },

    #[error("Invalid {provider} API response format")]
    InvalidResponseFormat { provider: String },

    #[error("JSON parsing failed: {0}")]
    JsonParseFailed(String),

    #[error("Generated questions are missing `{key}`")]
    MissingQuestion { key: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Question extraction failed: {0}")]
    QuestionExtractionFailed(Box<ApiClientError>),

    #[error("Failed to generate explanation: {0}")]
    ExplanationFailed(Box<ApiClientError>),
}

impl ApiClientError {
    pub fn invalid_format(provider: ProviderId) -> Self {
        Self::InvalidResponseFormat {
            provider: provider.display_name().to_string(),
        }
    }

    /// Innermost error, looking through the composed-operation wrappers
    pub fn root_cause(&self) -> &ApiClientError {
        match self {
            Self::QuestionExtractionFailed(inner) | Self::ExplanationFailed(inner) => {
                inner.root_cause()
            }
            other => other,
        }
    }

    /// Check if this error was raised before any network activity
    pub fn is_input_error(&self) -> bool {
        match self.root_cause() {
            Self::Domain(e) => e.is_input_error(),
            _ => false,
        }
    }
}

impl From<ExtractionError> for ApiClientError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::InvalidResponseFormat { provider } => {
                Self::InvalidResponseFormat { provider }
            }
            ExtractionError::JsonParseFailed(message) => Self::JsonParseFailed(message),
            ExtractionError::MissingQuestion { key } => Self::MissingQuestion { key },
        }
    }
}

/// Look up an API key, failing when it is absent
pub fn require_api_key(store: &dyn SecretStore, key_name: &str) -> Result<String, ApiClientError> {
    require_non_empty(key_name, "Key name")?;
    store
        .get(key_name)
        .ok_or_else(|| ApiClientError::ApiKeyNotFound(key_name.to_string()))
}

/// Send one request and return the body text.
///
/// Status >= 400 and transport failures both become [`ApiClientError::ApiCall`].
pub async fn call_api(
    transport: &dyn HttpTransport,
    provider: ProviderId,
    request: &HttpRequest,
) -> Result<String, ApiClientError> {
    let api_name = provider.display_name();
    info!("Calling {} API...", api_name);

    let response = transport
        .post_json(request)
        .await
        .map_err(|e| ApiClientError::ApiCall {
            provider: api_name.to_string(),
            failure: ApiCallFailure::Transport(e.to_string()),
        })?;

    if response.is_error() {
        error!(
            provider = %provider,
            status = response.status,
            "{} API Error Response: {}",
            api_name,
            response.body
        );
        return Err(ApiClientError::ApiCall {
            provider: api_name.to_string(),
            failure: ApiCallFailure::Status {
                code: response.status,
                body: response.body,
            },
        });
    }

    Ok(response.body)
}

/// A provider client that generates word problems
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Which provider this client talks to
    fn provider(&self) -> ProviderId;

    /// API key from the secret store
    fn api_key(&self) -> Result<String, ApiClientError>;

    /// Issue the generation request; returns the raw response body
    async fn generate_content(&self, prompt: &str) -> Result<String, ApiClientError>;

    /// Pull the five questions out of the parsed response envelope
    fn extract_questions(&self, response: &Value) -> Result<QuestionSet, ApiClientError>;

    /// Parse a raw response body
    fn parse_json_response(&self, body: &str) -> Result<Value, ApiClientError> {
        Ok(parse_json(body)?)
    }

    /// Validate, call, parse and extract.
    ///
    /// Any failure is wrapped in [`ApiClientError::QuestionExtractionFailed`].
    async fn generate_questions(&self, prompt: &str) -> Result<QuestionSet, ApiClientError> {
        let result = async {
            require_non_empty(prompt, "prompt")?;
            let body = self.generate_content(prompt).await?;
            let response = self.parse_json_response(&body)?;
            self.extract_questions(&response)
        }
        .await;

        result.map_err(|e| ApiClientError::QuestionExtractionFailed(Box::new(e)))
    }
}

/// A client that can explain a question set
#[async_trait]
pub trait ExplanationGenerator: Send + Sync {
    async fn generate_explanation(
        &self,
        questions: &QuestionSet,
        explanation_prompt: &str,
    ) -> Result<Explanation, ApiClientError>;
}

/// Resolves provider identifiers to clients
pub trait ApiClientProvider: Send + Sync {
    /// Case-insensitive lookup; never falls back to a default provider
    fn create_client(&self, provider: &str) -> Result<Arc<dyn ApiClient>, ApiClientError>;

    /// The client used for every explanation, whichever provider wrote the questions
    fn explanation_client(&self) -> Arc<dyn ExplanationGenerator>;

    fn is_provider_supported(&self, provider: &str) -> bool {
        ProviderId::is_supported(provider)
    }

    fn available_providers(&self) -> Vec<&'static str> {
        ProviderId::available()
    }
}
