//! Provider identifier to client resolution

use super::{ClaudeClient, GeminiClient, OpenAiClient};
use sansu_application::{
    ApiClient, ApiClientError, ApiClientProvider, ExplanationGenerator, HttpTransport,
    SecretStore,
};
use sansu_domain::{ProviderConfig, ProviderId};
use std::sync::Arc;
use tracing::debug;

/// Builds provider clients from the shared configuration table
///
/// The single source of truth for which providers are supported.
#[derive(Clone)]
pub struct ApiClientFactory {
    config: Arc<ProviderConfig>,
    secrets: Arc<dyn SecretStore>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClientFactory {
    pub fn new(
        config: Arc<ProviderConfig>,
        secrets: Arc<dyn SecretStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            config,
            secrets,
            transport,
        }
    }

    /// Client for an already-parsed provider
    pub fn client_for(&self, provider: ProviderId) -> Arc<dyn ApiClient> {
        match provider {
            ProviderId::Gemini => Arc::new(self.gemini()),
            ProviderId::OpenAi => Arc::new(OpenAiClient::new(
                self.config.openai.clone(),
                self.secrets.clone(),
                self.transport.clone(),
            )),
            ProviderId::Claude => Arc::new(ClaudeClient::new(
                self.config.claude.clone(),
                self.secrets.clone(),
                self.transport.clone(),
            )),
        }
    }

    pub fn gemini(&self) -> GeminiClient {
        GeminiClient::new(
            self.config.gemini.clone(),
            self.secrets.clone(),
            self.transport.clone(),
        )
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl ApiClientProvider for ApiClientFactory {
    fn create_client(&self, provider: &str) -> Result<Arc<dyn ApiClient>, ApiClientError> {
        let id: ProviderId = provider.parse()?;
        debug!(provider = %id, model = self.config.model(id), "Creating API client");
        Ok(self.client_for(id))
    }

    fn explanation_client(&self) -> Arc<dyn ExplanationGenerator> {
        Arc::new(self.gemini())
    }
}
