//! Anthropic Claude client
//!
//! Claude has no structured-output mode here, so the prompt carries JSON
//! answer instructions and the reply text goes through the recovery chain.

use async_trait::async_trait;
use sansu_application::{
    ApiClient, ApiClientError, HttpRequest, HttpTransport, SecretStore, call_api,
    require_api_key,
};
use sansu_domain::{
    ClaudeSettings, ProviderId, QuestionSet, json_answer_instructions, questions_from_object,
    recover_json_object,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

const CONTENT_TEXT: &str = "/content/0/text";

pub struct ClaudeClient {
    settings: ClaudeSettings,
    secrets: Arc<dyn SecretStore>,
    transport: Arc<dyn HttpTransport>,
}

impl ClaudeClient {
    pub fn new(
        settings: ClaudeSettings,
        secrets: Arc<dyn SecretStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            settings,
            secrets,
            transport,
        }
    }

    fn payload(&self, prompt: &str) -> Value {
        json!({
            "model": self.settings.model,
            "messages": [{
                "role": "user",
                "content": format!("{}{}", prompt, json_answer_instructions()),
            }],
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
        })
    }
}

#[async_trait]
impl ApiClient for ClaudeClient {
    fn provider(&self) -> ProviderId {
        ProviderId::Claude
    }

    fn api_key(&self) -> Result<String, ApiClientError> {
        require_api_key(self.secrets.as_ref(), &self.settings.api_key_name)
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, ApiClientError> {
        let api_key = self.api_key()?;
        let request = HttpRequest::post_json(&self.settings.endpoint, self.payload(prompt))
            .header("x-api-key", api_key)
            .header("anthropic-version", self.settings.api_version.as_str());
        call_api(self.transport.as_ref(), ProviderId::Claude, &request).await
    }

    fn extract_questions(&self, response: &Value) -> Result<QuestionSet, ApiClientError> {
        let text = response
            .pointer(CONTENT_TEXT)
            .and_then(Value::as_str)
            .ok_or_else(|| ApiClientError::invalid_format(ProviderId::Claude))?;

        let (strategy, object) = recover_json_object(text)
            .ok_or_else(|| ApiClientError::invalid_format(ProviderId::Claude))?;
        debug!(?strategy, "Recovered JSON from Claude response");

        Ok(questions_from_object(&object)?)
    }
}
