//! OpenAI Chat Completions client
//!
//! Bearer auth; questions are requested through strict `json_schema`
//! response format and arrive as a JSON string in
//! `choices[0].message.content`.

use super::schema::question_schema;
use async_trait::async_trait;
use sansu_application::{
    ApiClient, ApiClientError, HttpRequest, HttpTransport, SecretStore, call_api,
    require_api_key,
};
use sansu_domain::{OpenAiSettings, ProviderId, QuestionSet, questions_from_json_text};
use serde_json::{Value, json};
use std::sync::Arc;

const MESSAGE_CONTENT: &str = "/choices/0/message/content";

pub struct OpenAiClient {
    settings: OpenAiSettings,
    secrets: Arc<dyn SecretStore>,
    transport: Arc<dyn HttpTransport>,
}

impl OpenAiClient {
    pub fn new(
        settings: OpenAiSettings,
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
                "content": [{ "type": "text", "text": prompt }]
            }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "response",
                    "strict": true,
                    "schema": question_schema(true),
                }
            },
            "temperature": self.settings.temperature,
            "max_completion_tokens": self.settings.max_completion_tokens,
            "top_p": self.settings.top_p,
            "frequency_penalty": self.settings.frequency_penalty,
            "presence_penalty": self.settings.presence_penalty,
        })
    }
}

#[async_trait]
impl ApiClient for OpenAiClient {
    fn provider(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn api_key(&self) -> Result<String, ApiClientError> {
        require_api_key(self.secrets.as_ref(), &self.settings.api_key_name)
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, ApiClientError> {
        let api_key = self.api_key()?;
        let request = HttpRequest::post_json(&self.settings.endpoint, self.payload(prompt))
            .header("Authorization", format!("Bearer {}", api_key));
        call_api(self.transport.as_ref(), ProviderId::OpenAi, &request).await
    }

    fn extract_questions(&self, response: &Value) -> Result<QuestionSet, ApiClientError> {
        let content = response
            .pointer(MESSAGE_CONTENT)
            .and_then(Value::as_str)
            .ok_or_else(|| ApiClientError::invalid_format(ProviderId::OpenAi))?;
        Ok(questions_from_json_text(content)?)
    }
}
