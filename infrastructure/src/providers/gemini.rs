//! Google Gemini client
//!
//! The API key travels as the `key` query parameter. Questions come back
//! through `responseSchema` JSON mode as a JSON string nested in
//! `candidates[0].content.parts[0].text`.

use super::schema::question_schema;
use async_trait::async_trait;
use sansu_application::{
    ApiClient, ApiClientError, ExplanationGenerator, HttpRequest, HttpTransport, SecretStore,
    call_api, require_api_key,
};
use sansu_domain::{
    Explanation, GeminiSettings, ProviderId, QuestionSet, explanation_request,
    questions_from_json_text, require_non_empty, require_non_empty_list,
};
use serde_json::{Value, json};
use std::sync::Arc;

const CANDIDATE_TEXT: &str = "/candidates/0/content/parts/0/text";

pub struct GeminiClient {
    settings: GeminiSettings,
    secrets: Arc<dyn SecretStore>,
    transport: Arc<dyn HttpTransport>,
}

impl GeminiClient {
    pub fn new(
        settings: GeminiSettings,
        secrets: Arc<dyn SecretStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            settings,
            secrets,
            transport,
        }
    }

    fn request(&self, api_key: &str, prompt: &str, generation_config: Value) -> HttpRequest {
        let url = format!("{}?key={}", self.settings.generate_content_url(), api_key);
        HttpRequest::post_json(
            url,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": generation_config,
            }),
        )
    }

    fn question_config(&self) -> Value {
        json!({
            "temperature": self.settings.temperature,
            "topK": self.settings.top_k,
            "topP": self.settings.top_p,
            "maxOutputTokens": self.settings.max_output_tokens,
            "responseMimeType": "application/json",
            "responseSchema": question_schema(false),
        })
    }

    fn text_config(&self) -> Value {
        json!({
            "temperature": self.settings.temperature,
            "topK": self.settings.top_k,
            "topP": self.settings.top_p,
            "maxOutputTokens": self.settings.explanation_max_output_tokens,
            "responseMimeType": "text/plain",
        })
    }

    /// Plain-text generation, used for explanations
    pub async fn generate_text_content(&self, prompt: &str) -> Result<String, ApiClientError> {
        let api_key = self.api_key()?;
        let request = self.request(&api_key, prompt, self.text_config());
        call_api(self.transport.as_ref(), ProviderId::Gemini, &request).await
    }

    fn candidate_text<'a>(&self, response: &'a Value) -> Result<&'a str, ApiClientError> {
        response
            .pointer(CANDIDATE_TEXT)
            .and_then(Value::as_str)
            .ok_or_else(|| ApiClientError::invalid_format(ProviderId::Gemini))
    }

    /// Explanation text from a plain-text response envelope
    pub fn extract_explanation(&self, response: &Value) -> Result<Explanation, ApiClientError> {
        self.candidate_text(response).map(Explanation::new)
    }
}

#[async_trait]
impl ApiClient for GeminiClient {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn api_key(&self) -> Result<String, ApiClientError> {
        require_api_key(self.secrets.as_ref(), &self.settings.api_key_name)
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, ApiClientError> {
        let api_key = self.api_key()?;
        let request = self.request(&api_key, prompt, self.question_config());
        call_api(self.transport.as_ref(), ProviderId::Gemini, &request).await
    }

    fn extract_questions(&self, response: &Value) -> Result<QuestionSet, ApiClientError> {
        let text = self.candidate_text(response)?;
        Ok(questions_from_json_text(text)?)
    }
}

#[async_trait]
impl ExplanationGenerator for GeminiClient {
    async fn generate_explanation(
        &self,
        questions: &QuestionSet,
        explanation_prompt: &str,
    ) -> Result<Explanation, ApiClientError> {
        let result = async {
            require_non_empty_list(questions.as_slice(), "questions")?;
            require_non_empty(explanation_prompt, "explanation prompt")?;

            let prompt = explanation_request(explanation_prompt, questions);
            let body = self.generate_text_content(&prompt).await?;
            let response = self.parse_json_response(&body)?;
            self.extract_explanation(&response)
        }
        .await;

        result.map_err(|e| ApiClientError::ExplanationFailed(Box::new(e)))
    }
}
