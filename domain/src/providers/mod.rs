//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define endpoints, model names and sampling parameters
//! for each provider without depending on any serialization format.
//! A [`ProviderConfig`] is built once at start-up and shared read-only.

use crate::core::provider::ProviderId;

/// Per-provider generation settings for every supported API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub gemini: GeminiSettings,
    pub openai: OpenAiSettings,
    pub claude: ClaudeSettings,
}

impl ProviderConfig {
    /// Secret-store key name for the given provider.
    pub fn api_key_name(&self, provider: ProviderId) -> &str {
        match provider {
            ProviderId::Gemini => &self.gemini.api_key_name,
            ProviderId::OpenAi => &self.openai.api_key_name,
            ProviderId::Claude => &self.claude.api_key_name,
        }
    }

    /// Model name configured for the given provider.
    pub fn model(&self, provider: ProviderId) -> &str {
        match provider {
            ProviderId::Gemini => &self.gemini.model,
            ProviderId::OpenAi => &self.openai.model,
            ProviderId::Claude => &self.claude.model,
        }
    }
}

/// Google Gemini `generateContent` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    /// Base models URL; `{model}:generateContent` is appended.
    pub endpoint: String,
    pub model: String,
    pub api_key_name: String,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    /// Token limit for the structured question call.
    pub max_output_tokens: u32,
    /// Token limit for the plain-text explanation call.
    pub explanation_max_output_tokens: u32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/".to_string(),
            model: "gemini-2.5-pro-preview-06-05".to_string(),
            api_key_name: ProviderId::Gemini.default_api_key_name().to_string(),
            temperature: 1.0,
            top_k: 64,
            top_p: 0.95,
            max_output_tokens: 65536,
            explanation_max_output_tokens: 8192,
        }
    }
}

impl GeminiSettings {
    /// Full `generateContent` URL without the key query parameter.
    pub fn generate_content_url(&self) -> String {
        let base = if self.endpoint.ends_with('/') {
            self.endpoint.clone()
        } else {
            format!("{}/", self.endpoint)
        };
        format!("{}{}:generateContent", base, self.model)
    }
}

/// OpenAI Chat Completions settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key_name: String,
    pub temperature: f64,
    pub max_completion_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o".to_string(),
            api_key_name: ProviderId::OpenAi.default_api_key_name().to_string(),
            temperature: 1.0,
            max_completion_tokens: 2048,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Anthropic Messages API settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaudeSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key_name: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Value of the `anthropic-version` header.
    pub api_version: String,
}

impl Default for ClaudeSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-7-sonnet-20250219".to_string(),
            api_key_name: ProviderId::Claude.default_api_key_name().to_string(),
            max_tokens: 2048,
            temperature: 1.0,
            api_version: "2023-06-01".to_string(),
        }
    }
}
