//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use sansu_domain::{ClaudeSettings, GeminiSettings, OpenAiSettings, ProviderConfig};

/// Google Gemini settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    #[serde(deserialize_with = "super::lenient::string")]
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    #[serde(deserialize_with = "super::lenient::opt_string")]
    pub api_key: Option<String>,
    /// Base models URL (`{model}:generateContent` is appended).
    #[serde(deserialize_with = "super::lenient::string")]
    pub endpoint: String,
    #[serde(deserialize_with = "super::lenient::string")]
    pub model: String,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
    /// Token limit for the plain-text explanation call.
    pub explanation_max_output_tokens: u32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let s = GeminiSettings::default();
        Self {
            api_key_env: s.api_key_name,
            api_key: None,
            endpoint: s.endpoint,
            model: s.model,
            temperature: s.temperature,
            top_k: s.top_k,
            top_p: s.top_p,
            max_output_tokens: s.max_output_tokens,
            explanation_max_output_tokens: s.explanation_max_output_tokens,
        }
    }
}

impl FileGeminiConfig {
    pub fn to_settings(&self) -> GeminiSettings {
        GeminiSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            api_key_name: self.api_key_env.clone(),
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
            explanation_max_output_tokens: self.explanation_max_output_tokens,
        }
    }
}

/// OpenAI Chat Completions settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    #[serde(deserialize_with = "super::lenient::string")]
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    #[serde(deserialize_with = "super::lenient::opt_string")]
    pub api_key: Option<String>,
    /// Full chat completions URL (can be overridden for compatible gateways).
    #[serde(deserialize_with = "super::lenient::string")]
    pub endpoint: String,
    #[serde(deserialize_with = "super::lenient::string")]
    pub model: String,
    pub temperature: f64,
    pub max_completion_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let s = OpenAiSettings::default();
        Self {
            api_key_env: s.api_key_name,
            api_key: None,
            endpoint: s.endpoint,
            model: s.model,
            temperature: s.temperature,
            max_completion_tokens: s.max_completion_tokens,
            top_p: s.top_p,
            frequency_penalty: s.frequency_penalty,
            presence_penalty: s.presence_penalty,
        }
    }
}

impl FileOpenAiConfig {
    pub fn to_settings(&self) -> OpenAiSettings {
        OpenAiSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            api_key_name: self.api_key_env.clone(),
            temperature: self.temperature,
            max_completion_tokens: self.max_completion_tokens,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
        }
    }
}

/// Anthropic Messages API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClaudeConfig {
    /// Environment variable name for the API key (default: "CLAUDE_API_KEY").
    #[serde(deserialize_with = "super::lenient::string")]
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    #[serde(deserialize_with = "super::lenient::opt_string")]
    pub api_key: Option<String>,
    #[serde(deserialize_with = "super::lenient::string")]
    pub endpoint: String,
    #[serde(deserialize_with = "super::lenient::string")]
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Anthropic API version header.
    #[serde(deserialize_with = "super::lenient::string")]
    pub api_version: String,
}

impl Default for FileClaudeConfig {
    fn default() -> Self {
        let s = ClaudeSettings::default();
        Self {
            api_key_env: s.api_key_name,
            api_key: None,
            endpoint: s.endpoint,
            model: s.model,
            max_tokens: s.max_tokens,
            temperature: s.temperature,
            api_version: s.api_version,
        }
    }
}

impl FileClaudeConfig {
    pub fn to_settings(&self) -> ClaudeSettings {
        ClaudeSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            api_key_name: self.api_key_env.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            api_version: self.api_version.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub gemini: FileGeminiConfig,
    pub openai: FileOpenAiConfig,
    pub claude: FileClaudeConfig,
}

impl FileProvidersConfig {
    /// Immutable provider table handed to the client factory
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            gemini: self.gemini.to_settings(),
            openai: self.openai.to_settings(),
            claude: self.claude.to_settings(),
        }
    }

    /// `(api_key_env, api_key)` pairs for keys given inline
    pub fn inline_keys(&self) -> Vec<(String, String)> {
        [
            (&self.gemini.api_key_env, &self.gemini.api_key),
            (&self.openai.api_key_env, &self.openai.api_key),
            (&self.claude.api_key_env, &self.claude.api_key),
        ]
        .into_iter()
        .filter_map(|(name, key)| key.as_ref().map(|k| (name.clone(), k.clone())))
        .collect()
    }
}
