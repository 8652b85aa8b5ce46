//! Provider identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM API providers that can generate questions (Value Object)
///
/// Parsing is case-insensitive; the canonical form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    Gemini,
    OpenAi,
    Claude,
}

impl ProviderId {
    /// Every supported provider, in display order
    pub const ALL: [ProviderId; 3] = [ProviderId::Gemini, ProviderId::OpenAi, ProviderId::Claude];

    /// Canonical lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::OpenAi => "openai",
            ProviderId::Claude => "claude",
        }
    }

    /// Human-facing API name used in logs and error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "Gemini",
            ProviderId::OpenAi => "OpenAI",
            ProviderId::Claude => "Claude",
        }
    }

    /// Default secret-store key holding this provider's API key
    pub fn default_api_key_name(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "GEMINI_API_KEY",
            ProviderId::OpenAi => "OPENAI_API_KEY",
            ProviderId::Claude => "CLAUDE_API_KEY",
        }
    }

    /// Canonical identifiers of all providers
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }

    /// Pure predicate, same casing rule as parsing
    pub fn is_supported(value: &str) -> bool {
        value.parse::<ProviderId>().is_ok()
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderId::Gemini),
            "openai" => Ok(ProviderId::OpenAi),
            "claude" => Ok(ProviderId::Claude),
            _ => Err(DomainError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl Serialize for ProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
