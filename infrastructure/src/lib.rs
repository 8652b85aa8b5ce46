//! Infrastructure layer for sansu-mail
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod mail;
pub mod providers;
pub mod secrets;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, ConfigSource, FileConfig, PromptFileError,
    Severity,
};
pub use http::ReqwestTransport;
pub use mail::{ConsoleMailer, JsonlOutboxMailer};
pub use providers::{ApiClientFactory, ClaudeClient, GeminiClient, OpenAiClient};
pub use secrets::{ChainedSecretStore, EnvSecretStore, StaticSecretStore};
