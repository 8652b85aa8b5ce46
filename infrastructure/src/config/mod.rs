//! Configuration file loading for sansu-mail
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SANSU_*` environment variables (e.g. `SANSU_DEFAULTS__GRADE=5`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sansu.toml` or `./.sansu.toml`
//! 4. Global: `$XDG_CONFIG_HOME/sansu-mail/config.toml`
//! 5. Default values

mod file_config;
mod issues;
mod loader;

pub use file_config::{
    FileClaudeConfig, FileConfig, FileDefaultsConfig, FileEmailConfig, FileGeminiConfig,
    FileOpenAiConfig, FilePromptsConfig, FileProvidersConfig, PromptFileError,
};
pub use issues::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::{ConfigLoader, ConfigSource};
