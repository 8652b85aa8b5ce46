//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod email;
mod lenient;
mod prompts;
mod providers;

pub use email::{FileDefaultsConfig, FileEmailConfig};
pub use prompts::{FilePromptsConfig, PromptFileError};
pub use providers::{FileClaudeConfig, FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};

use super::issues::{ConfigIssue, ConfigIssueCode};
use crate::secrets::StaticSecretStore;
use serde::{Deserialize, Serialize};
use sansu_domain::{
    Environment, Grade, ProviderConfig, ProviderId, Recipients, SubjectSettings,
    placeholder_count,
};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider used when none is given on the command line
    pub defaults: FileDefaultsConfig,
    /// Per-provider endpoints, models and sampling parameters
    pub providers: FileProvidersConfig,
    /// Template file overrides
    pub prompts: FilePromptsConfig,
    /// Subject lines and outbox
    pub email: FileEmailConfig,
    /// Question and answer recipients per environment
    pub recipients: Recipients,
}

impl FileConfig {
    pub fn provider_config(&self) -> ProviderConfig {
        self.providers.to_provider_config()
    }

    pub fn subject_settings(&self) -> SubjectSettings {
        self.email.subject_settings()
    }

    /// Keys written directly in the file, looked up before the environment
    pub fn inline_secrets(&self) -> StaticSecretStore {
        self.providers
            .inline_keys()
            .into_iter()
            .fold(StaticSecretStore::new(), |store, (name, key)| {
                store.with(name, key)
            })
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Default provider and grade identifiers
    /// 2. Empty endpoint, model and key-variable names
    /// 3. Sampling parameters outside the APIs' ranges
    /// 4. Prompt override files (existence, placeholder count)
    /// 5. Environments without recipients
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Defaults
        if !ProviderId::is_supported(&self.defaults.provider) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "defaults.provider".to_string(),
                    value: self.defaults.provider.clone(),
                    valid_values: strings(ProviderId::available()),
                },
                format!(
                    "defaults.provider: unsupported provider '{}'",
                    self.defaults.provider
                ),
            ));
        }
        if !Grade::is_supported(&self.defaults.grade) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "defaults.grade".to_string(),
                    value: self.defaults.grade.clone(),
                    valid_values: strings(Grade::available()),
                },
                format!("defaults.grade: unsupported grade '{}'", self.defaults.grade),
            ));
        }

        // 2. Required strings
        let p = &self.providers;
        for (field, value) in [
            ("providers.gemini.endpoint", &p.gemini.endpoint),
            ("providers.gemini.model", &p.gemini.model),
            ("providers.gemini.api_key_env", &p.gemini.api_key_env),
            ("providers.openai.endpoint", &p.openai.endpoint),
            ("providers.openai.model", &p.openai.model),
            ("providers.openai.api_key_env", &p.openai.api_key_env),
            ("providers.claude.endpoint", &p.claude.endpoint),
            ("providers.claude.model", &p.claude.model),
            ("providers.claude.api_key_env", &p.claude.api_key_env),
            ("providers.claude.api_version", &p.claude.api_version),
            ("email.subject_prefix", &self.email.subject_prefix),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyField {
                        field: field.to_string(),
                    },
                    format!("{} cannot be empty", field),
                ));
            }
        }

        // 3. Ranges
        for (field, value, max) in [
            ("providers.gemini.temperature", p.gemini.temperature, 2.0),
            ("providers.gemini.top_p", p.gemini.top_p, 1.0),
            ("providers.openai.temperature", p.openai.temperature, 2.0),
            ("providers.openai.top_p", p.openai.top_p, 1.0),
            ("providers.claude.temperature", p.claude.temperature, 1.0),
        ] {
            if !(0.0..=max).contains(&value) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                    },
                    format!("{}: {} is outside 0..={}", field, value, max),
                ));
            }
        }

        // 4. Prompt files
        for (field, path) in self.prompts.paths() {
            match std::fs::read_to_string(path) {
                Err(_) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::MissingFile {
                        field: field.to_string(),
                        path: path.display().to_string(),
                    },
                    format!("{}: cannot read {}", field, path.display()),
                )),
                Ok(text) if field != "prompts.explanation" => {
                    let found = placeholder_count(&text);
                    if found != 2 {
                        issues.push(ConfigIssue::warning(
                            ConfigIssueCode::PlaceholderCount {
                                field: field.to_string(),
                                found,
                            },
                            format!(
                                "{}: expected 2 topic placeholders, found {}",
                                field, found
                            ),
                        ));
                    }
                }
                Ok(_) => {}
            }
        }

        // 5. Recipients
        for environment in Environment::ALL {
            let list = self.recipients.for_environment(environment);
            if list.questions.is_empty() || list.answers.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::NoRecipients {
                        environment: environment.to_string(),
                    },
                    format!(
                        "[recipients.{}] needs both questions and answers to run in {}",
                        environment.as_str().to_lowercase(),
                        environment
                    ),
                ));
            }
        }

        issues
    }
}

fn strings(values: Vec<&'static str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issues::Severity;
    use sansu_application::SecretStore;
    use sansu_domain::RecipientList;

    fn with_recipients() -> FileConfig {
        FileConfig {
            recipients: Recipients {
                dev: RecipientList::new(vec!["dev@example.com".into()], vec!["dev@example.com".into()]),
                prod: RecipientList::new(vec!["kid@example.com".into()], vec!["me@example.com".into()]),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[defaults]
provider = "claude"
grade = "5"

[providers.gemini]
model = "gemini-2.0-flash"
top_k = 40

[providers.openai]
model = "gpt-4o-mini"
api_key = "sk-inline"

[providers.claude]
api_key_env = "ANTHROPIC_API_KEY"
max_tokens = 4096

[email]
subject_prefix = "今日の問題"
outbox = "/tmp/outbox.jsonl"

[recipients.prod]
questions = ["kid@example.com"]
answers = ["me@example.com", "kid@example.com"]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.provider, "claude");
        assert_eq!(config.providers.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.providers.gemini.top_k, 40);
        // untouched fields keep their defaults
        assert_eq!(config.providers.gemini.top_p, 0.95);
        assert_eq!(config.providers.claude.api_version, "2023-06-01");
        assert_eq!(config.email.subject_prefix, "今日の問題");
        assert_eq!(config.email.test_prefix, "[TEST]");
        assert_eq!(config.recipients.prod.answers.len(), 2);
        assert!(config.recipients.dev.questions.is_empty());

        let table = config.providers.to_provider_config();
        assert_eq!(table.openai.model, "gpt-4o-mini");
        assert_eq!(table.claude.api_key_name, "ANTHROPIC_API_KEY");
        assert_eq!(table.claude.max_tokens, 4096);

        assert_eq!(
            config.providers.inline_keys(),
            vec![("OPENAI_API_KEY".to_string(), "sk-inline".to_string())]
        );
        let secrets = config.inline_secrets();
        assert_eq!(secrets.get("OPENAI_API_KEY"), Some("sk-inline".to_string()));
        assert_eq!(secrets.get("GEMINI_API_KEY"), None);
        assert_eq!(config.subject_settings().prefix, "今日の問題");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.defaults.provider, "gemini");
        assert_eq!(config.defaults.grade, "4");
        assert_eq!(
            config.providers.to_provider_config(),
            sansu_domain::ProviderConfig::default()
        );
        assert!(config.email.outbox.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(with_recipients().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = with_recipients();
        config.defaults.provider = "bard".to_string();
        config.defaults.grade = "6".to_string();
        config.providers.openai.model = " ".to_string();
        config.providers.claude.temperature = 1.5;
        config.prompts.fourth_grade = Some("/nonexistent/g4.md".into());
        config.recipients.dev.answers.clear();

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| &i.code).collect();

        assert!(codes.contains(&&ConfigIssueCode::InvalidEnumValue {
            field: "defaults.provider".to_string(),
            value: "bard".to_string(),
            valid_values: vec!["gemini".into(), "openai".into(), "claude".into()],
        }));
        assert!(codes.contains(&&ConfigIssueCode::EmptyField {
            field: "providers.openai.model".to_string()
        }));
        assert!(codes.contains(&&ConfigIssueCode::OutOfRange {
            field: "providers.claude.temperature".to_string()
        }));
        assert!(codes.contains(&&ConfigIssueCode::MissingFile {
            field: "prompts.fourth_grade".to_string(),
            path: "/nonexistent/g4.md".to_string(),
        }));
        assert!(codes.contains(&&ConfigIssueCode::NoRecipients {
            environment: "DEV".to_string()
        }));
        assert_eq!(issues.len(), 6);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 4);
    }

    #[test]
    fn test_validate_warns_on_placeholder_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g5.md");
        std::fs::write(&path, "only one ##{WORD_PROBLEM}##").unwrap();

        let mut config = with_recipients();
        config.prompts.fifth_grade = Some(path);

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::PlaceholderCount {
                field: "prompts.fifth_grade".to_string(),
                found: 1
            }
        );
    }
}
