//! Mail settings (`[email]` and `[defaults]` sections)

use serde::{Deserialize, Serialize};
use sansu_domain::{Grade, ProviderId, SubjectSettings};
use std::path::PathBuf;

/// Where and how mails are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEmailConfig {
    #[serde(deserialize_with = "super::lenient::string")]
    pub subject_prefix: String,
    #[serde(deserialize_with = "super::lenient::string")]
    pub test_prefix: String,
    /// JSONL outbox; mails are printed to the console when unset
    pub outbox: Option<PathBuf>,
}

impl Default for FileEmailConfig {
    fn default() -> Self {
        let s = SubjectSettings::default();
        Self {
            subject_prefix: s.prefix,
            test_prefix: s.test_prefix,
            outbox: None,
        }
    }
}

impl FileEmailConfig {
    pub fn subject_settings(&self) -> SubjectSettings {
        SubjectSettings {
            prefix: self.subject_prefix.clone(),
            test_prefix: self.test_prefix.clone(),
        }
    }
}

/// Provider and grade used when the command line names none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    #[serde(deserialize_with = "super::lenient::string")]
    pub provider: String,
    #[serde(deserialize_with = "super::lenient::string")]
    pub grade: String,
}

impl Default for FileDefaultsConfig {
    fn default() -> Self {
        Self {
            provider: ProviderId::default().as_str().to_string(),
            grade: Grade::default().as_str().to_string(),
        }
    }
}
