//! Prompt template overrides (`[prompts]` section)

use serde::{Deserialize, Serialize};
use sansu_domain::PromptTemplates;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to read prompt file {path}: {source}")]
pub struct PromptFileError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Optional files replacing the built-in templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    pub fourth_grade: Option<PathBuf>,
    pub fifth_grade: Option<PathBuf>,
    pub explanation: Option<PathBuf>,
}

impl FilePromptsConfig {
    /// Configured paths with their field names
    pub fn paths(&self) -> Vec<(&'static str, &Path)> {
        [
            ("prompts.fourth_grade", &self.fourth_grade),
            ("prompts.fifth_grade", &self.fifth_grade),
            ("prompts.explanation", &self.explanation),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.as_deref().map(|p| (field, p)))
        .collect()
    }

    /// Built-in templates with any configured files swapped in
    pub fn load_templates(&self) -> Result<PromptTemplates, PromptFileError> {
        let mut templates = PromptTemplates::default();
        if let Some(path) = &self.fourth_grade {
            templates.fourth_grade = read(path)?;
        }
        if let Some(path) = &self.fifth_grade {
            templates.fifth_grade = read(path)?;
        }
        if let Some(path) = &self.explanation {
            templates.explanation = read(path)?;
        }
        Ok(templates)
    }
}

fn read(path: &Path) -> Result<String, PromptFileError> {
    std::fs::read_to_string(path).map_err(|source| PromptFileError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_builtin_templates() {
        let templates = FilePromptsConfig::default().load_templates().unwrap();
        assert_eq!(templates, PromptTemplates::default());
    }

    #[test]
    fn test_override_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g4.md");
        std::fs::write(&path, "カスタム ##{WORD_PROBLEM}##").unwrap();

        let config = FilePromptsConfig {
            fourth_grade: Some(path),
            ..Default::default()
        };
        let templates = config.load_templates().unwrap();
        assert_eq!(templates.fourth_grade, "カスタム ##{WORD_PROBLEM}##");
        assert_eq!(templates.fifth_grade, PromptTemplates::default().fifth_grade);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = FilePromptsConfig {
            explanation: Some(PathBuf::from("/nonexistent/explanation.md")),
            ..Default::default()
        };
        let err = config.load_templates().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/explanation.md"));
    }
}
