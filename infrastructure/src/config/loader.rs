//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sansu-mail";
const PROJECT_FILES: [&str; 2] = ["sansu.toml", ".sansu.toml"];
const ENV_PREFIX: &str = "SANSU_";

/// Where a configuration layer came from and whether it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SANSU_*` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./sansu.toml` or `./.sansu.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/sansu-mail/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            Self::require_exists(path)?;
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load a single file over the defaults, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Self::require_exists(path)?;
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// An explicitly named file must exist; discovered files are optional
    fn require_exists(path: &Path) -> Result<(), Box<figment::Error>> {
        if path.exists() {
            Ok(())
        } else {
            Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))))
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Config layers in priority order, for `show-config`
    pub fn config_sources(explicit: Option<&Path>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                label: "Explicit",
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                label: "Project",
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                label: "Project",
                location: PROJECT_FILES
                    .iter()
                    .map(|f| format!("./{}", f))
                    .collect::<Vec<_>>()
                    .join(" or "),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                label: "Global",
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.defaults.provider, "gemini");
        assert!(config.recipients.prod.questions.is_empty());
    }

    #[test]
    fn test_global_config_path() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("sansu-mail/config.toml"));
        }
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
grade = "5"

[providers.claude]
model = "claude-sonnet-4"

[recipients.dev]
questions = ["me@example.com"]
answers = ["me@example.com"]
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.defaults.grade, "5");
        assert_eq!(config.defaults.provider, "gemini");
        assert_eq!(config.providers.claude.model, "claude-sonnet-4");
        assert_eq!(config.providers.claude.max_tokens, 2048);
        assert_eq!(config.recipients.dev.answers, ["me@example.com"]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[defaults\nprovider = ").unwrap();
        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides_accept_numeric_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ngrade = 4\n").unwrap();

        unsafe {
            std::env::set_var("SANSU_DEFAULTS__GRADE", "5");
            std::env::set_var("SANSU_PROVIDERS__CLAUDE__MAX_TOKENS", "4096");
            std::env::set_var("SANSU_PROVIDERS__OPENAI__MODEL", "4");
        }
        let result = ConfigLoader::load(Some(&path));
        unsafe {
            std::env::remove_var("SANSU_DEFAULTS__GRADE");
            std::env::remove_var("SANSU_PROVIDERS__CLAUDE__MAX_TOKENS");
            std::env::remove_var("SANSU_PROVIDERS__OPENAI__MODEL");
        }

        let config = result.unwrap();
        assert_eq!(config.defaults.grade, "5");
        assert_eq!(config.providers.claude.max_tokens, 4096);
        assert_eq!(config.providers.openai.model, "4");
    }

    #[test]
    fn test_numeric_grade_in_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ngrade = 5\n").unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.defaults.grade, "5");
    }

    #[test]
    fn test_config_sources_lists_explicit_first() {
        let sources = ConfigLoader::config_sources(Some(Path::new("/nonexistent/sansu.toml")));
        assert_eq!(sources[0].label, "Explicit");
        assert!(!sources[0].found);
        assert_eq!(sources[1].label, "Project");
    }
}
