//! Execution environment value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where a run delivers mail: the developer's inbox or the real recipients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Dev,
    #[default]
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Dev, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "DEV",
            Environment::Prod => "PROD",
        }
    }

    pub fn from_is_prod(is_prod: bool) -> Self {
        if is_prod {
            Environment::Prod
        } else {
            Environment::Dev
        }
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Environment::Prod)
    }

    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|e| e.as_str()).collect()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = DomainError;

    /// Exact, upper-case match only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEV" => Ok(Environment::Dev),
            "PROD" => Ok(Environment::Prod),
            _ => Err(DomainError::InvalidEnvironment(s.to_string())),
        }
    }
}
