//! Recipient lists per environment

use crate::core::environment::Environment;
use serde::{Deserialize, Serialize};

/// Addresses that receive the question mail and the answer mail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientList {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

impl RecipientList {
    pub fn new(questions: Vec<String>, answers: Vec<String>) -> Self {
        Self { questions, answers }
    }
}

/// Recipient lists keyed by environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipients {
    pub dev: RecipientList,
    pub prod: RecipientList,
}

impl Recipients {
    pub fn for_environment(&self, environment: Environment) -> &RecipientList {
        match environment {
            Environment::Dev => &self.dev,
            Environment::Prod => &self.prod,
        }
    }
}

/// Render a recipient list as a single `To:` value
pub fn join_recipients(recipients: &[String]) -> String {
    recipients.join(",")
}
