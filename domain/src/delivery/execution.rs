//! Validated settings for one delivery run

use super::recipients::Recipients;
use crate::core::environment::Environment;
use crate::core::error::DomainError;
use crate::core::grade::Grade;
use crate::core::provider::ProviderId;

/// Everything a delivery run needs, checked before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub provider: ProviderId,
    pub grade: Grade,
    pub environment: Environment,
    pub question_recipients: Vec<String>,
    pub answer_recipients: Vec<String>,
}

impl ExecutionConfig {
    pub fn new(
        is_prod: bool,
        provider: &str,
        grade: &str,
        recipients: &Recipients,
    ) -> Result<Self, DomainError> {
        let provider: ProviderId = provider.parse()?;
        let grade: Grade = grade.parse()?;
        let environment = Environment::from_is_prod(is_prod);

        let list = recipients.for_environment(environment);
        let question_recipients = Self::require_recipients(&list.questions, "question", environment)?;
        let answer_recipients = Self::require_recipients(&list.answers, "answer", environment)?;

        Ok(Self {
            provider,
            grade,
            environment,
            question_recipients,
            answer_recipients,
        })
    }

    pub fn is_prod(&self) -> bool {
        self.environment.is_prod()
    }

    /// Test runs mark subjects and log mail bodies
    pub fn is_test(&self) -> bool {
        !self.is_prod()
    }

    fn require_recipients(
        list: &[String],
        kind: &str,
        environment: Environment,
    ) -> Result<Vec<String>, DomainError> {
        let addresses: Vec<String> = list
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        if addresses.is_empty() {
            return Err(DomainError::MissingRecipients {
                kind: kind.to_string(),
                environment: environment.to_string(),
            });
        }
        Ok(addresses)
    }
}
