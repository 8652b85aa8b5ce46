//! Grade-specific word-problem prompt construction

use super::template::{PromptTemplates, fill_placeholders};
use crate::core::error::DomainError;
use crate::core::grade::Grade;
use crate::core::validation::require_non_empty;
use rand::Rng;
use rand::seq::SliceRandom;

/// A prompt built for a single generation call
///
/// Never reused: every call draws fresh topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    topics: Vec<String>,
}

impl Prompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Topics drawn for this prompt, in placeholder order
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Builds prompts by sampling topics into the grade's template
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    templates: PromptTemplates,
}

impl PromptBuilder {
    pub fn new(templates: PromptTemplates) -> Self {
        Self { templates }
    }

    /// Build a prompt for `grade` using the thread-local RNG
    pub fn create_prompt(&self, grade: &str) -> Result<Prompt, DomainError> {
        self.create_prompt_with_rng(grade, &mut rand::thread_rng())
    }

    /// Build a prompt drawing two topics independently, with replacement
    pub fn create_prompt_with_rng<R: Rng + ?Sized>(
        &self,
        grade: &str,
        rng: &mut R,
    ) -> Result<Prompt, DomainError> {
        require_non_empty(grade, "grade")?;
        let grade: Grade = grade.parse()?;
        let topics = grade.topics();

        let first = Self::draw(topics, rng)?;
        let second = Self::draw(topics, rng)?;

        let text = fill_placeholders(self.templates.for_grade(grade), &[first, second]);
        Ok(Prompt {
            text,
            topics: vec![first.to_string(), second.to_string()],
        })
    }

    /// Template text for a grade
    pub fn template(&self, grade: Grade) -> &str {
        self.templates.for_grade(grade)
    }

    /// Instruction text prefixed to the questions in the explanation call
    pub fn explanation_prompt(&self) -> &str {
        &self.templates.explanation
    }

    /// Copy of the topic list for a grade given as text
    pub fn word_problem_topics(grade: &str) -> Result<Vec<String>, DomainError> {
        require_non_empty(grade, "grade")?;
        let grade: Grade = grade.parse()?;
        Ok(grade.topics().iter().map(|t| t.to_string()).collect())
    }

    fn draw<'a, R: Rng + ?Sized>(
        topics: &'a [&'static str],
        rng: &mut R,
    ) -> Result<&'a str, DomainError> {
        topics
            .choose(rng)
            .copied()
            .ok_or_else(|| DomainError::EmptyList("topics".to_string()))
    }
}
