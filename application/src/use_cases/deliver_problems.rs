//! Deliver Problems use case.
//!
//! The daily run: generate questions, mail them, generate the explanation,
//! mail it to the answer recipients. Production runs skip weekends.

use crate::ports::api_client::ApiClientError;
use crate::ports::mailer::{Mailer, MailerError, OutgoingEmail};
use crate::use_cases::generate_questions::QuestionGenerationService;
use chrono::NaiveDate;
use sansu_domain::{
    DomainError, EmailContent, ExecutionConfig, Explanation, QuestionSet, Recipients,
    SubjectSettings, is_weekend,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during a delivery run
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error(transparent)]
    Config(#[from] DomainError),

    #[error(transparent)]
    Generation(#[from] ApiClientError),

    #[error("Failed to send {kind} email: {error}")]
    Mail {
        kind: &'static str,
        error: MailerError,
    },
}

/// Input for [`DeliverProblemsUseCase::execute`]
#[derive(Debug, Clone)]
pub struct DeliverProblemsInput {
    pub is_prod: bool,
    pub provider: String,
    pub grade: String,
    /// Local date of the run; drives the weekend skip and subject lines
    pub today: NaiveDate,
}

impl DeliverProblemsInput {
    pub fn new(
        is_prod: bool,
        provider: impl Into<String>,
        grade: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            is_prod,
            provider: provider.into(),
            grade: grade.into(),
            today,
        }
    }
}

/// Result of a delivery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Production run on a Saturday or Sunday
    Skipped { date: NaiveDate },
    Delivered {
        questions: QuestionSet,
        explanation: Explanation,
    },
}

/// Use case for the scheduled question/answer delivery
pub struct DeliverProblemsUseCase {
    generation: QuestionGenerationService,
    mailer: Arc<dyn Mailer>,
    recipients: Recipients,
    subjects: SubjectSettings,
}

impl DeliverProblemsUseCase {
    pub fn new(
        generation: QuestionGenerationService,
        mailer: Arc<dyn Mailer>,
        recipients: Recipients,
    ) -> Self {
        Self {
            generation,
            mailer,
            recipients,
            subjects: SubjectSettings::default(),
        }
    }

    pub fn with_subjects(mut self, subjects: SubjectSettings) -> Self {
        self.subjects = subjects;
        self
    }

    /// Run the full pipeline; any failure aborts the remaining steps
    pub async fn execute(
        &self,
        input: DeliverProblemsInput,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        let result = self.run(&input).await;
        if let Err(e) = &result {
            error!("Error in math problem service execution: {}", e);
        }
        result
    }

    async fn run(&self, input: &DeliverProblemsInput) -> Result<DeliveryOutcome, DeliveryError> {
        let config = ExecutionConfig::new(
            input.is_prod,
            &input.provider,
            &input.grade,
            &self.recipients,
        )?;

        info!(
            provider = %config.provider,
            grade = %config.grade,
            environment = %config.environment,
            "Starting math problem generation"
        );

        if config.is_prod() && is_weekend(input.today) {
            info!("Today is a weekend. The process will be skipped.");
            return Ok(DeliveryOutcome::Skipped { date: input.today });
        }

        info!("Generating questions...");
        let questions = self
            .generation
            .generate_questions(config.provider.as_str(), config.grade.as_str())
            .await?;

        info!("Sending question email...");
        let email = OutgoingEmail::new(
            config.question_recipients.clone(),
            self.subjects.question_subject(input.today, config.is_test()),
            EmailContent::for_questions(&questions)?,
        );
        self.send("question", &email, config.is_test()).await?;

        info!("Generating explanation...");
        let explanation = self.generation.generate_explanation(&questions).await?;

        info!("Sending answer email...");
        let email = OutgoingEmail::new(
            config.answer_recipients.clone(),
            self.subjects.answer_subject(input.today, config.is_test()),
            EmailContent::for_explanation(&explanation)?,
        );
        self.send("answer", &email, config.is_test()).await?;

        info!("Math problem generation and email sending completed successfully!");
        Ok(DeliveryOutcome::Delivered {
            questions,
            explanation,
        })
    }

    async fn send(
        &self,
        kind: &'static str,
        email: &OutgoingEmail,
        is_test: bool,
    ) -> Result<(), DeliveryError> {
        self.mailer
            .send(email)
            .await
            .map_err(|error| DeliveryError::Mail { kind, error })?;

        if is_test {
            debug!(
                text_body = %email.content.text_body,
                html_body = %email.content.html_body,
                "Sent {} email content",
                kind
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::generate_questions::tests::{five_questions, stub_provider};
    use async_trait::async_trait;
    use sansu_domain::{PromptBuilder, ProviderId, RecipientList};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
            if self.fail {
                return Err(MailerError::SendFailed("smtp down".to_string()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn recipients() -> Recipients {
        Recipients {
            dev: RecipientList::new(vec!["dev@example.com".into()], vec!["dev@example.com".into()]),
            prod: RecipientList::new(
                vec!["kid@example.com".into()],
                vec!["parent@example.com".into(), "kid@example.com".into()],
            ),
        }
    }

    fn use_case(mailer: Arc<RecordingMailer>) -> DeliverProblemsUseCase {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("答えは 1/2")));
        let generation = QuestionGenerationService::new(provider, PromptBuilder::default());
        DeliverProblemsUseCase::new(generation, mailer, recipients())
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()
    }

    #[tokio::test]
    async fn test_prod_run_sends_both_mails() {
        let mailer = Arc::new(RecordingMailer::default());
        let outcome = use_case(mailer.clone())
            .execute(DeliverProblemsInput::new(true, "gemini", "4", monday()))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DeliveryOutcome::Delivered {
                questions: five_questions(),
                explanation: Explanation::new("答えは 1/2"),
            }
        );

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipients, ["kid@example.com"]);
        assert_eq!(sent[0].subject, "今日のパパからの問題 6月3日");
        assert!(sent[0].content.text_body.starts_with("第1問\na"));
        assert_eq!(sent[1].to_header(), "parent@example.com,kid@example.com");
        assert_eq!(sent[1].subject, "今日のパパからの問題 6月3日 【回答・解説】");
        assert_eq!(sent[1].content.html_body, "答えは <sup>1</sup>/<sub>2</sub>");
    }

    #[tokio::test]
    async fn test_prod_run_skips_weekend() {
        let mailer = Arc::new(RecordingMailer::default());
        let outcome = use_case(mailer.clone())
            .execute(DeliverProblemsInput::new(true, "gemini", "4", saturday()))
            .await
            .unwrap();

        assert_eq!(outcome, DeliveryOutcome::Skipped { date: saturday() });
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dev_run_ignores_weekend_and_marks_subject() {
        let mailer = Arc::new(RecordingMailer::default());
        let outcome = use_case(mailer.clone())
            .execute(DeliverProblemsInput::new(false, "gemini", "5", saturday()))
            .await
            .unwrap();

        assert!(matches!(outcome, DeliveryOutcome::Delivered { .. }));
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].recipients, ["dev@example.com"]);
        assert_eq!(sent[0].subject, "[TEST]今日のパパからの問題 6月8日");
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_generation() {
        let mailer = Arc::new(RecordingMailer::default());
        let err = use_case(mailer.clone())
            .execute(DeliverProblemsInput::new(true, "bard", "4", monday()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::Config(DomainError::UnsupportedProvider(_))
        ));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mail_failure_aborts_run() {
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..Default::default()
        });
        let err = use_case(mailer)
            .execute(DeliverProblemsInput::new(true, "gemini", "4", monday()))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to send question email: Failed to send email: smtp down"
        );
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let provider = stub_provider(
            Err(ApiClientError::invalid_format(ProviderId::Gemini)),
            Ok(Explanation::new("x")),
        );
        let generation = QuestionGenerationService::new(provider, PromptBuilder::default());
        let mailer = Arc::new(RecordingMailer::default());
        let use_case = DeliverProblemsUseCase::new(generation, mailer.clone(), recipients());

        let err = use_case
            .execute(DeliverProblemsInput::new(true, "gemini", "4", monday()))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Generation(_)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
