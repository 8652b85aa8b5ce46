//! Mailer port
//!
//! Delivery transport for rendered mails. Adapters decide where a mail
//! actually goes (console, outbox file, ...).

use async_trait::async_trait;
use sansu_domain::{EmailContent, join_recipients, require_non_empty, require_non_empty_list};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while sending mail
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Invalid mail: {0}")]
    InvalidMail(#[from] sansu_domain::DomainError),

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Outbox I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A fully rendered mail ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub content: EmailContent,
}

impl OutgoingEmail {
    pub fn new(recipients: Vec<String>, subject: impl Into<String>, content: EmailContent) -> Self {
        Self {
            recipients,
            subject: subject.into(),
            content,
        }
    }

    /// Recipients joined with `,`
    pub fn to_header(&self) -> String {
        join_recipients(&self.recipients)
    }

    /// Reject mails with no recipient, subject or body
    pub fn validate(&self) -> Result<(), MailerError> {
        require_non_empty_list(&self.recipients, "recipients")?;
        require_non_empty(&self.subject, "subject")?;
        require_non_empty(&self.content.text_body, "content.textBody")?;
        require_non_empty(&self.content.html_body, "content.htmlBody")?;
        Ok(())
    }
}

/// Sends rendered mails
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}
