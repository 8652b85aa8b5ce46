//! Mailer that prints mails to stdout

use async_trait::async_trait;
use sansu_application::{Mailer, MailerError, OutgoingEmail};
use tracing::info;

/// Prints each mail instead of delivering it
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }

    /// Text rendition of a mail as printed
    pub fn render(email: &OutgoingEmail) -> String {
        format!(
            "To: {}\nSubject: {}\n\n{}\n",
            email.to_header(),
            email.subject,
            email.content.text_body
        )
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        email.validate()?;
        info!("Sending email to: {}", email.to_header());
        info!("Subject: {}", email.subject);

        println!("{}", Self::render(email));

        info!("Email sent successfully!");
        Ok(())
    }
}
