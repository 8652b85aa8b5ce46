//! JSONL outbox mailer.
//!
//! Each sent mail is appended to the outbox file as one JSON object per
//! line with a `timestamp`, so an external sender (or a human) can pick
//! them up later.

use async_trait::async_trait;
use sansu_application::{Mailer, MailerError, OutgoingEmail};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Outbox writer, thread-safe via `Mutex<BufWriter<File>>`
pub struct JsonlOutboxMailer {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlOutboxMailer {
    /// Open (or create) the outbox for appending.
    ///
    /// Creates parent directories when they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MailerError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the outbox file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(email: &OutgoingEmail) -> serde_json::Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        serde_json::json!({
            "timestamp": timestamp,
            "to": email.to_header(),
            "subject": email.subject,
            "text_body": email.content.text_body,
            "html_body": email.content.html_body,
        })
    }
}

#[async_trait]
impl Mailer for JsonlOutboxMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        email.validate()?;
        let line = Self::record(email).to_string();

        {
            let mut writer = self
                .writer
                .lock()
                .map_err(|_| MailerError::SendFailed("outbox writer poisoned".to_string()))?;
            writeln!(writer, "{}", line)?;
            writer.flush()?;
        }

        info!(
            "Queued email to {} in {}",
            email.to_header(),
            self.path.display()
        );
        Ok(())
    }
}
