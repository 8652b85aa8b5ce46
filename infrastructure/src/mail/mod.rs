//! Mailer adapters

mod console;
mod jsonl_outbox;

pub use console::ConsoleMailer;
pub use jsonl_outbox::JsonlOutboxMailer;
