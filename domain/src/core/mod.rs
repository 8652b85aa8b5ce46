//! Core domain concepts shared across all subdomains.
//!
//! - [`provider::ProviderId`]: the LLM APIs that can generate questions
//! - [`grade::Grade`]: target grade, selecting topics and prompt template
//! - [`question::QuestionSet`]: the ordered five generated problems
//! - [`error::DomainError`]: domain-level errors

pub mod calendar;
pub mod environment;
pub mod error;
pub mod grade;
pub mod provider;
pub mod question;
pub mod validation;
