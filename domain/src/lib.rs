//! Domain layer for sansu-mail
//!
//! This crate contains the value objects, prompt templating and response
//! extraction rules. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Providers
//!
//! Three LLM APIs can generate questions: Gemini, OpenAI and Claude.
//! [`ProviderConfig`] is the immutable per-provider table of endpoints,
//! models and sampling parameters.
//!
//! ## Prompts
//!
//! A [`Prompt`] is built once per call by drawing two topics from the
//! grade's list and filling them into the grade's template.
//!
//! ## Extraction
//!
//! Gemini and OpenAI answer with schema-constrained JSON. Claude answers in
//! free text, recovered by a [`RecoveryStrategy`] chain.

pub mod core;
pub mod delivery;
pub mod extraction;
pub mod mail;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use core::{
    calendar::{format_date_time, is_weekend, month_day_ja},
    environment::Environment,
    error::DomainError,
    grade::Grade,
    provider::ProviderId,
    question::{Explanation, QUESTION_COUNT, QUESTION_KEYS, QuestionSet},
    validation::{require_non_empty, require_non_empty_list},
};
pub use delivery::{ExecutionConfig, RecipientList, Recipients, join_recipients};
pub use extraction::{
    ExtractionError, RecoveryStrategy, parse_json, questions_from_json_text,
    questions_from_object, recover_json_object,
};
pub use mail::{EmailContent, SubjectSettings, convert_slashes_to_html_fractions};
pub use prompt::{
    Prompt, PromptBuilder, PromptTemplates, WORD_PROBLEM_PLACEHOLDER, explanation_request,
    fill_placeholders, json_answer_instructions, placeholder_count,
};
pub use providers::{ClaudeSettings, GeminiSettings, OpenAiSettings, ProviderConfig};
