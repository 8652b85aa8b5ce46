//! Prompt domain
//!
//! Templates and the builder that turns a grade into a word-problem prompt.

mod builder;
mod template;

pub use builder::{Prompt, PromptBuilder};
pub use template::{
    PromptTemplates, WORD_PROBLEM_PLACEHOLDER, explanation_request, fill_placeholders,
    json_answer_instructions, placeholder_count,
};
