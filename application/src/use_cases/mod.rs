//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod deliver_problems;
pub mod generate_questions;
