//! Question extraction
//!
//! Structured (by-name) extraction plus the recovery chain used for
//! providers that answer in free-form text.

mod error;
mod recovery;
mod structured;

pub use error::ExtractionError;
pub use recovery::{RecoveryStrategy, recover_json_object};
pub use structured::{parse_json, questions_from_json_text, questions_from_object};
