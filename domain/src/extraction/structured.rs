//! Question extraction from structured JSON payloads.
//!
//! Questions are read by name (`question_1` .. `question_5`) rather than
//! by object iteration order, so a reordered or incomplete payload fails
//! loudly instead of silently shuffling problems.

use super::error::ExtractionError;
use crate::core::question::{QUESTION_KEYS, QuestionSet};
use serde_json::Value;

/// Parse a response body (or nested JSON string) into a JSON value.
pub fn parse_json(text: &str) -> Result<Value, ExtractionError> {
    Ok(serde_json::from_str(text)?)
}

/// Read `question_1` .. `question_5` from a JSON object.
///
/// Extra keys are ignored. A missing or non-string entry is an error.
pub fn questions_from_object(value: &Value) -> Result<QuestionSet, ExtractionError> {
    let questions = QUESTION_KEYS
        .iter()
        .map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| ExtractionError::MissingQuestion {
                    key: key.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions))
}

/// Parse a JSON string holding the question object and extract it.
pub fn questions_from_json_text(text: &str) -> Result<QuestionSet, ExtractionError> {
    questions_from_object(&parse_json(text)?)
}
