//! JSON schema for the five-question answer object

use sansu_domain::QUESTION_KEYS;
use serde_json::{Map, Value, json};

/// `{question_1: string, ..., question_5: string}`
///
/// `strict` adds the `required` list and forbids extra properties,
/// as OpenAI's strict json_schema mode demands.
pub fn question_schema(strict: bool) -> Value {
    let properties: Map<String, Value> = QUESTION_KEYS
        .iter()
        .map(|key| (key.to_string(), json!({ "type": "string" })))
        .collect();

    let mut schema = json!({
        "type": "object",
        "properties": properties,
    });
    if strict {
        schema["required"] = json!(QUESTION_KEYS);
        schema["additionalProperties"] = json!(false);
    }
    schema
}
