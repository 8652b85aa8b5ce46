//! Best-effort JSON recovery from free-form model text.
//!
//! Used only for providers without a structured-output mode. The strategies
//! run in order and the first one whose candidate parses as a JSON object wins:
//!
//! 1. [`RecoveryStrategy::FencedJson`]: the inside of a ` ```json ` block
//! 2. [`RecoveryStrategy::BalancedObject`]: the first brace-balanced `{...}`
//! 3. [`RecoveryStrategy::BraceSpan`]: first `{` through last `}`

use serde_json::Value;
use std::sync::LazyLock;

static FENCED_JSON: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fenced json pattern is valid")
});

/// A single way of locating a JSON object inside model output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    FencedJson,
    BalancedObject,
    BraceSpan,
}

impl RecoveryStrategy {
    /// Strategies in the order they are attempted
    pub const CHAIN: [RecoveryStrategy; 3] = [
        RecoveryStrategy::FencedJson,
        RecoveryStrategy::BalancedObject,
        RecoveryStrategy::BraceSpan,
    ];

    /// Candidate substring this strategy would try to parse
    pub fn candidate<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            RecoveryStrategy::FencedJson => FENCED_JSON
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            RecoveryStrategy::BalancedObject => balanced_object(text),
            RecoveryStrategy::BraceSpan => {
                let start = text.find('{')?;
                let end = text.rfind('}')?;
                (start < end).then(|| &text[start..=end])
            }
        }
    }
}

/// Run the strategy chain and return the first parseable JSON object.
pub fn recover_json_object(text: &str) -> Option<(RecoveryStrategy, Value)> {
    RecoveryStrategy::CHAIN.iter().find_map(|strategy| {
        let candidate = strategy.candidate(text)?;
        match serde_json::from_str::<Value>(candidate) {
            Ok(value @ Value::Object(_)) => Some((*strategy, value)),
            _ => None,
        }
    })
}

/// First `{` up to its matching `}`, honouring JSON string escapes.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
