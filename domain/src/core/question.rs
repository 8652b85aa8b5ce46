//! Question set and explanation value objects

use serde::{Deserialize, Serialize};

/// Number of questions every generation call produces
pub const QUESTION_COUNT: usize = 5;

/// Keys the structured response carries, in presentation order
pub const QUESTION_KEYS: [&str; QUESTION_COUNT] = [
    "question_1",
    "question_2",
    "question_3",
    "question_4",
    "question_5",
];

/// An ordered set of generated word problems (Value Object)
///
/// Order matters downstream: the N-th entry is rendered as problem N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<String>,
}

impl QuestionSet {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions separated by a blank line, as sent to the explanation model
    pub fn joined(&self, separator: &str) -> String {
        self.questions.join(separator)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.questions
    }
}

impl From<Vec<String>> for QuestionSet {
    fn from(questions: Vec<String>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Free-text (HTML-bearing) answer explanation for a question set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Explanation(String);

impl Explanation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
