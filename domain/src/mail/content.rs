//! Mail subjects and bodies for question and answer deliveries

use super::html::convert_slashes_to_html_fractions;
use crate::core::calendar::month_day_ja;
use crate::core::error::DomainError;
use crate::core::question::{Explanation, QuestionSet};
use crate::core::validation::{require_non_empty, require_non_empty_list};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT_PREFIX: &str = "今日のパパからの問題";
pub const DEFAULT_TEST_PREFIX: &str = "[TEST]";
pub const ANSWER_SUBJECT_SUFFIX: &str = " 【回答・解説】";

/// Plain-text and HTML renditions of one mail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub text_body: String,
    pub html_body: String,
}

impl EmailContent {
    /// Number each question as `第N問`
    pub fn for_questions(questions: &QuestionSet) -> Result<Self, DomainError> {
        require_non_empty_list(questions.as_slice(), "questions")?;

        let text_body = questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("第{}問\n{}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n\n");

        let html_body = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                format!(
                    "<h3>第{}問</h3><p>{}</p>",
                    i + 1,
                    convert_slashes_to_html_fractions(q)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Self {
            text_body,
            html_body,
        })
    }

    /// The explanation as-is, with fractions rendered in the HTML part
    pub fn for_explanation(explanation: &Explanation) -> Result<Self, DomainError> {
        let text = require_non_empty(explanation.as_str(), "explanation")?;
        Ok(Self {
            text_body: text.to_string(),
            html_body: convert_slashes_to_html_fractions(text),
        })
    }
}

/// Subject line settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSettings {
    pub prefix: String,
    pub test_prefix: String,
}

impl Default for SubjectSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SUBJECT_PREFIX.to_string(),
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
        }
    }
}

impl SubjectSettings {
    /// `{prefix} {M}月{D}日`, with the test marker in front for test runs
    pub fn question_subject(&self, date: NaiveDate, is_test: bool) -> String {
        let base = format!("{} {}", self.prefix, month_day_ja(date));
        self.mark_test(base, is_test)
    }

    pub fn answer_subject(&self, date: NaiveDate, is_test: bool) -> String {
        let base = format!(
            "{} {}{}",
            self.prefix,
            month_day_ja(date),
            ANSWER_SUBJECT_SUFFIX
        );
        self.mark_test(base, is_test)
    }

    fn mark_test(&self, subject: String, is_test: bool) -> String {
        if is_test {
            format!("{}{}", self.test_prefix, subject)
        } else {
            subject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_question_content() {
        let questions = QuestionSet::new(vec!["1/2 は?".to_string(), "b".to_string()]);
        let content = EmailContent::for_questions(&questions).unwrap();
        assert_eq!(content.text_body, "第1問\n1/2 は?\n\n第2問\nb");
        assert_eq!(
            content.html_body,
            "<h3>第1問</h3><p><sup>1</sup>/<sub>2</sub> は?</p>\n<h3>第2問</h3><p>b</p>"
        );
    }

    #[test]
    fn test_question_content_rejects_empty_set() {
        let err = EmailContent::for_questions(&QuestionSet::new(vec![])).unwrap_err();
        assert_eq!(err, DomainError::EmptyList("questions".to_string()));
    }

    #[test]
    fn test_answer_content() {
        let content = EmailContent::for_explanation(&Explanation::new("答えは 3/4 です")).unwrap();
        assert_eq!(content.text_body, "答えは 3/4 です");
        assert_eq!(content.html_body, "答えは <sup>3</sup>/<sub>4</sub> です");

        assert!(EmailContent::for_explanation(&Explanation::new("  ")).is_err());
    }

    #[test]
    fn test_subjects() {
        let settings = SubjectSettings::default();
        assert_eq!(
            settings.question_subject(date(), false),
            "今日のパパからの問題 6月3日"
        );
        assert_eq!(
            settings.answer_subject(date(), false),
            "今日のパパからの問題 6月3日 【回答・解説】"
        );
        assert_eq!(
            settings.question_subject(date(), true),
            "[TEST]今日のパパからの問題 6月3日"
        );
    }
}
