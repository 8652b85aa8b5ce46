//! Prompt templates and placeholder substitution

use crate::core::grade::Grade;
use crate::core::question::{QUESTION_KEYS, QuestionSet};

/// Token replaced by a randomly drawn topic
pub const WORD_PROBLEM_PLACEHOLDER: &str = "##{WORD_PROBLEM}##";

const FOURTH_GRADE_TEMPLATE: &str = include_str!("../../prompts/grade4.md");
const FIFTH_GRADE_TEMPLATE: &str = include_str!("../../prompts/grade5.md");
const EXPLANATION_TEMPLATE: &str = include_str!("../../prompts/explanation.md");

/// Template texts consumed by the prompt builder
///
/// Built-in defaults ship with the crate; configuration may replace any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub fourth_grade: String,
    pub fifth_grade: String,
    pub explanation: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            fourth_grade: FOURTH_GRADE_TEMPLATE.to_string(),
            fifth_grade: FIFTH_GRADE_TEMPLATE.to_string(),
            explanation: EXPLANATION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn for_grade(&self, grade: Grade) -> &str {
        match grade {
            Grade::Fourth => &self.fourth_grade,
            Grade::Fifth => &self.fifth_grade,
        }
    }
}

/// Replace the N-th placeholder with the N-th topic in one pass.
///
/// Placeholders beyond the number of topics receive the last topic, so the
/// result never contains the placeholder when at least one topic is given.
pub fn fill_placeholders(template: &str, topics: &[&str]) -> String {
    let Some(last) = topics.last() else {
        return template.to_string();
    };

    let mut filled = String::with_capacity(template.len());
    for (i, segment) in template.split(WORD_PROBLEM_PLACEHOLDER).enumerate() {
        if i > 0 {
            filled.push_str(topics.get(i - 1).unwrap_or(last));
        }
        filled.push_str(segment);
    }
    filled
}

/// Count placeholder occurrences in a template
pub fn placeholder_count(template: &str) -> usize {
    template.matches(WORD_PROBLEM_PLACEHOLDER).count()
}

/// Instructions appended for providers without a structured-output mode
pub fn json_answer_instructions() -> String {
    let mut suffix = String::from("\n\n最終的な回答はJSON形式で以下の構造で返してください:\n{\n");
    let last = QUESTION_KEYS.len() - 1;
    for (i, key) in QUESTION_KEYS.iter().enumerate() {
        let comma = if i == last { "" } else { "," };
        suffix.push_str(&format!("  \"{}\": \"問題{}の内容\"{}\n", key, i + 1, comma));
    }
    suffix.push('}');
    suffix
}

/// Explanation instructions followed by the questions, blank-line separated
pub fn explanation_request(instructions: &str, questions: &QuestionSet) -> String {
    format!("{}\n{}", instructions, questions.joined("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_assigns_topics_in_order() {
        let template = "A=##{WORD_PROBLEM}##, B=##{WORD_PROBLEM}##";
        assert_eq!(fill_placeholders(template, &["分数", "角度"]), "A=分数, B=角度");
    }

    #[test]
    fn test_fill_reuses_last_topic_for_extra_placeholders() {
        let template = "##{WORD_PROBLEM}##/##{WORD_PROBLEM}##/##{WORD_PROBLEM}##";
        assert_eq!(fill_placeholders(template, &["x", "y"]), "x/y/y");
    }

    #[test]
    fn test_fill_without_placeholder_is_identity() {
        assert_eq!(fill_placeholders("no tokens here", &["x"]), "no tokens here");
    }

    #[test]
    fn test_fill_without_topics_leaves_template() {
        let template = "keep ##{WORD_PROBLEM}##";
        assert_eq!(fill_placeholders(template, &[]), template);
    }

    #[test]
    fn test_builtin_templates_have_two_placeholders() {
        let templates = PromptTemplates::default();
        assert_eq!(placeholder_count(templates.for_grade(Grade::Fourth)), 2);
        assert_eq!(placeholder_count(templates.for_grade(Grade::Fifth)), 2);
        assert_eq!(placeholder_count(&templates.explanation), 0);
    }

    #[test]
    fn test_json_instructions_list_every_key() {
        let suffix = json_answer_instructions();
        for key in QUESTION_KEYS {
            assert!(suffix.contains(key));
        }
        assert!(suffix.trim_end().ends_with('}'));
        assert!(suffix.contains("\"question_5\": \"問題5の内容\"\n}"));
    }

    #[test]
    fn test_explanation_request_layout() {
        let questions = QuestionSet::new(vec!["q1".to_string(), "q2".to_string()]);
        assert_eq!(explanation_request("# 問題", &questions), "# 問題\nq1\n\nq2");
    }
}
