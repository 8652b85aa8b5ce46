//! Console output formatter for previews and configuration display

use colored::Colorize;
use sansu_application::{DeliveryOutcome, Preview};
use sansu_domain::{Environment, Grade, ProviderId, QuestionSet};
use std::fmt::Display;

/// One configuration layer as shown by `show-config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub label: String,
    pub location: String,
    pub found: bool,
}

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Questions then explanation, as printed by `preview`
    pub fn format_preview(preview: &Preview) -> String {
        format!(
            "{}\n{}\n\n{}\n{}\n",
            "=== 問題 ===".cyan().bold(),
            Self::questions_text(&preview.questions),
            "=== 解説 ===".cyan().bold(),
            preview.explanation
        )
    }

    /// Numbered questions, one blank line apart
    pub fn questions_text(questions: &QuestionSet) -> String {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("第{}問\n {}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// One-line summary of a `run`
    pub fn format_outcome(outcome: &DeliveryOutcome) -> String {
        match outcome {
            DeliveryOutcome::Skipped { date } => format!(
                "{} {} is a weekend, nothing was sent",
                "Skipped:".yellow().bold(),
                date
            ),
            DeliveryOutcome::Delivered { questions, .. } => format!(
                "{} {} questions and the explanation were sent",
                "Done:".green().bold(),
                questions.len()
            ),
        }
    }

    /// Available providers, grades, environments and topic lists
    pub fn format_settings() -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== 利用可能な設定 ===".cyan().bold()));
        output.push_str(&format!(
            "APIプロバイダー: {}\n",
            ProviderId::available().join(", ")
        ));
        output.push_str(&format!("学年: {}\n", Grade::available().join(", ")));
        output.push_str(&format!("環境: {}\n", Environment::available().join(", ")));

        output.push_str(&format!("\n{}\n", "=== 文章問題テーマ ===".cyan().bold()));
        for grade in Grade::ALL {
            output.push_str(&format!("{}年生:\n", grade));
            output.push_str(&Self::indent(&grade.topics().join("\n"), "  * "));
            output.push('\n');
        }

        output
    }

    /// Configuration layers in priority order
    pub fn format_sources(sources: &[SourceLine]) -> String {
        let mut output = format!("{}\n", "Configuration sources (in priority order):".bold());
        output.push_str("  [     ] Env:     SANSU_* variables\n");
        for source in sources {
            let marker = if source.found { "FOUND" } else { "     " };
            output.push_str(&format!(
                "  [{}] {:<8} {}\n",
                marker,
                format!("{}:", source.label),
                source.location
            ));
        }
        output.push_str("  [     ] Default: built-in defaults\n");
        output
    }

    /// Validation issues, or a short all-clear line
    pub fn format_issues<I: Display>(issues: &[I]) -> String {
        if issues.is_empty() {
            return format!("{}\n", "Configuration OK".green());
        }
        let mut output = format!("{}\n", "Configuration issues:".yellow().bold());
        for issue in issues {
            output.push_str(&format!("  {}\n", issue));
        }
        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
