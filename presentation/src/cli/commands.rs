//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for sansu-mail
#[derive(Parser, Debug)]
#[command(name = "sansu-mail")]
#[command(author, version, about = "Daily arithmetic word problems, written by an LLM and mailed")]
#[command(long_about = r#"
sansu-mail asks an LLM (Gemini, OpenAI or Claude) for five arithmetic word
problems for a 4th or 5th grader, mails them, then mails a worked explanation
to the answer recipients. Production runs are skipped on weekends.

Configuration files are loaded from (in priority order):
1. SANSU_* environment variables (e.g. SANSU_DEFAULTS__GRADE=5)
2. --config <path>     Explicit config file
3. ./sansu.toml        Project-level config
4. ~/.config/sansu-mail/config.toml   Global config

Example:
  sansu-mail run --provider claude --grade 5
  sansu-mail run --test --today 2024-06-08
  sansu-mail preview --provider openai
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate the day's problems and mail questions and answers
    Run {
        /// API provider (gemini, openai, claude)
        #[arg(short, long, value_name = "PROVIDER")]
        provider: Option<String>,

        /// School grade (4, 5)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<String>,

        /// Use the DEV recipients and mark subjects with the test prefix
        #[arg(long)]
        test: bool,

        /// Run as if today were this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
    },

    /// Print generated problems and explanation without sending mail
    Preview {
        /// API provider (gemini, openai, claude)
        #[arg(short, long, value_name = "PROVIDER")]
        provider: Option<String>,

        /// School grade (4, 5)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<String>,
    },

    /// Show available providers, grades, topics and configuration sources
    ShowConfig,
}
