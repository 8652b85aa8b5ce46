//! CLI entrypoint for sansu-mail
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sansu_application::{
    DeliverProblemsInput, DeliverProblemsUseCase, Mailer, QuestionGenerationService, SecretStore,
};
use sansu_domain::PromptBuilder;
use sansu_infrastructure::{
    ApiClientFactory, ChainedSecretStore, ConfigLoader, ConsoleMailer, EnvSecretStore, FileConfig,
    JsonlOutboxMailer, ReqwestTransport,
};
use sansu_presentation::{Cli, Command, ConsoleFormatter, SourceLine};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting sansu-mail");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    let issues = config.validate();

    if cli.command == Command::ShowConfig {
        print!("{}", ConsoleFormatter::format_settings());
        println!();
        let sources: Vec<SourceLine> = ConfigLoader::config_sources(cli.config.as_deref())
            .into_iter()
            .map(|s| SourceLine {
                label: s.label.to_string(),
                location: s.location,
                found: s.found,
            })
            .collect();
        print!("{}", ConsoleFormatter::format_sources(&sources));
        println!();
        print!("{}", ConsoleFormatter::format_issues(&issues));
        return Ok(());
    }

    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("invalid configuration: {}", issue.message);
    }

    // === Dependency Injection ===
    let generation = generation_service(&config)?;

    match cli.command {
        Command::Run {
            provider,
            grade,
            test,
            today,
        } => {
            let mailer = mailer(&config)?;
            let use_case = DeliverProblemsUseCase::new(
                generation,
                mailer,
                config.recipients.clone(),
            )
            .with_subjects(config.subject_settings());

            let input = DeliverProblemsInput::new(
                !test,
                provider.unwrap_or_else(|| config.defaults.provider.clone()),
                grade.unwrap_or_else(|| config.defaults.grade.clone()),
                today.unwrap_or_else(|| chrono::Local::now().date_naive()),
            );

            let outcome = use_case.execute(input).await?;
            println!("{}", ConsoleFormatter::format_outcome(&outcome));
        }
        Command::Preview { provider, grade } => {
            let provider = provider.unwrap_or_else(|| config.defaults.provider.clone());
            let grade = grade.unwrap_or_else(|| config.defaults.grade.clone());

            let preview = generation.preview(&provider, &grade).await?;
            print!("{}", ConsoleFormatter::format_preview(&preview));
        }
        Command::ShowConfig => {}
    }

    Ok(())
}

fn generation_service(config: &FileConfig) -> Result<QuestionGenerationService> {
    // Keys written in the config file win over the environment
    let inline: Arc<dyn SecretStore> = Arc::new(config.inline_secrets());
    let env: Arc<dyn SecretStore> = Arc::new(EnvSecretStore);
    let secrets: Arc<dyn SecretStore> = Arc::new(ChainedSecretStore::new(vec![inline, env]));
    let transport = Arc::new(ReqwestTransport::new().context("Failed to build HTTP client")?);
    let clients = Arc::new(ApiClientFactory::new(
        Arc::new(config.provider_config()),
        secrets,
        transport,
    ));

    let templates = config.prompts.load_templates()?;
    Ok(QuestionGenerationService::new(
        clients,
        PromptBuilder::new(templates),
    ))
}

fn mailer(config: &FileConfig) -> Result<Arc<dyn Mailer>> {
    let mailer: Arc<dyn Mailer> = match &config.email.outbox {
        Some(path) => {
            info!(path = %path.display(), "Writing mail to outbox");
            Arc::new(JsonlOutboxMailer::open(path)?)
        }
        None => Arc::new(ConsoleMailer::new()),
    };
    Ok(mailer)
}
