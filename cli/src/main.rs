//! CLI entrypoint for fundcraft
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Cli;
use fundcraft_application::{
    GenerateCampaignInput, GenerateCampaignOutcome, GenerateCampaignUseCase, GenerationParams,
    ListModelsUseCase,
};
use fundcraft_domain::{CampaignRequest, Model};
use fundcraft_infrastructure::{
    ConfigLoader, FileConfig, FileOutputSink, Provider, create_gateway, resolve_credential,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; logs go to stderr so
    // stdout carries only the prompt or the generated copy
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // A user interrupt during the network wait aborts promptly with a
    // distinct exit code; classified failures exit 1 after one line on
    // stderr. Never exit 0 after a failure.
    let code = tokio::select! {
        result = run(cli) => match result {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("operation cancelled by user");
            130
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    config.validate()?;

    let provider: Provider = match cli.provider.as_deref().or(config.provider.as_deref()) {
        Some(name) => name.parse().map_err(anyhow::Error::msg)?,
        None => Provider::default(),
    };
    info!(%provider, "provider selected");

    let secret_file = config.credentials.secret_file.as_deref().map(Path::new);
    let credential = resolve_credential(provider.credential_variable(), secret_file);
    let gateway = create_gateway(provider, credential);

    if cli.list_models {
        let models = ListModelsUseCase::new(gateway).execute().await?;
        println!("Available models:");
        for model in models {
            let context = model
                .context_length
                .map(|n| n.to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            println!("- {} (Context length: {})", model.id, context);
        }
        return Ok(());
    }

    let request = campaign_request(&cli, &config);
    let params = GenerationParams::default()
        .with_model(config.generation.model.clone())
        .with_temperature(config.generation.temperature)
        .with_timeout(Duration::from_secs(config.generation.timeout_seconds));
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.path));

    let use_case = GenerateCampaignUseCase::new(gateway, Arc::new(FileOutputSink));
    let outcome = use_case
        .execute(GenerateCampaignInput {
            request,
            params,
            output_path,
            dry_run: cli.dry_run,
        })
        .await?;

    match outcome {
        GenerateCampaignOutcome::DryRun { prompt } => {
            println!("Prompt that would be sent:");
            println!("{prompt}");
        }
        GenerateCampaignOutcome::Generated { text, path } => {
            println!("Output saved to {}", path.display());
            println!();
            println!("{text}");
        }
    }

    Ok(())
}

/// Load the config file stack, with CLI flags merged on top.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if let Some(event) = &cli.event {
        config.campaign.event = event.clone();
    }
    if let Some(date) = &cli.date {
        config.campaign.date = date.clone();
    }
    if let Some(tone) = &cli.tone {
        config.campaign.tone = tone.clone();
    }
    if let Some(model) = &cli.model {
        config.generation.model = Model::new(model);
    }
    if let Some(temperature) = cli.temperature {
        config.generation.temperature = temperature;
    }
    if let Some(timeout) = cli.timeout {
        config.generation.timeout_seconds = timeout;
    }

    Ok(config)
}

/// Assemble the campaign request from flags and config defaults.
fn campaign_request(cli: &Cli, config: &FileConfig) -> CampaignRequest {
    let mut request = CampaignRequest::default()
        .with_event(&config.campaign.event)
        .with_date(&config.campaign.date)
        .with_tone(&config.campaign.tone)
        .with_additional_context(cli.additional_context.clone().unwrap_or_default())
        .with_counts(
            cli.email_count.unwrap_or(5),
            cli.social_count.unwrap_or(4),
        );
    request.emails_only = cli.emails_only;
    request.social_only = cli.social_only;
    if let Some(prompt) = &cli.custom_prompt {
        request = request.with_custom_prompt(prompt);
    }
    request
}
