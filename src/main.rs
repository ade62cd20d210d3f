mod cli;
mod config;
mod document;
mod error;
mod prompt;
mod review;
mod server;
mod session;
mod tokens;
mod types;

#[cfg(test)]
mod testing;

use clap::Parser;
use cli::{Cli, Commands, InitArgs, ModelArgs};
use config::Config;
use review::Reviewer;
use review::orchestrator::EXIT_FAILURE;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}", cli.log_level, e);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Init(args) => init(&args),
        Commands::Serve(args) => {
            let (mut config, reviewer) = setup(&args.model);
            if let Some(bind) = args.bind {
                config.server.bind = bind;
            }
            if let Err(e) = server::serve(&config.server, reviewer).await {
                error!("Server failed: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Review(args) => {
            let (_, reviewer) = setup(&args.model);
            let code =
                review::orchestrator::review_and_report(&reviewer, &args.file, args.output.as_deref())
                    .await;
            std::process::exit(code);
        }
        Commands::Preview(args) => match document::read_document(&args.file) {
            Ok(text) => {
                info!(
                    "Extracted {} characters ({} tokens)",
                    text.chars().count(),
                    tokens::count_tokens(&text)
                );
                println!("{}", text);
            }
            Err(e) => {
                error!("Could not extract text: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
        Commands::Schema => {
            let schema = schemars::schema_for!(types::ReviewResult);
            match serde_json::to_string_pretty(&schema) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to render schema: {}", e);
                    std::process::exit(EXIT_FAILURE);
                }
            }
        }
    }
}

/// Check the credential, load config and build the reviewer, exiting on failure
fn setup(args: &ModelArgs) -> (Config, Reviewer) {
    let api_key = error::require_api_key(args.api_key.as_deref()).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(EXIT_FAILURE);
    });

    let config = Config::load(&args.config, &args.config_overrides).unwrap_or_else(|e| {
        error!("Failed to load config: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    });
    info!("Model: {} ({})", config.llm.model, config.llm.base_url);

    let reviewer = Reviewer::from_config(&api_key, &config).unwrap_or_else(|e| {
        error!("Failed to create reviewer: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    });
    (config, reviewer)
}

fn init(args: &InitArgs) {
    if std::path::Path::new(&args.config).exists() && !args.r#override {
        error!(
            "{} already exists, use --override to replace it",
            args.config
        );
        std::process::exit(EXIT_FAILURE);
    }

    let content = Config::default_toml().unwrap_or_else(|e| {
        error!("Failed to render config: {}", e);
        std::process::exit(EXIT_FAILURE);
    });
    if let Err(e) = std::fs::write(&args.config, content) {
        error!("Failed to write {}: {}", args.config, e);
        std::process::exit(EXIT_FAILURE);
    }
    info!("Wrote {}", args.config);
}
