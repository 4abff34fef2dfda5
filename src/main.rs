// CloakPrompt - Reversible secret redaction for LLM prompts
// Copyright (c) 2025 CloakPrompt Contributors
// Licensed under the MIT License

use cloakprompt::cli::{Cli, Commands};
use cloakprompt::config::{load_config_or_default, LoadedConfig, LoggingConfig};
use cloakprompt::domain::{CloakError, Result};
use cloakprompt::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config errors are reported by the command; logging falls back to defaults
    let loaded = load_config_or_default(cli.config.as_deref());

    let (log_level, logging_config) = match loaded {
        Ok(ref loaded) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| loaded.config.application.log_level.clone()),
            loaded.config.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "warn".to_string()),
            LoggingConfig::default(),
        ),
    };

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "CloakPrompt starting");

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // process::exit skips destructors; flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, loaded: Result<LoadedConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Init(args) => args.execute().await,
        Commands::ConfigPath(args) => args.execute(cli.config.as_deref()).await,
        Commands::ValidateConfig(args) => args.execute(loaded).await,
        Commands::Redact(args) => match loaded {
            Ok(loaded) => args.execute(&loaded.config).await,
            Err(e) => Ok(config_error(&e)),
        },
        Commands::Restore(args) => match loaded {
            Ok(loaded) => args.execute(&loaded.config).await,
            Err(e) => Ok(config_error(&e)),
        },
        Commands::Patterns(args) => match loaded {
            Ok(loaded) => args.execute(&loaded.config).await,
            Err(e) => Ok(config_error(&e)),
        },
    }
}

fn config_error(error: &CloakError) -> i32 {
    cloakprompt::log_error_with_context!(error, "Failed to load configuration");
    eprintln!("❌ {error}");
    2
}
