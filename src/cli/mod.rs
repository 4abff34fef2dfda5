//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for CloakPrompt using clap.

pub mod commands;
pub mod input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CloakPrompt - redact secrets from text before it reaches an LLM
#[derive(Parser, Debug)]
#[command(name = "cloakprompt")]
#[command(version, about, long_about = None)]
#[command(author = "CloakPrompt Contributors")]
pub struct Cli {
    /// Path to configuration file (searched for when omitted)
    #[arg(short, long, env = "CLOAKPROMPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLOAKPROMPT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace secrets in text with placeholders
    Redact(commands::redact::RedactArgs),

    /// Put original values back into text containing placeholders
    Restore(commands::restore::RestoreArgs),

    /// List the available detection patterns
    Patterns(commands::patterns::PatternsArgs),

    /// Show where configuration files are looked up
    ConfigPath(commands::config_path::ConfigPathArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file and pattern library
    ValidateConfig(commands::validate::ValidateArgs),
}
