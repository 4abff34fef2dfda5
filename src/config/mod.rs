//! Configuration management for CloakPrompt.
//!
//! This module provides TOML-based configuration loading, discovery and
//! validation.
//!
//! # Overview
//!
//! CloakPrompt reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLOAKPROMPT_*` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Discovery
//!
//! Without an explicit `--config` path the first existing file wins:
//!
//! 1. `./cloakprompt.toml`
//! 2. `config.toml` in the platform config directory
//!    (e.g. `~/.config/cloakprompt/config.toml` on Linux)
//!
//! When neither exists the built-in defaults are used.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "warn"
//!
//! [cloaking]
//! builtin_patterns = true
//! disabled_patterns = ["email"]
//! pattern_library = "${HOME}/.cloakprompt/patterns.toml"
//!
//! [[cloaking.patterns]]
//! name = "internal-host"
//! regex = '\b[a-z0-9-]+\.corp\.internal\b'
//! priority = 2
//!
//! [cloaking.placeholders]
//! max_attempts = 64
//!
//! [cloaking.audit]
//! enabled = false
//! log_path = "./audit/cloakprompt.log"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cloakprompt::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_config_or_default(None)?;
//! match loaded.path {
//!     Some(path) => println!("Using {}", path.display()),
//!     None => println!("Using built-in defaults"),
//! }
//! println!("Log level: {}", loaded.config.application.log_level);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{
    config_search_paths, default_config_path, find_config_file, load_config,
    load_config_or_default, parse_config, LoadedConfig, CONFIG_FILE_NAME,
};
pub use schema::{ApplicationConfig, CloakConfig, LoggingConfig};
