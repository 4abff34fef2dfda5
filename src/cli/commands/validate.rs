//! Validate config command implementation
//!
//! This module implements the `validate-config` command. Besides the schema
//! checks run on load it compiles every configured pattern.

use crate::cloaking::CloakEngine;
use crate::config::LoadedConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, loaded: Result<LoadedConfig>) -> anyhow::Result<i32> {
        let loaded = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match loaded.path {
            Some(ref path) => println!("🔍 Validating configuration file: {}", path.display()),
            None => println!("🔍 No configuration file found, validating built-in defaults"),
        }
        println!();
        println!("✅ Configuration is valid");

        let config = &loaded.config;
        let engine = match CloakEngine::new(config.cloaking.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Pattern setup failed");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };
        println!("✅ All patterns compiled");

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Built-in Patterns: {}", config.cloaking.builtin_patterns);
        if !config.cloaking.disabled_patterns.is_empty() {
            println!(
                "  Disabled Patterns: {}",
                config.cloaking.disabled_patterns.join(", ")
            );
        }
        if let Some(ref library) = config.cloaking.pattern_library {
            println!("  Pattern Library: {}", library.display());
        }
        println!("  Inline Patterns: {}", config.cloaking.patterns.len());
        println!("  Active Patterns: {}", engine.registry().len());
        println!(
            "  Placeholder Attempts: {}",
            config.cloaking.placeholders.max_attempts
        );
        println!(
            "  Audit Log: {}",
            if config.cloaking.audit.enabled {
                config.cloaking.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}
