//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use crate::config::{default_config_path, CONFIG_FILE_NAME};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let output = self.output_path();
        tracing::info!(output = %output.display(), "Initializing configuration file");

        println!("📝 Initializing CloakPrompt configuration");
        println!();

        if output.exists() && !self.force {
            println!("❌ Configuration file already exists: {}", output.display());
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                println!("❌ Failed to create directory {}", parent.display());
                println!("   Error: {e}");
                return Ok(5);
            }
        }

        match fs::write(&output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", output.display());
                println!();
                println!("Next steps:");
                println!("  1. Add your own patterns under [[cloaking.patterns]]");
                println!("  2. Validate configuration: cloakprompt validate-config");
                println!("  3. Redact a prompt: cloakprompt redact --file prompt.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .or_else(default_config_path)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Starter configuration with a custom pattern example
    pub fn generate_config() -> String {
        r#"# CloakPrompt Configuration File
#
# Values may reference environment variables as ${VAR_NAME}.
# Every setting can also be overridden with CLOAKPROMPT_* variables.

[application]
log_level = "warn"  # trace | debug | info | warn | error

[cloaking]
# Built-in detectors (run `cloakprompt patterns` to list them)
builtin_patterns = true
disabled_patterns = []

# Additional pattern library file with [[patterns]] entries
# pattern_library = "/path/to/patterns.toml"

# Custom patterns. The regex runs against the whole text; when it has a
# group named `secret` only that group is replaced.
[[cloaking.patterns]]
name = "example-domain"
description = "Your custom patterns"
category = "Custom"
placeholder = "EXAMPLE_DOMAIN"
regex = 'example\.com'
priority = 0

[cloaking.placeholders]
# Placeholders tried per secret before the redaction fails
max_attempts = 64

[cloaking.audit]
enabled = false
log_path = "./audit/cloakprompt.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }
}
