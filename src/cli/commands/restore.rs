//! Restore command implementation

use super::redact::print_text;
use crate::cli::input::InputArgs;
use crate::cloaking::{CloakEngine, Mapping};
use crate::config::CloakConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Mapping file written by `redact --mapping-out`
    #[arg(short, long, value_name = "PATH")]
    pub mapping: PathBuf,

    /// Exit with an error when a placeholder has no mapping entry
    #[arg(long)]
    pub strict: bool,
}

impl RestoreArgs {
    /// Execute the restore command
    pub async fn execute(&self, config: &CloakConfig) -> anyhow::Result<i32> {
        let mapping = match self.load_mapping().await {
            Ok(mapping) => mapping,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(1);
            }
        };

        let text = match self.input.read().await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(1);
            }
        };

        let engine = match CloakEngine::new(config.cloaking.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to build redaction engine");
                eprintln!("❌ Failed to initialize: {e}");
                return Ok(2);
            }
        };

        let restoration = engine.restore(&text, &mapping)?;
        print_text(&restoration.text);

        for warning in &restoration.warnings {
            eprintln!("⚠️  {warning}");
        }

        if self.strict && !restoration.is_complete() {
            eprintln!(
                "❌ {} placeholder(s) could not be restored",
                restoration.warnings.len()
            );
            return Ok(1);
        }

        Ok(0)
    }

    async fn load_mapping(&self) -> anyhow::Result<Mapping> {
        let json = tokio::fs::read_to_string(&self.mapping)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to read mapping file {}: {e}",
                    self.mapping.display()
                )
            })?;
        Ok(Mapping::from_json(&json)?)
    }
}
