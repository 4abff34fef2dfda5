//! Redact command implementation
//!
//! Replaces secrets with placeholders. Cloaked text goes to stdout (or to
//! `<stem>_redacted.<ext>` next to an input file); summaries and reports go to
//! stderr.

use crate::cli::input::{derived_path, write_private, InputArgs};
use crate::cloaking::{CloakEngine, Redaction, RedactionReport};
use crate::config::CloakConfig;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the placeholder mapping as JSON to this path
    #[arg(short, long, value_name = "PATH")]
    pub mapping_out: Option<PathBuf>,

    /// Print a detailed redaction report
    #[arg(short, long)]
    pub details: bool,

    /// Print only the cloaked text
    #[arg(short, long, conflicts_with = "details")]
    pub quiet: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config: &CloakConfig) -> anyhow::Result<i32> {
        let engine = match CloakEngine::new(config.cloaking.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to build redaction engine");
                eprintln!("❌ Failed to load detection patterns");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let text = match self.input.read().await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(1);
            }
        };

        let redaction = match engine.redact(&text) {
            Ok(redaction) => redaction,
            Err(e) => {
                crate::log_error_with_context!(&e, "Redaction failed");
                eprintln!("❌ Redaction failed");
                eprintln!("   Error: {e}");
                return Ok(1);
            }
        };

        if let Some(ref path) = self.mapping_out {
            let json = redaction.mapping.to_json_pretty()?;
            write_private(path, &json)
                .await
                .with_context(|| format!("Failed to write mapping file {}", path.display()))?;
            if !self.quiet {
                eprintln!("🗝️  Mapping written to {}", path.display());
            }
        }

        match self.input.file {
            Some(ref input_path) => {
                let output_path = derived_path(input_path, "_redacted");
                tokio::fs::write(&output_path, &redaction.cloaked_text)
                    .await
                    .with_context(|| {
                        format!("Failed to write redacted file {}", output_path.display())
                    })?;
                if !self.quiet {
                    eprintln!("✅ Redacted text written to {}", output_path.display());
                }
            }
            None => print_text(&redaction.cloaked_text),
        }

        if !self.quiet {
            self.print_summary(&redaction);
        }

        Ok(0)
    }

    fn print_summary(&self, redaction: &Redaction) {
        if self.details {
            eprint!("{}", RedactionReport::from_redaction(redaction).format_console());
            return;
        }

        for warning in &redaction.warnings {
            eprintln!("⚠️  {warning}");
        }

        eprintln!(
            "🔒 Redacted {} secret(s) using {} placeholder(s)",
            redaction.total_redactions(),
            redaction.mapping.len()
        );

        if redaction.has_redactions() && self.mapping_out.is_none() {
            eprintln!("   Use --mapping-out to keep the mapping needed for restore");
        }
    }
}

/// Print text to stdout, ending with exactly one newline
pub(crate) fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
