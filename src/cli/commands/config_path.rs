//! Config-path command implementation

use crate::config::{config_search_paths, default_config_path, find_config_file};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the config-path command
#[derive(Args, Debug)]
pub struct ConfigPathArgs {}

impl ConfigPathArgs {
    /// Execute the config-path command
    pub async fn execute(&self, explicit: Option<&Path>) -> anyhow::Result<i32> {
        print!("{}", format_search_order(explicit));
        Ok(0)
    }
}

fn format_search_order(explicit: Option<&Path>) -> String {
    let mut output = String::from("📂 Configuration search order\n");

    let active: Option<PathBuf> = match explicit {
        Some(path) => path.is_file().then(|| path.to_path_buf()),
        None => find_config_file(),
    };

    let mut candidates: Vec<(String, PathBuf)> = Vec::new();
    if let Some(path) = explicit {
        candidates.push(("--config".to_string(), path.to_path_buf()));
    }
    for path in config_search_paths() {
        candidates.push(("search".to_string(), path));
    }

    for (index, (source, path)) in candidates.iter().enumerate() {
        let status = if active.as_deref() == Some(path.as_path()) {
            "✅ active"
        } else if path.is_file() {
            "found"
        } else {
            "not found"
        };
        output.push_str(&format!(
            "  {}. {:8} {}  ({status})\n",
            index + 1,
            source,
            path.display()
        ));
    }

    if active.is_none() {
        if explicit.is_some() {
            output.push_str("\n❌ The file given with --config does not exist\n");
        } else {
            output.push_str("\nℹ️  No configuration file found, built-in defaults are used\n");
        }
    }

    if let Some(user_path) = default_config_path() {
        output.push_str(&format!(
            "\nRun `cloakprompt init` to create {}\n",
            user_path.display()
        ));
    }

    output
}
