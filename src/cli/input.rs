//! Input selection and output helpers shared by `redact` and `restore`

use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Exactly one input source
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// File to process
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read text from standard input
    #[arg(long)]
    pub stdin: bool,
}

impl InputArgs {
    /// Read the selected input
    pub async fn read(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }

        if let Some(ref path) = self.file {
            return tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()));
        }

        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read standard input")?;
        Ok(buffer)
    }
}

/// Sibling path with `suffix` appended to the file stem
///
/// `notes/prompt.txt` with `_redacted` becomes `notes/prompt_redacted.txt`.
pub fn derived_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };

    path.with_file_name(file_name)
}

/// Write a file readable only by the owner
///
/// Used for mapping files, which hold the original secrets in plain text.
pub async fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await
}
