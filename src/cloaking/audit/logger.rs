//! Audit logger for redaction and restoration

use crate::cloaking::models::{AcceptedSpan, Redaction, Restoration};
use crate::domain::{CloakError, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log entry for one redaction
#[derive(Debug, Serialize)]
struct RedactionAuditEntry {
    event: &'static str,
    timestamp: String,
    session_id: String,
    redactions_count: usize,
    warnings_count: usize,
    counts_by_pattern: BTreeMap<String, usize>,
    redactions: Vec<AuditRedaction>,
}

/// One replaced span (with hashed value)
#[derive(Debug, Serialize)]
struct AuditRedaction {
    pattern: String,
    start: usize,
    end: usize,
    placeholder: String,
    /// SHA-256 hash of the original value (never log plaintext secrets)
    value_hash: String,
}

/// Audit log entry for one restoration
#[derive(Debug, Serialize)]
struct RestorationAuditEntry {
    event: &'static str,
    timestamp: String,
    restored_count: usize,
    unmapped_tokens: Vec<String>,
}

/// Append-only audit logger
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CloakError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Record a redaction
    pub fn log_redaction(&self, redaction: &Redaction) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = RedactionAuditEntry {
            event: "redaction",
            timestamp: redaction.redacted_at.to_rfc3339(),
            session_id: redaction.session_id.to_string(),
            redactions_count: redaction.total_redactions(),
            warnings_count: redaction.warnings.len(),
            counts_by_pattern: redaction.counts_by_pattern(),
            redactions: redaction.spans.iter().map(audit_redaction).collect(),
        };

        if self.json_format {
            self.write_json(&entry)
        } else {
            let patterns = entry
                .counts_by_pattern
                .iter()
                .map(|(name, count)| format!("{name}={count}"))
                .collect::<Vec<_>>()
                .join(", ");
            self.write_line(&format!(
                "[{}] Redaction: {} | Redactions: {} | Warnings: {} | Patterns: {}",
                entry.timestamp,
                entry.session_id,
                entry.redactions_count,
                entry.warnings_count,
                patterns
            ))
        }
    }

    /// Record a restoration
    pub fn log_restoration(&self, restoration: &Restoration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = RestorationAuditEntry {
            event: "restoration",
            timestamp: Utc::now().to_rfc3339(),
            restored_count: restoration.restored,
            unmapped_tokens: restoration
                .warnings
                .iter()
                .map(|w| w.token.clone())
                .collect(),
        };

        if self.json_format {
            self.write_json(&entry)
        } else {
            self.write_line(&format!(
                "[{}] Restoration | Restored: {} | Unmapped: {}",
                entry.timestamp,
                entry.restored_count,
                entry.unmapped_tokens.len()
            ))
        }
    }

    fn write_json<T: Serialize>(&self, entry: &T) -> Result<()> {
        let json_line = serde_json::to_string(entry)?;
        self.write_line(&json_line)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                CloakError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        writeln!(file, "{line}")?;
        Ok(())
    }
}

fn audit_redaction(span: &AcceptedSpan) -> AuditRedaction {
    AuditRedaction {
        pattern: span.pattern_name.clone(),
        start: span.start,
        end: span.end,
        placeholder: span.placeholder.clone(),
        value_hash: hash_value(&span.matched_text),
    }
}

/// Hash a matched value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
