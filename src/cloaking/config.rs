//! Cloaking configuration

use crate::cloaking::allocator::DEFAULT_MAX_ATTEMPTS;
use crate::cloaking::detector::patterns::PatternDefinition;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `placeholders.max_attempts`
pub const MAX_ATTEMPTS_LIMIT: usize = 10_000;

/// Detection and placeholder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloakingConfig {
    /// Register the built-in pattern library
    #[serde(default = "default_true")]
    pub builtin_patterns: bool,

    /// Built-in patterns to leave out, by name
    #[serde(default)]
    pub disabled_patterns: Vec<String>,

    /// Path to an additional pattern library TOML file
    pub pattern_library: Option<PathBuf>,

    /// Patterns defined inline, registered after the pattern library
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,

    /// Placeholder allocation settings
    #[serde(default)]
    pub placeholders: PlaceholderConfig,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Default for CloakingConfig {
    fn default() -> Self {
        Self {
            builtin_patterns: true,
            disabled_patterns: Vec::new(),
            pattern_library: None,
            patterns: Vec::new(),
            placeholders: PlaceholderConfig::default(),
            audit: AuditConfig::default(),
        }
    }
}

impl CloakingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }

        if !self.builtin_patterns && self.pattern_library.is_none() && self.patterns.is_empty() {
            return Err(
                "No patterns enabled: set builtin_patterns = true, provide pattern_library or define patterns"
                    .to_string(),
            );
        }

        for definition in &self.patterns {
            definition.compile().map_err(|e| e.to_string())?;
        }

        if self.disabled_patterns.iter().any(|name| name.trim().is_empty()) {
            return Err("disabled_patterns must not contain empty names".to_string());
        }

        self.placeholders.validate()?;
        self.audit.validate()?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CLOAKPROMPT_BUILTIN_PATTERNS") {
            self.builtin_patterns = val
                .parse()
                .context("Invalid CLOAKPROMPT_BUILTIN_PATTERNS value")?;
        }

        if let Ok(val) = std::env::var("CLOAKPROMPT_DISABLED_PATTERNS") {
            self.disabled_patterns = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Ok(val) = std::env::var("CLOAKPROMPT_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("CLOAKPROMPT_MAX_ATTEMPTS") {
            self.placeholders.max_attempts = val
                .parse()
                .context("Invalid CLOAKPROMPT_MAX_ATTEMPTS value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Placeholder allocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    /// Tokens tried per span before the redaction fails
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl PlaceholderConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(format!(
                "placeholders.max_attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}"
            ));
        }
        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CLOAKPROMPT_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid CLOAKPROMPT_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("CLOAKPROMPT_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("CLOAKPROMPT_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid CLOAKPROMPT_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/cloakprompt.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CloakingConfig::default();
        assert!(config.builtin_patterns);
        assert!(config.disabled_patterns.is_empty());
        assert_eq!(config.placeholders.max_attempts, 64);
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_pattern_library() {
        let config = CloakingConfig {
            pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("not found"));
    }

    #[test]
    fn test_no_pattern_source() {
        let config = CloakingConfig {
            builtin_patterns: false,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inline_patterns() {
        let config: CloakingConfig = toml::from_str(
            r#"
            builtin_patterns = false

            [[patterns]]
            name = "example-domain"
            placeholder = "EXAMPLE_DOMAIN"
            regex = 'example\.com'
            "#,
        )
        .unwrap();

        assert_eq!(config.patterns.len(), 1);
        assert!(config.validate().is_ok());

        let broken = CloakingConfig {
            patterns: vec![PatternDefinition {
                regex: "(".to_string(),
                ..config.patterns[0].clone()
            }],
            ..config
        };
        assert!(broken.validate().unwrap_err().contains("example-domain"));
    }

    #[test]
    fn test_max_attempts_bounds() {
        let mut config = CloakingConfig::default();
        config.placeholders.max_attempts = 0;
        assert!(config.validate().is_err());
        config.placeholders.max_attempts = MAX_ATTEMPTS_LIMIT + 1;
        assert!(config.validate().is_err());
        config.placeholders.max_attempts = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CloakingConfig = toml::from_str(
            r#"
            disabled_patterns = ["email"]

            [placeholders]
            max_attempts = 8
            "#,
        )
        .unwrap();

        assert!(config.builtin_patterns);
        assert_eq!(config.disabled_patterns, vec!["email"]);
        assert_eq!(config.placeholders.max_attempts, 8);
        assert_eq!(config.audit, AuditConfig::default());
    }
}
