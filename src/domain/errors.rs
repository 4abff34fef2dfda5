//! Domain error types
//!
//! This module defines the error hierarchy for CloakPrompt. Fatal conditions are
//! [`CloakError`] variants; conditions that must not abort an operation are
//! modelled as warnings ([`PatternExecutionWarning`], [`UnmappedTokenWarning`])
//! and attached to the operation's result instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main CloakPrompt error type
///
/// Every fallible operation in the crate returns this type. Errors fail only the
/// operation they occur in; previously produced mappings stay valid.
#[derive(Debug, Error)]
pub enum CloakError {
    /// A pattern with the same name is already registered
    #[error("Pattern '{0}' is already registered")]
    DuplicateName(String),

    /// A pattern definition could not be compiled or is incomplete
    #[error("Invalid pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    /// No collision-free placeholder could be found for a tag
    #[error("Could not allocate a unique placeholder for '{tag}' after {attempts} attempts")]
    AllocationExhausted { tag: String, attempts: usize },

    /// A placeholder was recorded twice in one mapping
    #[error("Placeholder '{0}' is already present in the mapping")]
    DuplicateToken(String),

    /// A mapping document is structurally malformed
    #[error("Invalid mapping: {0}")]
    InvalidMapping(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// A single detector failed during a scan
///
/// The scan continues with the remaining patterns; the failure is surfaced to the
/// caller alongside the redaction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternExecutionWarning {
    /// Name of the pattern that failed
    pub pattern: String,
    /// What went wrong (never contains matched text)
    pub message: String,
}

impl PatternExecutionWarning {
    /// Creates a new pattern execution warning
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PatternExecutionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pattern '{}' failed: {}", self.pattern, self.message)
    }
}

/// A placeholder-shaped token was found during restore with no mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedTokenWarning {
    /// The token as it appears in the text
    pub token: String,
    /// Byte offset of the token in the text passed to restore
    pub offset: usize,
}

impl std::fmt::Display for UnmappedTokenWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "token '{}' at offset {} has no mapping entry",
            self.token, self.offset
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloak_error_display() {
        let err = CloakError::DuplicateName("email".to_string());
        assert_eq!(err.to_string(), "Pattern 'email' is already registered");

        let err = CloakError::AllocationExhausted {
            tag: "EMAIL".to_string(),
            attempts: 64,
        };
        assert_eq!(
            err.to_string(),
            "Could not allocate a unique placeholder for 'EMAIL' after 64 attempts"
        );
    }

    #[test]
    fn test_warning_display_omits_values() {
        let warning = UnmappedTokenWarning {
            token: "[EMAIL_9]".to_string(),
            offset: 12,
        };
        assert_eq!(
            warning.to_string(),
            "token '[EMAIL_9]' at offset 12 has no mapping entry"
        );

        let warning = PatternExecutionWarning::new("jwt", "matcher panicked");
        assert_eq!(warning.to_string(), "pattern 'jwt' failed: matcher panicked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CloakError = io_err.into();
        assert!(matches!(err, CloakError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CloakError = json_err.into();
        assert!(matches!(err, CloakError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CloakError = toml_err.into();
        assert!(matches!(err, CloakError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_cloak_error_implements_std_error() {
        let err = CloakError::InvalidMapping("not an object".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
