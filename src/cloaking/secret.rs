//! Zeroize-on-drop storage for captured secret values
//!
//! Originals recorded in a [`Mapping`](crate::cloaking::Mapping) are exactly the
//! values a caller wants to keep away from logs, crash reports and memory dumps.
//! They are held as [`SecretText`], which wipes its buffer when dropped and
//! prints `[REDACTED]` under `Debug`. Reading the value requires an explicit
//! `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use cloakprompt::cloaking::secret::secret_text;
//! use secrecy::ExposeSecret;
//!
//! let original = secret_text("AKIA1234567890ABCDEF".to_string());
//! assert_eq!(original.expose_secret().as_str(), "AKIA1234567890ABCDEF");
//! assert!(!format!("{original:?}").contains("AKIA"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for a captured substring
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue(s.to_string())
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Borrow the underlying text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the value in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A captured secret: zeroed on drop, redacted in `Debug`
pub type SecretText = Secret<SecretValue>;

/// Wrap a captured substring
#[inline]
pub fn secret_text(value: String) -> SecretText {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_text_creation() {
        let secret = secret_text("ghp_abc".to_string());
        assert_eq!(secret.expose_secret().as_str(), "ghp_abc");
        assert_eq!(secret.expose_secret().len(), 7);
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_text("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-data"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_clone_is_independent() {
        let secret = secret_text("value".to_string());
        let cloned = secret.clone();
        drop(secret);
        assert!(*cloned.expose_secret() == *"value");
    }
}
