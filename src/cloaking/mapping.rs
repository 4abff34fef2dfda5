//! Placeholder to original mapping for one redaction session
//!
//! A [`Mapping`] is created fresh by every `redact` call and handed to the
//! caller, who passes it back to `restore`. Entries keep insertion order, which
//! is also the order of the exported JSON object:
//!
//! ```rust
//! use cloakprompt::cloaking::Mapping;
//!
//! let mut mapping = Mapping::new();
//! mapping.put("[EMAIL_1]", "jane@example.com").unwrap();
//! assert_eq!(mapping.to_json().unwrap(), r#"{"[EMAIL_1]":"jane@example.com"}"#);
//!
//! let imported = Mapping::from_json(r#"{"[EMAIL_1]": "jane@example.com"}"#).unwrap();
//! assert_eq!(imported.get("[EMAIL_1]"), Some("jane@example.com"));
//! ```

use crate::cloaking::secret::{secret_text, SecretText};
use crate::cloaking::token::parse_tag;
use crate::domain::{CloakError, Result};
use secrecy::ExposeSecret;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;

type Fingerprint = [u8; 32];

fn fingerprint(value: &str) -> Fingerprint {
    Sha256::digest(value.as_bytes()).into()
}

/// One placeholder and the text it replaced
#[derive(Clone)]
pub struct MappingEntry {
    token: String,
    original: SecretText,
}

impl MappingEntry {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn original(&self) -> &str {
        self.original.expose_secret().as_str()
    }
}

/// Bidirectional placeholder mapping
///
/// Lookups go both ways: token to original for restoration, and
/// `(tag, original)` to token so a secret that occurs twice gets one placeholder.
/// The reverse index is keyed by a SHA-256 fingerprint so plaintext is held only
/// once, inside zeroize-on-drop storage.
#[derive(Clone, Default)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
    by_token: HashMap<String, usize>,
    by_value: HashMap<(String, Fingerprint), usize>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placeholder
    ///
    /// Fails with [`CloakError::DuplicateToken`] when the token is already
    /// present, which would mean two secrets share one placeholder.
    pub fn put(&mut self, token: impl Into<String>, original: impl Into<String>) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(CloakError::InvalidMapping(
                "placeholder token must not be empty".to_string(),
            ));
        }
        if self.by_token.contains_key(&token) {
            return Err(CloakError::DuplicateToken(token));
        }

        let original = original.into();
        let index = self.entries.len();
        if let Some(tag) = parse_tag(&token) {
            self.by_value
                .entry((tag.to_string(), fingerprint(&original)))
                .or_insert(index);
        }

        self.by_token.insert(token.clone(), index);
        self.entries.push(MappingEntry {
            token,
            original: secret_text(original),
        });
        Ok(())
    }

    /// Original text for a token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.by_token
            .get(token)
            .map(|&index| self.entries[index].original())
    }

    /// Token already assigned to `original` under `tag`
    pub fn token_for(&self, tag: &str, original: &str) -> Option<&str> {
        self.by_value
            .get(&(tag.to_string(), fingerprint(original)))
            .map(|&index| &self.entries[index])
            .filter(|entry| entry.original() == original)
            .map(|entry| entry.token())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(token, original)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.token(), e.original()))
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(MappingEntry::token)
    }

    /// Flat JSON object `{ token: original }`
    pub fn export(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(token, original)| (token.to_string(), Value::String(original.to_string())))
                .collect(),
        )
    }

    /// Rebuild a mapping from a flat JSON object
    ///
    /// Fails with [`CloakError::InvalidMapping`] unless every value is a non-empty
    /// string keyed by a non-empty token.
    pub fn import(value: Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| CloakError::InvalidMapping(e.to_string()))
    }

    /// Parse a mapping from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CloakError::InvalidMapping(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Mapping {}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("tokens", &self.tokens().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = Mapping;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a flat object of placeholder tokens to original strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Mapping, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((token, original)) = access.next_entry::<String, String>()? {
            if original.is_empty() {
                return Err(de::Error::custom(format!(
                    "empty original value for '{token}'"
                )));
            }
            mapping.put(token, original).map_err(de::Error::custom)?;
        }
        Ok(mapping)
    }
}
