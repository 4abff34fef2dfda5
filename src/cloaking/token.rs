//! Placeholder token format
//!
//! Tokens look like `[AWS_ACCESS_KEY_1]`: an upper snake case tag naming the
//! pattern, then a per-session sequence number. When plain tokens keep colliding
//! the allocator falls back to a salted form, `[AWS_ACCESS_KEY_7_3fa9]`.
//!
//! A token holds exactly one `[` (its first char) and one `]` (its last char),
//! so occurrences in a text never overlap each other.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[A-Z][A-Z0-9_]*_[0-9]+(?:_[0-9a-f]{4})?\]").expect("valid token regex")
});

static TOKEN_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<tag>[A-Z][A-Z0-9_]*?)_(?P<seq>[0-9]+)(?:_(?P<salt>[0-9a-f]{4}))?\]$")
        .expect("valid token regex")
});

/// Build a plain token
pub fn format_token(tag: &str, seq: u64) -> String {
    format!("[{tag}_{seq}]")
}

/// Build a salted token
pub fn format_salted_token(tag: &str, seq: u64, salt: u16) -> String {
    format!("[{tag}_{seq}_{salt:04x}]")
}

/// Check whether `s` is exactly one placeholder-shaped token
pub fn is_token_shaped(s: &str) -> bool {
    TOKEN_PARTS.is_match(s)
}

/// Extract the tag of a placeholder-shaped token
pub fn parse_tag(token: &str) -> Option<&str> {
    TOKEN_PARTS
        .captures(token)
        .and_then(|caps| caps.name("tag"))
        .map(|m| m.as_str())
}

/// Find every placeholder-shaped token in `text` with its byte offset
pub fn find_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    TOKEN_SHAPE.find_iter(text).map(|m| (m.start(), m.as_str()))
}
