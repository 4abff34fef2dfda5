//! Secret detection module
//!
//! A [`Pattern`] is a named detector: metadata plus a [`Matcher`] that turns text
//! into byte ranges. Patterns are collected in a
//! [`PatternRegistry`](patterns::PatternRegistry), which runs them independently
//! and turns their ranges into candidate spans.

pub mod patterns;
pub mod regex;

use crate::cloaking::models::PatternInfo;
use anyhow::Result;
use std::ops::Range;

/// Trait for span-producing detectors
///
/// Implementations must be side-effect free and should run in time linear in the
/// length of `text`. Returned ranges are byte offsets into `text`; the registry
/// rejects empty, out-of-bounds and non-char-boundary ranges.
pub trait Matcher: Send + Sync {
    /// Find all occurrences in `text`
    fn find(&self, text: &str) -> Result<Vec<Range<usize>>>;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> Result<Vec<Range<usize>>> + Send + Sync,
{
    fn find(&self, text: &str) -> Result<Vec<Range<usize>>> {
        self(text)
    }
}

/// A named detector with the metadata used for listings and tie-breaks
pub struct Pattern {
    name: String,
    description: String,
    example: String,
    category: String,
    priority: i32,
    placeholder: Option<String>,
    matcher: Box<dyn Matcher>,
}

impl Pattern {
    /// Create a pattern with default metadata and priority 0
    pub fn new(name: impl Into<String>, matcher: impl Matcher + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            example: String::new(),
            category: "Custom".to_string(),
            priority: 0,
            placeholder: None,
            matcher: Box::new(matcher),
        }
    }

    /// Create a pattern from a closure
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<Range<usize>>> + Send + Sync + 'static,
    {
        Self::new(name, f)
    }

    /// Set the human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set an example of text the pattern detects
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Set the listing category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the conflict-resolution priority (higher wins)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Override the placeholder tag derived from the name
    pub fn with_placeholder(mut self, tag: impl Into<String>) -> Self {
        self.placeholder = Some(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Tag used in this pattern's placeholders, e.g. `AWS_ACCESS_KEY`
    pub fn placeholder_tag(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| derive_tag(&self.name))
    }

    /// Run the matcher
    pub fn find(&self, text: &str) -> Result<Vec<Range<usize>>> {
        self.matcher.find(text)
    }

    /// Metadata snapshot for listings
    pub fn info(&self) -> PatternInfo {
        PatternInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            example: self.example.clone(),
            category: self.category.clone(),
            priority: self.priority,
            placeholder: self.placeholder_tag(),
        }
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .field("placeholder", &self.placeholder_tag())
            .finish_non_exhaustive()
    }
}

/// Derive a placeholder tag from a pattern name
///
/// `aws-access-key` becomes `AWS_ACCESS_KEY`. Runs of non-alphanumeric characters
/// collapse to a single underscore.
pub fn derive_tag(name: &str) -> String {
    let mut tag = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            tag.push(c.to_ascii_uppercase());
        } else if !tag.is_empty() && !tag.ends_with('_') {
            tag.push('_');
        }
    }
    while tag.ends_with('_') {
        tag.pop();
    }
    tag
}

/// Check that a tag is usable inside a placeholder token
///
/// Tags are `[A-Z][A-Z0-9_]*` and may not end in `_` or in an all-digit segment,
/// so `[TAG_N]` and `[TAG_N_xxxx]` always split back into the same tag.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
        return false;
    }
    match tag.rsplit('_').next() {
        Some(last) => !last.is_empty() && !last.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
