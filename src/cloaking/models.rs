//! Span, pattern metadata and result models

use crate::cloaking::mapping::Mapping;
use crate::domain::{PatternExecutionWarning, UnmappedTokenWarning};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use uuid::Uuid;

/// A detected occurrence before conflict resolution
///
/// Offsets are half-open byte offsets into the scanned text and always fall on
/// UTF-8 character boundaries with `start < end`.
#[derive(Clone, PartialEq, Eq)]
pub struct CandidateSpan {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Name of the pattern that produced the span
    pub pattern_name: String,
    /// Priority of the producing pattern
    pub priority: i32,
    /// Placeholder tag of the producing pattern
    pub placeholder_tag: String,
    /// The exact substring covered by the span
    pub matched_text: String,
    /// Registration index of the producing pattern
    pub registration_index: usize,
    /// Position of the span in the scan output
    pub ordinal: usize,
}

impl CandidateSpan {
    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no text
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Byte range of the span
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether two half-open spans share at least one byte
    pub fn overlaps(&self, other: &CandidateSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Promote the candidate to an accepted span
    pub fn accept(self, placeholder: String) -> AcceptedSpan {
        AcceptedSpan {
            start: self.start,
            end: self.end,
            pattern_name: self.pattern_name,
            priority: self.priority,
            matched_text: self.matched_text,
            placeholder,
        }
    }
}

impl std::fmt::Debug for CandidateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateSpan")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("pattern_name", &self.pattern_name)
            .field("priority", &self.priority)
            .field("registration_index", &self.registration_index)
            .field("matched_text", &"[REDACTED]")
            .finish()
    }
}

/// A candidate that survived conflict resolution, with its placeholder
#[derive(Clone, PartialEq, Eq)]
pub struct AcceptedSpan {
    /// Start offset in the source text
    pub start: usize,
    /// End offset in the source text
    pub end: usize,
    /// Name of the pattern that produced the span
    pub pattern_name: String,
    /// Priority of the producing pattern
    pub priority: i32,
    /// The exact substring that was replaced
    pub matched_text: String,
    /// Placeholder written in place of the substring
    pub placeholder: String,
}

impl AcceptedSpan {
    /// Byte range of the span in the source text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Debug for AcceptedSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptedSpan")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("pattern_name", &self.pattern_name)
            .field("placeholder", &self.placeholder)
            .field("matched_text", &"[REDACTED]")
            .finish()
    }
}

/// Pattern metadata for introspection and listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternInfo {
    /// Unique pattern name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Example of text the pattern detects
    pub example: String,
    /// Grouping used by listings
    pub category: String,
    /// Conflict-resolution priority
    pub priority: i32,
    /// Placeholder tag used for this pattern's tokens
    pub placeholder: String,
}

/// Result of a single `redact` call
#[derive(Debug, Clone)]
pub struct Redaction {
    /// Identifier of this redaction session
    pub session_id: Uuid,
    /// When the redaction ran
    pub redacted_at: DateTime<Utc>,
    /// Text with every accepted span replaced by its placeholder
    pub cloaked_text: String,
    /// Placeholder to original mapping for this session
    pub mapping: Mapping,
    /// Accepted spans in ascending `start` order
    pub spans: Vec<AcceptedSpan>,
    /// Patterns that failed during the scan
    pub warnings: Vec<PatternExecutionWarning>,
}

impl Redaction {
    /// Get total number of replaced spans
    pub fn total_redactions(&self) -> usize {
        self.spans.len()
    }

    /// Check if anything was redacted
    pub fn has_redactions(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Number of replaced spans per pattern name
    pub fn counts_by_pattern(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for span in &self.spans {
            *counts.entry(span.pattern_name.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Result of a single `restore` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restoration {
    /// Text with every known placeholder replaced by its original
    pub text: String,
    /// Number of placeholders replaced
    pub restored: usize,
    /// Placeholder-shaped tokens that had no mapping entry
    pub warnings: Vec<UnmappedTokenWarning>,
}

impl Restoration {
    /// Whether every placeholder-shaped token was restored
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
