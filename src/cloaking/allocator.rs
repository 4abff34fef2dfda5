//! Placeholder allocation
//!
//! Each accepted span gets a token from its pattern's tag and a per-session
//! sequence number. A token is only handed out when it occurs neither in the
//! source text nor in the mapping, so restoration can never confuse a
//! placeholder with text the user wrote.

use crate::cloaking::mapping::Mapping;
use crate::cloaking::models::CandidateSpan;
use crate::cloaking::token::{find_tokens, format_salted_token, format_token};
use crate::domain::{CloakError, Result};
use std::collections::{HashMap, HashSet};

/// Default number of tokens tried per span before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Per-tag sequence counters for one redaction session
#[derive(Debug, Clone, Default)]
pub struct SessionCounters {
    next: HashMap<String, u64>,
}

impl SessionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `tag` and return the new value (first call yields 1)
    pub fn next(&mut self, tag: &str) -> u64 {
        let counter = self.next.entry(tag.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Last value handed out for `tag` (0 if none)
    pub fn current(&self, tag: &str) -> u64 {
        self.next.get(tag).copied().unwrap_or(0)
    }
}

/// Outcome of allocating a placeholder for one span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// The same secret was already mapped under this tag
    Reused(String),
    /// A new token that must be recorded in the mapping
    Fresh(String),
}

impl Allocation {
    pub fn token(&self) -> &str {
        match self {
            Allocation::Reused(token) | Allocation::Fresh(token) => token,
        }
    }

    pub fn into_token(self) -> String {
        match self {
            Allocation::Reused(token) | Allocation::Fresh(token) => token,
        }
    }
}

/// Allocates collision-free placeholders for one source text
#[derive(Debug)]
pub struct PlaceholderAllocator<'a> {
    existing: HashSet<&'a str>,
    max_attempts: usize,
    counters: SessionCounters,
}

impl<'a> PlaceholderAllocator<'a> {
    /// Create an allocator for `source`
    ///
    /// Placeholder-shaped substrings already present in `source` are indexed up
    /// front; tokens can't overlap, so this is the full set a new token could
    /// collide with.
    pub fn new(source: &'a str, max_attempts: usize) -> Self {
        Self {
            existing: find_tokens(source).map(|(_, token)| token).collect(),
            max_attempts,
            counters: SessionCounters::new(),
        }
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    /// Pick the placeholder for `span`
    ///
    /// The first half of the attempt budget tries plain `[TAG_N]` tokens with
    /// increasing `N`; the rest tries salted `[TAG_N_xxxx]` tokens.
    pub fn allocate(&mut self, span: &CandidateSpan, mapping: &Mapping) -> Result<Allocation> {
        let tag = span.placeholder_tag.as_str();

        if let Some(token) = mapping.token_for(tag, &span.matched_text) {
            return Ok(Allocation::Reused(token.to_string()));
        }

        let plain_attempts = self.max_attempts.div_ceil(2);
        for attempt in 0..self.max_attempts {
            let seq = self.counters.next(tag);
            let token = if attempt < plain_attempts {
                format_token(tag, seq)
            } else {
                format_salted_token(tag, seq, rand::random::<u16>())
            };

            if !self.existing.contains(token.as_str()) && !mapping.contains(&token) {
                return Ok(Allocation::Fresh(token));
            }

            tracing::debug!(tag, attempt, "Placeholder collides with existing text, retrying");
        }

        Err(CloakError::AllocationExhausted {
            tag: tag.to_string(),
            attempts: self.max_attempts,
        })
    }
}
