// CloakPrompt - Reversible secret redaction for LLM prompts
// Copyright (c) 2025 CloakPrompt Contributors
// Licensed under the MIT License

//! # CloakPrompt - Reversible secret redaction
//!
//! CloakPrompt replaces secrets in free text (API keys, tokens, passwords,
//! private keys, email addresses) with placeholders such as `[AWS_ACCESS_KEY_1]`
//! before the text is sent to an LLM, and puts the original values back into
//! the model's answer afterwards.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** secrets with a registry of named, prioritised patterns
//! - **Resolving** overlapping matches into a non-overlapping set
//! - **Cloaking** each secret with a placeholder that never collides with the text
//! - **Restoring** originals from a mapping that can be exported as JSON
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`cloaking`] - Detection, resolution, placeholders, mapping and restore
//! - [`domain`] - Error and warning types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use cloakprompt::cloaking::{CloakEngine, CloakingConfig};
//!
//! # fn main() -> Result<(), cloakprompt::domain::CloakError> {
//! let engine = CloakEngine::new(CloakingConfig::default())?;
//!
//! let redaction = engine.redact("Deploy with AKIA1234567890ABCDEF, ping ops@example.com")?;
//! assert_eq!(
//!     redaction.cloaked_text,
//!     "Deploy with [AWS_ACCESS_KEY_1], ping [EMAIL_1]"
//! );
//!
//! // ... send the cloaked text to the model, receive an answer ...
//! let answer = "I rotated [AWS_ACCESS_KEY_1] and told [EMAIL_1].";
//!
//! let restored = engine.restore(answer, &redaction.mapping)?;
//! assert_eq!(
//!     restored.text,
//!     "I rotated AKIA1234567890ABCDEF and told ops@example.com."
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Patterns
//!
//! Any [`cloaking::Matcher`] can be registered next to the built-in library:
//!
//! ```rust
//! use cloakprompt::cloaking::{CloakEngine, Pattern, PatternRegistry};
//!
//! # fn main() -> Result<(), cloakprompt::domain::CloakError> {
//! let mut registry = PatternRegistry::default_patterns()?;
//! registry.register(
//!     Pattern::from_fn("ticket", |text: &str| {
//!         Ok(text.match_indices("TICKET-42").map(|(i, m)| i..i + m.len()).collect())
//!     })
//!     .with_priority(2),
//! )?;
//!
//! let engine = CloakEngine::with_registry(registry);
//! let redaction = engine.redact("see TICKET-42")?;
//! assert_eq!(redaction.cloaked_text, "see [TICKET_1]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fatal conditions are [`domain::CloakError`] values. A failing pattern or an
//! unknown placeholder never aborts an operation; they are reported as warnings
//! on the result.

pub mod cli;
pub mod cloaking;
pub mod config;
pub mod domain;
pub mod logging;
