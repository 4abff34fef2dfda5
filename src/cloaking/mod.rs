//! Reversible secret redaction
//!
//! This module detects secrets in free text, swaps them for placeholder tokens
//! and restores them later from a per-call mapping.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: a registry of named patterns producing candidate spans
//! - **Resolution**: overlapping candidates reduced to a non-overlapping set
//! - **Allocation**: collision-free `[TAG_N]` placeholders per session
//! - **Mapping**: placeholder to original store with JSON export and import
//! - **Audit**: optional append-only log with hashed values
//!
//! # Usage
//!
//! ```rust
//! use cloakprompt::cloaking::{CloakEngine, CloakingConfig, Mapping};
//!
//! let engine = CloakEngine::new(CloakingConfig::default())?;
//! let redaction = engine.redact("password = hunter2hunter2")?;
//! assert_eq!(redaction.cloaked_text, "password = [SECRET_1]");
//!
//! // Hand the mapping across a process boundary and restore later
//! let exported = redaction.mapping.to_json()?;
//! let mapping = Mapping::from_json(&exported)?;
//! let restored = engine.restore("The password is [SECRET_1].", &mapping)?;
//! assert_eq!(restored.text, "The password is hunter2hunter2.");
//! # Ok::<(), cloakprompt::domain::CloakError>(())
//! ```

pub mod allocator;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod mapping;
pub mod models;
pub mod report;
pub mod resolver;
pub mod restore;
pub mod secret;
pub mod token;

// Re-export main types
pub use config::CloakingConfig;
pub use detector::patterns::{PatternRegistry, ScanOutcome};
pub use detector::{Matcher, Pattern};
pub use engine::CloakEngine;
pub use mapping::Mapping;
pub use models::{AcceptedSpan, CandidateSpan, PatternInfo, Redaction, Restoration};
pub use report::RedactionReport;
