//! Audit logging module
//!
//! Provides an append-only audit trail of redactions. Matched values are
//! recorded only as SHA-256 fingerprints.

pub mod logger;

pub use logger::AuditLogger;
