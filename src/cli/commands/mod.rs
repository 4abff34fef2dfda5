//! CLI command implementations
//!
//! Exit codes: 0 success, 1 input or redaction failure, 2 configuration error,
//! 5 fatal error.

pub mod config_path;
pub mod init;
pub mod patterns;
pub mod redact;
pub mod restore;
pub mod validate;
