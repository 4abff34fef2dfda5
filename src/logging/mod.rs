//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels (`RUST_LOG` overrides the configured level)
//! - Console output on stderr
//! - JSON file logging with rotation
//!
//! Log events carry counts, pattern names, offsets and placeholders. Matched
//! values are never logged.
//!
//! # Example
//!
//! ```no_run
//! use cloakprompt::logging::init_logging;
//! use cloakprompt::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a redaction
///
/// # Example
///
/// ```no_run
/// use cloakprompt::log_redaction_complete;
/// use std::time::Duration;
/// use uuid::Uuid;
///
/// log_redaction_complete!(Uuid::new_v4(), 3, 0, Duration::from_millis(2));
/// ```
#[macro_export]
macro_rules! log_redaction_complete {
    ($session_id:expr, $count:expr, $warnings:expr, $duration:expr) => {
        tracing::info!(
            session_id = %$session_id,
            redactions = $count,
            warnings = $warnings,
            duration_ms = $duration.as_millis(),
            "Redaction completed"
        );
    };
}

/// Log the completion of a restoration
///
/// # Example
///
/// ```no_run
/// use cloakprompt::log_restoration_complete;
/// use std::time::Duration;
///
/// log_restoration_complete!(2, 1, Duration::from_millis(1));
/// ```
#[macro_export]
macro_rules! log_restoration_complete {
    ($restored:expr, $unmapped:expr, $duration:expr) => {
        tracing::info!(
            restored = $restored,
            unmapped = $unmapped,
            duration_ms = $duration.as_millis(),
            "Restoration completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cloakprompt::log_error_with_context;
/// use cloakprompt::domain::CloakError;
///
/// let error = CloakError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::CloakError;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_redaction_complete!(Uuid::new_v4(), 1usize, 0usize, Duration::from_millis(5));
        log_restoration_complete!(1usize, 0usize, Duration::from_millis(5));
        log_error_with_context!(CloakError::Io("disk full".to_string()), "writing output");
    }
}
