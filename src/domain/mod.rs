//! Domain error and result types for CloakPrompt.
//!
//! All fallible operations return [`Result<T, CloakError>`](Result):
//!
//! ```rust
//! use cloakprompt::domain::{CloakError, Result};
//! use cloakprompt::cloaking::Mapping;
//!
//! fn example() -> Result<()> {
//!     let mapping = Mapping::from_json(r#"{"[EMAIL_1]": "jane@example.com"}"#)?;
//!     assert_eq!(mapping.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! Non-fatal conditions are reported as warnings attached to results:
//! [`PatternExecutionWarning`] during redaction and [`UnmappedTokenWarning`]
//! during restoration.

pub mod errors;
pub mod result;

pub use errors::{CloakError, PatternExecutionWarning, UnmappedTokenWarning};
pub use result::Result;
