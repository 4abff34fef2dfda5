//! Result type alias for CloakPrompt

use super::errors::CloakError;

/// Result type alias for CloakPrompt operations
///
/// # Examples
///
/// ```
/// use cloakprompt::domain::result::Result;
/// use cloakprompt::domain::errors::CloakError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CloakError::InvalidMapping("expected a JSON object".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CloakError>;
