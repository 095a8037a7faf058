//! Field constraints shared by contact create and update payloads.
//!
//! The repository layer trusts these checks; the database length limits and
//! unique constraint remain the final authority.

use crate::error::CoreError;

/// Maximum length of `first_name` and `last_name`, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of `phone_number`, in characters.
pub const MAX_PHONE_LEN: usize = 20;

/// Validate a required bounded string field (names, phone number).
///
/// Rejects empty or whitespace-only values and values over `max_len`
/// characters.
pub fn validate_required(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate an email value when one is supplied.
///
/// An empty email is rejected rather than stored: two contacts with `""`
/// would otherwise collide on the unique constraint.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(
            "email must not be empty when provided".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
