//! Input validation primitives for form fields.

use crate::error::{Error, Result};

/// Require a string with at least one non-whitespace character.
///
/// The value is returned unchanged: names are matched exactly, so
/// surrounding whitespace is significant.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::validation_invalid_argument(field, message, None))
    } else {
        Ok(value)
    }
}

/// Require a similarity threshold in `0..=100`.
pub fn require_threshold(value: u8) -> Result<u8> {
    if value > 100 {
        Err(Error::validation_invalid_argument(
            "threshold",
            "Threshold must be between 0 and 100",
            Some(value.to_string()),
        ))
    } else {
        Ok(value)
    }
}
