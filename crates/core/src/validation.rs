//! Field-level validation helpers shared by the project and ticket forms.

use crate::error::CoreError;
use crate::types::Date;

/// Trim `value` and reject it if nothing is left.
///
/// `field` is the human-readable field name used in the error message.
pub fn require_non_blank(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Reject `value` if it has more than `max` characters.
pub fn require_max_length(field: &str, value: &str, max: u64) -> Result<(), CoreError> {
    if value.chars().count() as u64 > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Trim an optional free-text value, collapsing blank input to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Reject a date that lies before `today`.
pub fn require_not_before(field: &str, date: Date, today: Date) -> Result<(), CoreError> {
    if date < today {
        return Err(CoreError::Validation(format!(
            "{field} must be today or later (got {date}, today is {today})"
        )));
    }
    Ok(())
}
