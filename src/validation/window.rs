//! # Maintenance Window Validation
//!
//! Validates daily (`hh24:mi-hh24:mi`) and weekly (`ddd:hh24:mi-ddd:hh24:mi`)
//! window strings. An empty window is accepted.

use super::patterns::{ONCE_A_DAY_WINDOW_REGEX, ONCE_A_WEEK_WINDOW_REGEX};
use super::ValidationReport;
use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};

/// Validate a daily window such as `04:00-05:00`
///
/// # Errors
///
/// Returns a constraint error when the window does not match `hh24:mi-hh24:mi`.
pub fn validate_once_a_day_window_format(value: &str) -> Result<(), ValidationError> {
    if !ONCE_A_DAY_WINDOW_REGEX.is_match(value) {
        return Err(ValidationError::constraint(format!(
            "({value}) must satisfy the format of \"hh24:mi-hh24:mi\""
        )));
    }
    Ok(())
}

/// Validate a weekly window such as `sun:04:00-sun:05:00`
///
/// Day abbreviations are case-insensitive; the error echoes the lower-cased value.
///
/// # Errors
///
/// Returns a constraint error when the window does not match
/// `ddd:hh24:mi-ddd:hh24:mi`.
pub fn validate_once_a_week_window_format(value: &str) -> Result<(), ValidationError> {
    let value = value.to_lowercase();
    if !ONCE_A_WEEK_WINDOW_REGEX.is_match(&value) {
        return Err(ValidationError::constraint(format!(
            "({value}) must satisfy the format of \"ddd:hh24:mi-ddd:hh24:mi\""
        )));
    }
    Ok(())
}

pub fn valid_once_a_day_window_format(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_once_a_day_window_format(value).into()
}

pub fn valid_once_a_week_window_format(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_once_a_week_window_format(value).into()
}
