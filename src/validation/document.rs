//! # Document Validation
//!
//! Validates policy documents and other embedded JSON or YAML strings.

use super::patterns::LOOKS_LIKE_JSON_REGEX;
use super::ValidationReport;
use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};

/// Parse and re-serialize a JSON string, returning the compact form
fn normalize_json_string(s: &str) -> Result<String, serde_json::Error> {
    if s.is_empty() {
        return Ok(String::new());
    }
    let value: serde_json::Value = serde_json::from_str(s)?;
    serde_json::to_string(&value)
}

/// Parse a YAML string; an empty string is accepted
fn check_yaml_string(s: &str) -> Result<(), serde_yaml::Error> {
    if s.is_empty() {
        return Ok(());
    }
    serde_yaml::from_str::<serde_yaml::Value>(s)?;
    Ok(())
}

/// Validate an IAM policy document
///
/// Policies must be a JSON object: non-empty, starting with `{`, and parseable.
pub fn valid_iam_policy_json(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if !value.starts_with('{') {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} contains an invalid JSON policy"
        )));
    }

    if let Err(e) = normalize_json_string(value) {
        return ValidationReport::from_error(ValidationError::parse(format!(
            "{key:?} contains an invalid JSON: {e}"
        )));
    }

    ValidationReport::new()
}

/// Validate a string holding either JSON or YAML
///
/// Strings whose first non-blank character is `{` are checked as JSON,
/// everything else as YAML.
pub fn valid_string_is_json_or_yaml(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if LOOKS_LIKE_JSON_REGEX.is_match(value) {
        if let Err(e) = normalize_json_string(value) {
            return ValidationReport::from_error(ValidationError::parse(format!(
                "{key:?} contains an invalid JSON: {e}"
            )));
        }
    } else if let Err(e) = check_yaml_string(value) {
        return ValidationReport::from_error(ValidationError::parse(format!(
            "{key:?} contains an invalid YAML: {e}"
        )));
    }

    ValidationReport::new()
}
