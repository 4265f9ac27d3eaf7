//! # ARN Validation
//!
//! Validates Amazon Resource Names section by section. All section checks run
//! and accumulate, so one input may produce several errors.

use super::patterns::{ACCOUNT_ID_REGEX, PARTITION_REGEX, REGION_REGEX};
use super::{ValidationReport, Validator};
use crate::arn::Arn;
use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};
use std::sync::Arc;

/// Extra check applied to a successfully parsed ARN: `(value, key, arn) -> report`
pub type ArnCheckFn = Arc<dyn Fn(&ConfigValue, &str, &Arn) -> ValidationReport + Send + Sync>;

/// Validate a generic ARN
///
/// Same as [`valid_arn_check`] with no extra checks.
pub fn valid_arn(value: &ConfigValue, key: &str) -> ValidationReport {
    check_arn(value, key, &[])
}

/// Validate an ARN and then apply the supplied checks to the parsed value
///
/// The value must:
/// - Be parseable as an ARN
/// - Have a valid partition
/// - Have an empty or valid region
/// - Have an empty or valid account ID
/// - Have a non-empty resource part
/// - Pass the supplied checks
///
/// An empty string is accepted without further checks. Supplied checks run in
/// order even when the section checks already failed.
#[must_use]
pub fn valid_arn_check(checks: Vec<ArnCheckFn>) -> Validator {
    Arc::new(move |value: &ConfigValue, key: &str| check_arn(value, key, &checks))
}

fn check_arn(v: &ConfigValue, key: &str, checks: &[ArnCheckFn]) -> ValidationReport {
    let Some(value) = v.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if value.is_empty() {
        return ValidationReport::new();
    }

    let parsed = match Arn::parse(value) {
        Ok(arn) => arn,
        Err(e) => {
            return ValidationReport::from_error(ValidationError::parse(format!(
                "{key:?} ({value}) is an invalid ARN: {e}"
            )));
        }
    };

    let mut report = ValidationReport::new();
    let invalid = |reason: String| {
        ValidationError::constraint(format!("{key:?} ({value}) is an invalid ARN: {reason}"))
    };

    if parsed.partition.is_empty() {
        report.push_error(invalid("missing partition value".to_owned()));
    } else if !PARTITION_REGEX.is_match(&parsed.partition) {
        report.push_error(invalid(format!(
            "invalid partition value (expecting to match regular expression: {})",
            PARTITION_REGEX.as_str()
        )));
    }

    if !parsed.region.is_empty() && !REGION_REGEX.is_match(&parsed.region) {
        report.push_error(invalid(format!(
            "invalid region value (expecting to match regular expression: {})",
            REGION_REGEX.as_str()
        )));
    }

    if !parsed.account_id.is_empty() && !ACCOUNT_ID_REGEX.is_match(&parsed.account_id) {
        report.push_error(invalid(format!(
            "invalid account ID value (expecting to match regular expression: {})",
            ACCOUNT_ID_REGEX.as_str()
        )));
    }

    if parsed.resource.is_empty() {
        report.push_error(invalid("missing resource value".to_owned()));
    }

    for check in checks {
        report.extend(check(v, key, &parsed));
    }

    report
}
