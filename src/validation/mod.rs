//! # Validation
//!
//! Field validators for provider schemas. Every validator takes the raw
//! configuration value and the field key, and returns a [`ValidationReport`]
//! of human-readable warnings and errors. Validators are pure and may be
//! called concurrently.
//!
//! Validators that accept a single primitive kind convert at the boundary and
//! report `expected type of KEY to be KIND` on a mismatch instead of failing.

mod arn;
mod aws;
mod cidr;
mod document;
mod network;
mod numeric;
mod patterns;
mod time;
mod window;

use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};
use std::sync::Arc;
use tracing::debug;

pub use arn::{valid_arn, valid_arn_check, ArnCheckFn};
pub use aws::{
    valid_account_id, valid_kms_key_id, valid_launch_template_id, valid_launch_template_name,
    valid_region_name,
};
pub use cidr::{
    cidr_blocks_equal, is_ipv4_cidr_block_or_ipv6_cidr_block, valid_cidr_network_address,
    valid_ipv4_cidr_network_address, valid_ipv6_cidr_network_address, validate_cidr_block,
    validate_ipv4_cidr_block, validate_ipv6_cidr_block,
};
pub use document::{valid_iam_policy_json, valid_string_is_json_or_yaml};
pub use network::valid_multicast_ip_address;
pub use numeric::{float_greater_than, valid_4_byte_asn, valid_type_string_nullable_float};
pub use patterns::{ACCOUNT_ID_REGEX, PARTITION_REGEX, REGION_REGEX};
pub use time::{
    is_rfc3339_time, string_match, valid_duration, valid_string_date_or_positive_int,
    valid_utc_timestamp, validate_utc_timestamp,
};
pub use window::{
    valid_once_a_day_window_format, valid_once_a_week_window_format,
    validate_once_a_day_window_format, validate_once_a_week_window_format,
};

/// Warnings and errors produced by one validator call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report holding a single error
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        ValidationReport {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// Report for a value of the wrong kind
    #[must_use]
    pub fn type_mismatch(key: &str, expected: ValueKind) -> Self {
        Self::from_error(ValidationError::type_mismatch(key, expected))
    }

    /// True when no errors were reported (warnings allowed)
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when neither warnings nor errors were reported
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append another report's warnings and errors, preserving order
    pub fn extend(&mut self, other: ValidationReport) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

impl From<Result<(), ValidationError>> for ValidationReport {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationReport::new(),
            Err(e) => ValidationReport::from_error(e),
        }
    }
}

/// Validator in key form: `(value, key) -> report`
pub type Validator = Arc<dyn Fn(&ConfigValue, &str) -> ValidationReport + Send + Sync>;

/// Run every validator, concatenating warnings and errors
#[must_use]
pub fn valid_all(validators: Vec<Validator>) -> Validator {
    Arc::new(move |value: &ConfigValue, key: &str| {
        let mut report = ValidationReport::new();
        for validator in &validators {
            report.extend(validator(value, key));
        }
        report
    })
}

/// Succeed as soon as one validator reports neither warnings nor errors
///
/// If every validator reports something, all of it is returned.
#[must_use]
pub fn valid_any(validators: Vec<Validator>) -> Validator {
    Arc::new(move |value: &ConfigValue, key: &str| {
        let mut report = ValidationReport::new();
        for (i, validator) in validators.iter().enumerate() {
            let result = validator(value, key);
            if result.is_empty() {
                debug!(key, validator = i, "valid_any satisfied");
                return ValidationReport::new();
            }
            report.extend(result);
        }
        report
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(message: &'static str) -> Validator {
        Arc::new(move |_: &ConfigValue, _: &str| {
            ValidationReport::from_error(ValidationError::constraint(message))
        })
    }

    fn passing() -> Validator {
        Arc::new(|_: &ConfigValue, _: &str| ValidationReport::new())
    }

    fn warning_only() -> Validator {
        Arc::new(|_: &ConfigValue, _: &str| {
            let mut report = ValidationReport::new();
            report.push_warning("deprecated");
            report
        })
    }

    #[test]
    fn test_valid_all_collects_everything() {
        let validator = valid_all(vec![failing("a"), passing(), failing("b")]);
        let report = validator(&ConfigValue::from("x"), "k");
        let messages: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_valid_any_short_circuits_on_success() {
        let validator = valid_any(vec![failing("a"), passing(), failing("b")]);
        assert!(validator(&ConfigValue::from("x"), "k").is_empty());
    }

    #[test]
    fn test_valid_any_treats_warnings_as_not_satisfied() {
        let validator = valid_any(vec![warning_only(), failing("b")]);
        let report = validator(&ConfigValue::from("x"), "k");
        assert_eq!(report.warnings, vec!["deprecated"]);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_report_from_result() {
        assert!(ValidationReport::from(Ok(())).is_empty());
        let report = ValidationReport::from(Err(ValidationError::parse("bad")));
        assert!(!report.is_ok());
    }
}
