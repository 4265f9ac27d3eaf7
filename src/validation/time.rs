//! # Time Validation
//!
//! Validates RFC3339 timestamps and duration strings.

use super::patterns::POSITIVE_INT_REGEX;
use super::{valid_any, ValidationReport, Validator};
use crate::constants::RFC3339_LAYOUT;
use crate::duration::parse_duration;
use crate::errors::{TimestampParseError, ValidationError};
use crate::value::{ConfigValue, ValueKind};
use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Index of the `T` between date and time in `YYYY-MM-DDTHH:MM:SS`
const DATE_TIME_SEPARATOR_INDEX: usize = 10;

/// Parse an RFC3339 timestamp, rejecting the forms chrono tolerates but the
/// layout does not: a space or lowercase `t` separator, lowercase `z`, and
/// leap seconds
fn parse_rfc3339(value: &str) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    if value.as_bytes().get(DATE_TIME_SEPARATOR_INDEX) != Some(&b'T') || value.ends_with('z') {
        return Err(TimestampParseError::Separator);
    }

    let parsed = DateTime::parse_from_rfc3339(value)?;
    // chrono carries a leap second as a nanosecond count past one second
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimestampParseError::LeapSecond);
    }

    Ok(parsed)
}

/// Validate that a string is an RFC3339 timestamp
///
/// # Errors
///
/// Returns a parse error carrying the parser's reason.
pub fn validate_utc_timestamp(value: &str) -> Result<(), ValidationError> {
    parse_rfc3339(value).map_err(|e| {
        ValidationError::parse(format!(
            "must be in RFC3339 time format {RFC3339_LAYOUT:?}. Example: {e}"
        ))
    })?;
    Ok(())
}

/// Validate a timestamp field, as required by APIs including:
/// - https://docs.aws.amazon.com/iot/latest/apireference/API_CloudwatchMetricAction.html
/// - https://docs.aws.amazon.com/AmazonRDS/latest/APIReference/API_RestoreDBInstanceToPointInTime.html
pub fn valid_utc_timestamp(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_utc_timestamp(value).into()
}

/// Validate a non-negative duration string such as `"5m"` or `"1h30m"`
///
/// Parse failure and negativity are checked independently. A string that
/// fails to parse counts as a zero duration for the second check.
pub fn valid_duration(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    let mut report = ValidationReport::new();
    let duration = match parse_duration(value) {
        Ok(d) => d,
        Err(e) => {
            report.push_error(ValidationError::parse(format!(
                "{key:?} cannot be parsed as a duration: {e}"
            )));
            TimeDelta::zero()
        }
    };

    if duration < TimeDelta::zero() {
        report.push_error(ValidationError::constraint(format!(
            "{key:?} must be greater than zero"
        )));
    }

    report
}

/// Validate that a string field is an RFC3339 timestamp, naming the value
pub fn is_rfc3339_time(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(v) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if let Err(e) = parse_rfc3339(v) {
        return ValidationReport::from_error(ValidationError::parse(format!(
            "expected {key:?} to be a valid RFC3339 date, got {v:?}: {e}"
        )));
    }

    ValidationReport::new()
}

/// Validator requiring a string field to match `pattern`
///
/// A non-empty `message` replaces the default "expected value to match"
/// wording.
#[must_use]
pub fn string_match(pattern: Regex, message: &str) -> Validator {
    let message = message.to_owned();
    Arc::new(move |value: &ConfigValue, key: &str| {
        let Some(v) = value.as_str() else {
            return ValidationReport::type_mismatch(key, ValueKind::String);
        };

        if pattern.is_match(v) {
            return ValidationReport::new();
        }

        let error = if message.is_empty() {
            format!(
                "expected value of {key} to match regular expression {:?}, got {v}",
                pattern.as_str()
            )
        } else {
            format!("invalid value for {key} ({message})")
        };
        ValidationReport::from_error(ValidationError::constraint(error))
    })
}

static DATE_OR_POSITIVE_INT: LazyLock<Validator> = LazyLock::new(|| {
    let date: Validator = Arc::new(is_rfc3339_time);
    let positive_int = string_match(Regex::clone(&POSITIVE_INT_REGEX), "must be a positive integer value");
    valid_any(vec![date, positive_int])
});

/// Validate a string that is either an RFC3339 timestamp or a positive integer
pub fn valid_string_date_or_positive_int(value: &ConfigValue, key: &str) -> ValidationReport {
    let validator: &Validator = &DATE_OR_POSITIVE_INT;
    validator(value, key)
}
