//! # Numeric Validation
//!
//! Validates numbers carried in string fields (ASNs, nullable floats) and
//! float thresholds.

use super::{ValidationReport, Validator};
use crate::constants::{ASN_MAX, ASN_MIN};
use crate::errors::{FloatParseError, ValidationError};
use crate::value::{ConfigValue, ValueKind};
use std::sync::Arc;

/// Validate a 4-byte autonomous system number written as a string
pub fn valid_4_byte_asn(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    let Ok(asn) = value.parse::<i64>() else {
        return ValidationReport::from_error(ValidationError::parse(format!(
            "{key:?} ({value:?}) must be a 64-bit integer"
        )));
    };

    if !(ASN_MIN..=ASN_MAX).contains(&asn) {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} ({value:?}) must be in the range {ASN_MIN} to {ASN_MAX}"
        )));
    }

    ValidationReport::new()
}

/// True for `inf` / `infinity` in any case, optionally signed
fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse a float, reporting overflow instead of rounding it to infinity
fn parse_float(value: &str) -> Result<f64, FloatParseError> {
    let parsed = value.parse::<f64>()?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(FloatParseError::OutOfRange);
    }
    Ok(parsed)
}

/// Validate a string field holding a float or nothing at all
///
/// Some arguments take a floating point value or an unspecified, empty field.
pub fn valid_type_string_nullable_float(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if value.is_empty() {
        return ValidationReport::new();
    }

    if let Err(e) = parse_float(value) {
        return ValidationReport::from_error(ValidationError::parse(format!(
            "{key}: cannot parse '{value}' as float: {e}"
        )));
    }

    ValidationReport::new()
}

/// Validator accepting floats strictly greater than `threshold`
#[must_use]
pub fn float_greater_than(threshold: f64) -> Validator {
    Arc::new(move |value: &ConfigValue, key: &str| {
        let Some(v) = value.as_float() else {
            return ValidationReport::type_mismatch(key, ValueKind::Float);
        };

        if v <= threshold {
            return ValidationReport::from_error(ValidationError::constraint(format!(
                "expected {key} to be greater than ({threshold:.6}), got {v:.6}"
            )));
        }

        ValidationReport::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asn_range() {
        for valid in ["0", "64512", "4294967295", "+7"] {
            assert!(
                valid_4_byte_asn(&valid.into(), "asn").is_ok(),
                "ASN '{valid}' should be valid"
            );
        }
        assert_eq!(
            valid_4_byte_asn(&"4294967296".into(), "asn").errors[0].to_string(),
            "\"asn\" (\"4294967296\") must be in the range 0 to 4294967295"
        );
        assert!(!valid_4_byte_asn(&"-1".into(), "asn").is_ok());
        assert_eq!(
            valid_4_byte_asn(&"sixty".into(), "asn").errors[0].to_string(),
            "\"asn\" (\"sixty\") must be a 64-bit integer"
        );
    }

    #[test]
    fn test_nullable_float() {
        assert!(valid_type_string_nullable_float(&"".into(), "ratio").is_ok());
        assert!(valid_type_string_nullable_float(&"1.5".into(), "ratio").is_ok());
        assert!(valid_type_string_nullable_float(&"-3".into(), "ratio").is_ok());

        let report = valid_type_string_nullable_float(&"abc".into(), "ratio");
        assert_eq!(
            report.errors[0].to_string(),
            "ratio: cannot parse 'abc' as float: invalid float literal"
        );

        let report = valid_type_string_nullable_float(&ConfigValue::Float(1.5), "ratio");
        assert_eq!(
            report.errors[0].to_string(),
            "expected type of ratio to be string"
        );
    }

    #[test]
    fn test_nullable_float_out_of_range() {
        for overflow in ["1e400", "-1e400", "+2e308"] {
            assert_eq!(
                valid_type_string_nullable_float(&overflow.into(), "ratio").errors[0].to_string(),
                format!("ratio: cannot parse '{overflow}' as float: value out of range")
            );
        }
        for infinity in ["inf", "-Infinity", "+INF"] {
            assert!(
                valid_type_string_nullable_float(&infinity.into(), "ratio").is_ok(),
                "'{infinity}' should be accepted"
            );
        }
        assert!(valid_type_string_nullable_float(&"1.7976931348623157e308".into(), "ratio").is_ok());
    }

    #[test]
    fn test_float_greater_than() {
        let validator = float_greater_than(0.5);
        assert!(validator(&ConfigValue::Float(0.75), "weight").is_ok());
        assert_eq!(
            validator(&ConfigValue::Float(0.5), "weight").errors[0].to_string(),
            "expected weight to be greater than (0.500000), got 0.500000"
        );
        assert_eq!(
            validator(&ConfigValue::from("1.0"), "weight").errors[0].to_string(),
            "expected type of weight to be float"
        );
        assert!(!validator(&ConfigValue::Int(2), "weight").is_ok());
    }
}
