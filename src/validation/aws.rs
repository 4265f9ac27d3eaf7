//! # AWS Identifier Validation
//!
//! Validates account IDs, KMS key identifiers, launch template IDs/names and
//! region names per the AWS API constraints.

use super::patterns::{
    ACCOUNT_NUMBER_REGEX, LAUNCH_TEMPLATE_ID_REGEX, LAUNCH_TEMPLATE_NAME_REGEX, REGION_REGEX,
};
use super::ValidationReport;
use crate::constants::{
    KMS_KEY_ID_MAX_LENGTH, LAUNCH_TEMPLATE_ID_MAX_LENGTH, LAUNCH_TEMPLATE_NAME_MAX_LENGTH,
    LAUNCH_TEMPLATE_NAME_MIN_LENGTH, LAUNCH_TEMPLATE_NAME_PREFIX_MAX_LENGTH,
};
use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};

/// Validate an AWS account ID: exactly 12 digits
/// Reference: http://docs.aws.amazon.com/lambda/latest/dg/API_AddPermission.html
pub fn valid_account_id(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if !ACCOUNT_NUMBER_REGEX.is_match(value) {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} doesn't look like AWS Account ID (exactly 12 digits): {value:?}"
        )));
    }

    ValidationReport::new()
}

/// Validate a KMS key identifier
///
/// Key IDs, key ARNs, alias names and alias ARNs are all accepted. There is no
/// guarantee about the format of a key ID beyond a length of 1 to 2048.
/// Reference: https://docs.aws.amazon.com/kms/latest/developerguide/concepts.html#key-id
pub fn valid_kms_key_id(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if value.is_empty() {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} cannot be shorter than 1 character"
        )));
    }
    if value.len() > KMS_KEY_ID_MAX_LENGTH {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} cannot be longer than {KMS_KEY_ID_MAX_LENGTH} characters"
        )));
    }

    ValidationReport::new()
}

/// Validate a launch template ID (`lt-` followed by lowercase alphanumerics)
pub fn valid_launch_template_id(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    let error = if value.is_empty() {
        Some(format!("{key:?} cannot be shorter than 1 character"))
    } else if value.len() > LAUNCH_TEMPLATE_ID_MAX_LENGTH {
        Some(format!(
            "{key:?} cannot be longer than {LAUNCH_TEMPLATE_ID_MAX_LENGTH} characters"
        ))
    } else if !LAUNCH_TEMPLATE_ID_REGEX.is_match(value) {
        Some(format!(
            "{key:?} must begin with 'lt-' and be comprised of only alphanumeric characters: {value}"
        ))
    } else {
        None
    };

    error
        .map(|e| ValidationReport::from_error(ValidationError::constraint(e)))
        .unwrap_or_default()
}

/// Validate a launch template name or name prefix
///
/// Names are limited to 125 characters. A key ending in `prefix` is limited to
/// 99 so a generated suffix still fits.
pub fn valid_launch_template_name(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    let is_prefix = key.ends_with("prefix");
    let error = if value.len() < LAUNCH_TEMPLATE_NAME_MIN_LENGTH {
        Some(format!(
            "{key:?} cannot be less than {LAUNCH_TEMPLATE_NAME_MIN_LENGTH} characters"
        ))
    } else if is_prefix && value.len() > LAUNCH_TEMPLATE_NAME_PREFIX_MAX_LENGTH {
        Some(format!(
            "{key:?} cannot be longer than {LAUNCH_TEMPLATE_NAME_PREFIX_MAX_LENGTH} characters, name is limited to {LAUNCH_TEMPLATE_NAME_MAX_LENGTH}"
        ))
    } else if !is_prefix && value.len() > LAUNCH_TEMPLATE_NAME_MAX_LENGTH {
        Some(format!(
            "{key:?} cannot be longer than {LAUNCH_TEMPLATE_NAME_MAX_LENGTH} characters"
        ))
    } else if !LAUNCH_TEMPLATE_NAME_REGEX.is_match(value) {
        Some(format!(
            "{key:?} can only alphanumeric characters and ()./_- symbols"
        ))
    } else {
        None
    };

    error
        .map(|e| ValidationReport::from_error(ValidationError::constraint(e)))
        .unwrap_or_default()
}

/// Validate a region name; an empty value is accepted
/// Reference: https://docs.aws.amazon.com/general/latest/gr/rande.html
pub fn valid_region_name(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };

    if value.is_empty() {
        return ValidationReport::new();
    }

    if !REGION_REGEX.is_match(value) {
        return ValidationReport::from_error(ValidationError::constraint(format!(
            "{key:?} region name is malformed({:?}): {value:?}",
            REGION_REGEX.as_str()
        )));
    }

    ValidationReport::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_error(report: &ValidationReport) -> String {
        report.errors.first().map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_account_id() {
        assert!(valid_account_id(&"123456789012".into(), "account_id").is_ok());
        for invalid in ["12345678901", "1234567890123", "12345678901a", "", " 123456789012"] {
            assert!(
                !valid_account_id(&invalid.into(), "account_id").is_ok(),
                "Account ID '{invalid}' should be invalid"
            );
        }
        assert_eq!(
            first_error(&valid_account_id(&"abc".into(), "account_id")),
            "\"account_id\" doesn't look like AWS Account ID (exactly 12 digits): \"abc\""
        );
    }

    #[test]
    fn test_kms_key_id_lengths() {
        assert!(valid_kms_key_id(&"alias/my-key".into(), "kms_key_id").is_ok());
        assert!(valid_kms_key_id(&"a".repeat(2048).into(), "kms_key_id").is_ok());
        assert_eq!(
            first_error(&valid_kms_key_id(&"".into(), "kms_key_id")),
            "\"kms_key_id\" cannot be shorter than 1 character"
        );
        assert_eq!(
            first_error(&valid_kms_key_id(&"a".repeat(2049).into(), "kms_key_id")),
            "\"kms_key_id\" cannot be longer than 2048 characters"
        );
    }

    #[test]
    fn test_launch_template_id() {
        assert!(valid_launch_template_id(&"lt-0123abcd".into(), "id").is_ok());
        assert!(!valid_launch_template_id(&"lt-ABC".into(), "id").is_ok());
        assert!(!valid_launch_template_id(&"template".into(), "id").is_ok());
        assert!(!valid_launch_template_id(&"".into(), "id").is_ok());
        let too_long = format!("lt-{}", "a".repeat(253));
        assert_eq!(
            first_error(&valid_launch_template_id(&too_long.into(), "id")),
            "\"id\" cannot be longer than 255 characters"
        );
    }

    #[test]
    fn test_launch_template_name_limits_depend_on_key() {
        let name_110 = "a".repeat(110);
        assert!(valid_launch_template_name(&name_110.clone().into(), "name").is_ok());
        assert_eq!(
            first_error(&valid_launch_template_name(&name_110.into(), "name_prefix")),
            "\"name_prefix\" cannot be longer than 99 characters, name is limited to 125"
        );
        assert_eq!(
            first_error(&valid_launch_template_name(&"a".repeat(126).into(), "name")),
            "\"name\" cannot be longer than 125 characters"
        );
        assert_eq!(
            first_error(&valid_launch_template_name(&"ab".into(), "name")),
            "\"name\" cannot be less than 3 characters"
        );
    }

    #[test]
    fn test_launch_template_name_characters() {
        assert!(valid_launch_template_name(&"my-template_(v1.0)/a".into(), "name").is_ok());
        assert_eq!(
            first_error(&valid_launch_template_name(&"my template".into(), "name")),
            "\"name\" can only alphanumeric characters and ()./_- symbols"
        );
    }

    #[test]
    fn test_region_name() {
        for region in ["", "us-east-1", "eu-west-2", "us-gov-west-1", "cn-north-1", "ap-southeast-2"] {
            assert!(
                valid_region_name(&region.into(), "region").is_ok(),
                "Region '{region}' should be valid"
            );
        }
        for region in ["us-east", "US-EAST-1", "useast1", "us-east-10", "local"] {
            assert!(
                !valid_region_name(&region.into(), "region").is_ok(),
                "Region '{region}' should be invalid"
            );
        }
        assert_eq!(
            first_error(&valid_region_name(&"nowhere".into(), "region")),
            "\"region\" region name is malformed(\"^[a-z]{2}(-[a-z]+)+-\\\\d$\"): \"nowhere\""
        );
    }
}
