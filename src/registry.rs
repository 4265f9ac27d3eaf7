//! # Validator Registry
//!
//! Looks validators up by name so they can be selected from the command line
//! or from batch documents.

use crate::validation::{
    is_ipv4_cidr_block_or_ipv6_cidr_block, valid_4_byte_asn, valid_account_id, valid_arn,
    valid_cidr_network_address, valid_duration, valid_iam_policy_json,
    valid_ipv4_cidr_network_address, valid_ipv6_cidr_network_address, valid_kms_key_id,
    valid_launch_template_id, valid_launch_template_name, valid_multicast_ip_address,
    valid_once_a_day_window_format, valid_once_a_week_window_format, valid_region_name,
    valid_string_date_or_positive_int, valid_string_is_json_or_yaml,
    valid_type_string_nullable_float, valid_utc_timestamp, ValidationReport, Validator,
};
use crate::value::ConfigValue;
use std::sync::Arc;
use tracing::debug;

type ValidateFn = fn(&ConfigValue, &str) -> ValidationReport;

/// Name of the combined IPv4-or-IPv6 CIDR validator
pub const IPV4_OR_IPV6_CIDR: &str = "ipv4_or_ipv6_cidr";

const BUILTIN: &[(&str, ValidateFn)] = &[
    ("valid_4_byte_asn", valid_4_byte_asn),
    ("valid_account_id", valid_account_id),
    ("valid_arn", valid_arn),
    ("valid_cidr_network_address", valid_cidr_network_address),
    ("valid_duration", valid_duration),
    ("valid_iam_policy_json", valid_iam_policy_json),
    ("valid_ipv4_cidr_network_address", valid_ipv4_cidr_network_address),
    ("valid_ipv6_cidr_network_address", valid_ipv6_cidr_network_address),
    ("valid_kms_key_id", valid_kms_key_id),
    ("valid_launch_template_id", valid_launch_template_id),
    ("valid_launch_template_name", valid_launch_template_name),
    ("valid_multicast_ip_address", valid_multicast_ip_address),
    ("valid_once_a_day_window_format", valid_once_a_day_window_format),
    ("valid_once_a_week_window_format", valid_once_a_week_window_format),
    ("valid_region_name", valid_region_name),
    ("valid_string_date_or_positive_int", valid_string_date_or_positive_int),
    ("valid_string_is_json_or_yaml", valid_string_is_json_or_yaml),
    ("valid_type_string_nullable_float", valid_type_string_nullable_float),
    ("valid_utc_timestamp", valid_utc_timestamp),
];

fn accept_all(_: &ConfigValue, _: &str) -> ValidationReport {
    ValidationReport::new()
}

/// Resolve a validator by name
///
/// Returns `None` for unknown names.
#[must_use]
pub fn lookup(name: &str) -> Option<Validator> {
    if name == IPV4_OR_IPV6_CIDR {
        return Some(is_ipv4_cidr_block_or_ipv6_cidr_block(
            Arc::new(accept_all),
            Arc::new(accept_all),
        ));
    }

    let found = BUILTIN
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|&(_, f)| -> Validator { Arc::new(f) });
    if found.is_none() {
        debug!(name, "unknown validator");
    }
    found
}

/// All registered validator names, sorted
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN.iter().map(|(name, _)| *name).collect();
    names.push(IPV4_OR_IPV6_CIDR);
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            assert!(lookup(name).is_some(), "Validator '{name}' should resolve");
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(lookup("valid_nothing").is_none());
    }

    #[test]
    fn test_lookup_runs_the_named_validator() {
        let validator = lookup("valid_account_id").unwrap();
        assert!(validator(&"123456789012".into(), "account_id").is_ok());
        assert!(!validator(&"nope".into(), "account_id").is_ok());

        let cidr = lookup(IPV4_OR_IPV6_CIDR).unwrap();
        assert!(cidr(&"2001:db8::/48".into(), "cidr").is_empty());
    }
}
