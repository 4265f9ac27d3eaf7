//! # Property Tests
//!
//! Property-based checks for validators whose accepted language is simple
//! enough to generate directly.

use proptest::prelude::*;
use verify::prelude::*;

fn check(validator: fn(&ConfigValue, &str) -> ValidationReport, value: &str) -> ValidationReport {
    validator(&ConfigValue::from(value), "field")
}

proptest! {
    #[test]
    fn twelve_digit_strings_are_account_ids(id in "[0-9]{12}") {
        prop_assert!(check(valid_account_id, &id).is_ok());
    }

    #[test]
    fn other_lengths_are_not_account_ids(id in "[0-9]{0,11}|[0-9]{13,20}") {
        prop_assert!(!check(valid_account_id, &id).is_ok());
    }

    #[test]
    fn day_windows_within_the_clock_are_valid(
        h1 in 0u32..24, m1 in 0u32..60, h2 in 0u32..24, m2 in 0u32..60,
    ) {
        let window = format!("{h1:02}:{m1:02}-{h2:02}:{m2:02}");
        prop_assert!(check(valid_once_a_day_window_format, &window).is_ok());
    }

    #[test]
    fn masked_ipv4_networks_are_canonical(a: u8, b: u8, c: u8, d: u8, prefix in 0u8..=32) {
        let raw = u32::from_be_bytes([a, b, c, d]);
        let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
        let network = std::net::Ipv4Addr::from(raw & mask);
        let cidr = format!("{network}/{prefix}");

        prop_assert!(validate_ipv4_cidr_block(&cidr).is_ok());
        prop_assert!(validate_ipv6_cidr_block(&cidr).is_err());
        prop_assert!(cidr_blocks_equal(&cidr, &cidr));
    }

    #[test]
    fn asns_in_range_are_valid(asn in 0u64..=4_294_967_295) {
        prop_assert!(check(valid_4_byte_asn, &asn.to_string()).is_ok());
    }

    #[test]
    fn positive_integers_satisfy_date_or_int(n in 0u64..u64::MAX) {
        prop_assert!(check(valid_string_date_or_positive_int, &n.to_string()).is_empty());
    }
}
