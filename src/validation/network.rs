//! # IP Address Validation

use super::ValidationReport;
use crate::errors::ValidationError;
use crate::value::{ConfigValue, ValueKind};
use std::net::IpAddr;

fn validate_multicast_ip_address(s: &str) -> Result<(), ValidationError> {
    let Ok(ip) = s.parse::<IpAddr>() else {
        return Err(ValidationError::parse(format!(
            "{s:?} is not a valid IP address"
        )));
    };

    // IPv4-mapped IPv6 addresses are judged by their IPv4 form
    if !ip.to_canonical().is_multicast() {
        return Err(ValidationError::constraint(format!(
            "{s:?} is not a valid multicast address"
        )));
    }

    Ok(())
}

/// Validate that the value is a multicast IP address (224.0.0.0/4 or ff00::/8)
pub fn valid_multicast_ip_address(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_multicast_ip_address(value).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multicast_addresses() {
        for valid in ["224.0.0.1", "239.255.255.255", "ff02::1", "::ffff:224.0.0.1"] {
            assert!(
                valid_multicast_ip_address(&valid.into(), "group_ip").is_ok(),
                "'{valid}' should be multicast"
            );
        }
    }

    #[test]
    fn test_non_multicast_addresses() {
        let report = valid_multicast_ip_address(&"10.0.0.1".into(), "group_ip");
        assert_eq!(
            report.errors[0].to_string(),
            "\"10.0.0.1\" is not a valid multicast address"
        );

        let report = valid_multicast_ip_address(&"not-an-ip".into(), "group_ip");
        assert_eq!(
            report.errors[0].to_string(),
            "\"not-an-ip\" is not a valid IP address"
        );
    }
}
