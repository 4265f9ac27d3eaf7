//! # CIDR Validation
//!
//! Validates that CIDR blocks parse, belong to the expected address family,
//! and are written as the network's own block (host bits zeroed), e.g.
//! `10.0.0.0/24` rather than `10.0.0.1/24`.

use super::{valid_all, valid_any, ValidationReport, Validator};
use crate::errors::{CidrParseError, ValidationError};
use crate::value::{ConfigValue, ValueKind};
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::Arc;

/// Width of the `::ffff:0:0/96` prefix carrying IPv4-mapped addresses
const IPV4_MAPPED_PREFIX_LEN: u8 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Any,
    V4,
    V6,
}

impl Family {
    fn label(self) -> &'static str {
        match self {
            Family::Any => "",
            Family::V4 => "IPv4 ",
            Family::V6 => "IPv6 ",
        }
    }
}

/// Parse `ADDR/PREFIX` into the address as written and its network
fn parse_cidr(cidr: &str) -> Result<(IpAddr, IpNetwork), CidrParseError> {
    let invalid = || CidrParseError(cidr.to_owned());

    let (addr, prefix) = cidr.split_once('/').ok_or_else(invalid)?;
    let Ok(ip) = addr.parse::<IpAddr>() else {
        return Err(invalid());
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let Ok(prefix) = prefix.parse::<u8>() else {
        return Err(invalid());
    };
    let Ok(block) = IpNetwork::new(ip, prefix) else {
        return Err(invalid());
    };
    let Ok(network) = IpNetwork::new(block.network(), prefix) else {
        return Err(invalid());
    };

    Ok((ip, network))
}

/// True for IPv4 addresses and IPv4-mapped IPv6 addresses
fn reduces_to_ipv4(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => true,
        IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some(),
    }
}

/// Render IPv4-mapped networks in their IPv4 form
fn canonical_network(network: IpNetwork) -> IpNetwork {
    if let IpAddr::V6(v6) = network.network() {
        if let Some(v4) = v6.to_ipv4_mapped() {
            if network.prefix() >= IPV4_MAPPED_PREFIX_LEN {
                if let Ok(mapped) =
                    IpNetwork::new(IpAddr::V4(v4), network.prefix() - IPV4_MAPPED_PREFIX_LEN)
                {
                    return mapped;
                }
            }
        }
    }
    network
}

/// True when both strings parse to the same address and the same network
///
/// Textual differences that do not change meaning (case, IPv6 zero
/// compression) are ignored.
#[must_use]
pub fn cidr_blocks_equal(cidr1: &str, cidr2: &str) -> bool {
    let (Ok((ip1, net1)), Ok((ip2, net2))) = (parse_cidr(cidr1), parse_cidr(cidr2)) else {
        return false;
    };
    ip1.to_canonical() == ip2.to_canonical() && canonical_network(net1) == canonical_network(net2)
}

fn validate_family_cidr_block(cidr: &str, family: Family) -> Result<(), ValidationError> {
    let (ip, network) = parse_cidr(cidr).map_err(|e| {
        ValidationError::parse(format!("{cidr:?} is not a valid CIDR block: {e}"))
    })?;

    let wrong_family = match family {
        Family::Any => false,
        Family::V4 => !reduces_to_ipv4(ip),
        Family::V6 => reduces_to_ipv4(ip),
    };
    if wrong_family {
        return Err(ValidationError::constraint(format!(
            "{cidr:?} is not a valid {}CIDR block",
            family.label()
        )));
    }

    let canonical = canonical_network(network).to_string();
    if !cidr_blocks_equal(cidr, &canonical) {
        return Err(ValidationError::constraint(format!(
            "{cidr:?} is not a valid {}CIDR block; did you mean {canonical:?}?",
            family.label()
        )));
    }

    Ok(())
}

/// Validate that the CIDR block parses and is the block for its network
///
/// # Errors
///
/// Returns a parse error for malformed input and a constraint error naming
/// the network's block when host bits are set.
pub fn validate_cidr_block(cidr: &str) -> Result<(), ValidationError> {
    validate_family_cidr_block(cidr, Family::Any)
}

/// Validate that the CIDR block parses, is IPv4, and is the block for its network
///
/// # Errors
///
/// As [`validate_cidr_block`], plus a constraint error for IPv6 blocks.
pub fn validate_ipv4_cidr_block(cidr: &str) -> Result<(), ValidationError> {
    validate_family_cidr_block(cidr, Family::V4)
}

/// Validate that the CIDR block parses, is IPv6, and is the block for its network
///
/// # Errors
///
/// As [`validate_cidr_block`], plus a constraint error for IPv4 blocks.
pub fn validate_ipv6_cidr_block(cidr: &str) -> Result<(), ValidationError> {
    validate_family_cidr_block(cidr, Family::V6)
}

/// Field validator for a CIDR network address of either family
pub fn valid_cidr_network_address(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_cidr_block(value).into()
}

/// Field validator for an IPv4 CIDR network address
pub fn valid_ipv4_cidr_network_address(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_ipv4_cidr_block(value).into()
}

/// Field validator for an IPv6 CIDR network address
pub fn valid_ipv6_cidr_network_address(value: &ConfigValue, key: &str) -> ValidationReport {
    let Some(value) = value.as_str() else {
        return ValidationReport::type_mismatch(key, ValueKind::String);
    };
    validate_ipv6_cidr_block(value).into()
}

/// Accept either an IPv4 block passing `ipv4_validator` or an IPv6 block
/// passing `ipv6_validator`
#[must_use]
pub fn is_ipv4_cidr_block_or_ipv6_cidr_block(
    ipv4_validator: Validator,
    ipv6_validator: Validator,
) -> Validator {
    let ipv4_block: Validator = Arc::new(valid_ipv4_cidr_network_address);
    let ipv6_block: Validator = Arc::new(valid_ipv6_cidr_network_address);
    valid_any(vec![
        valid_all(vec![ipv4_block, ipv4_validator]),
        valid_all(vec![ipv6_block, ipv6_validator]),
    ])
}
