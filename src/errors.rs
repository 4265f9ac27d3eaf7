//! # Error Types
//!
//! Errors reported by validators and the parsers they rely on.
//!
//! The `Display` output of [`ValidationError`] is surfaced verbatim to end
//! users by the host tool, so message text is part of the contract.

use crate::value::ValueKind;
use thiserror::Error;

/// A single validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was not of the primitive kind the validator accepts
    #[error("expected type of {key} to be {expected}")]
    TypeMismatch {
        /// Field key being validated
        key: String,
        /// Kind the validator accepts
        expected: ValueKind,
    },

    /// The value is syntactically malformed (ARN, CIDR, duration, timestamp, JSON/YAML)
    #[error("{0}")]
    Parse(String),

    /// The value is well-formed but violates a range, shape or canonical-form rule
    #[error("{0}")]
    Constraint(String),
}

impl ValidationError {
    pub(crate) fn type_mismatch(key: &str, expected: ValueKind) -> Self {
        ValidationError::TypeMismatch {
            key: key.to_owned(),
            expected,
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        ValidationError::Parse(message.into())
    }

    pub(crate) fn constraint(message: impl Into<String>) -> Self {
        ValidationError::Constraint(message.into())
    }
}

/// Failure to split a string into ARN sections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArnParseError {
    #[error("arn: invalid prefix")]
    InvalidPrefix,

    #[error("arn: not enough sections")]
    NotEnoughSections,
}

/// Failure to parse an `ADDR/PREFIX` CIDR string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid CIDR address: {0}")]
pub struct CidrParseError(pub String);

/// Failure to parse a duration string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("time: invalid duration {0:?}")]
    Invalid(String),

    #[error("time: missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("time: unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognised unit text
        unit: String,
        /// The full input
        input: String,
    },
}

/// Failure to parse an RFC3339 timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampParseError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    /// Date and time must be joined by an uppercase `T` and a UTC offset written as `Z`
    #[error("input contains invalid characters")]
    Separator,

    #[error("second out of range")]
    LeapSecond,
}

/// Failure to parse a float carried in a string field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FloatParseError {
    #[error(transparent)]
    Syntax(#[from] std::num::ParseFloatError),

    /// Finite in writing but beyond the range of `f64`
    #[error("value out of range")]
    OutOfRange,
}
