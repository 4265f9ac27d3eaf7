//! # Shared Patterns
//!
//! Regular expressions compiled once and shared read-only by all validators.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Compile with Unicode classes off so `\d` stays ASCII-only
fn ascii(pattern: &str, name: &str) -> Regex {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .unwrap_or_else(|e| panic!("Failed to compile {name} - this should never happen: {e}"))
}

/// ARN account ID section: AWS-owned aliases or a 12 digit account number
pub static ACCOUNT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^(aws|aws-managed|third-party|\d{12})$", "ACCOUNT_ID_REGEX")
});

/// ARN partition: `aws`, `aws-cn`, `aws-us-gov`, `aws-iso-b`, ...
pub static PARTITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^aws(-[a-z]+)*$", "PARTITION_REGEX")
});

/// Region code: `us-east-1`, `us-gov-west-1`, `cn-north-1`, ...
pub static REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^[a-z]{2}(-[a-z]+)+-\d$", "REGION_REGEX")
});

pub(crate) static ACCOUNT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^\d{12}$", "ACCOUNT_NUMBER_REGEX")
});

pub(crate) static LAUNCH_TEMPLATE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^lt-[a-z0-9]+$", "LAUNCH_TEMPLATE_ID_REGEX")
});

pub(crate) static LAUNCH_TEMPLATE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^[0-9a-zA-Z()./_\-]+$", "LAUNCH_TEMPLATE_NAME_REGEX")
});

// "hh24:mi"
const TIME_OF_DAY: &str = "([0-1][0-9]|2[0-3]):([0-5][0-9])";
// "ddd:hh24:mi"
const TIME_OF_WEEK: &str = "(sun|mon|tue|wed|thu|fri|sat):([0-1][0-9]|2[0-3]):([0-5][0-9])";

pub(crate) static ONCE_A_DAY_WINDOW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(&format!("^({TIME_OF_DAY}-{TIME_OF_DAY}|)$"), "ONCE_A_DAY_WINDOW_REGEX")
});

pub(crate) static ONCE_A_WEEK_WINDOW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(&format!("^({TIME_OF_WEEK}-{TIME_OF_WEEK}|)$"), "ONCE_A_WEEK_WINDOW_REGEX")
});

pub(crate) static POSITIVE_INT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^\d+$", "POSITIVE_INT_REGEX")
});

/// Leading blanks are tab, newline, form feed, carriage return and space; a
/// vertical tab does not count
pub(crate) static LOOKS_LIKE_JSON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    ascii(r"^[\t\n\f\r ]*\{", "LOOKS_LIKE_JSON_REGEX")
});
