//! # Constants
//!
//! Limits and formats shared by the validators.
//!
//! These values mirror the constraints documented by the AWS APIs the
//! validated fields are eventually sent to.

/// Smallest 4-byte autonomous system number
pub const ASN_MIN: i64 = 0;

/// Largest 4-byte autonomous system number
pub const ASN_MAX: i64 = 4_294_967_295;

/// Maximum length of a KMS key identifier (key ID, key ARN, alias name or alias ARN)
pub const KMS_KEY_ID_MAX_LENGTH: usize = 2048;

/// Maximum length of a launch template ID
pub const LAUNCH_TEMPLATE_ID_MAX_LENGTH: usize = 255;

/// Minimum length of a launch template name
pub const LAUNCH_TEMPLATE_NAME_MIN_LENGTH: usize = 3;

/// Maximum length of a launch template name
pub const LAUNCH_TEMPLATE_NAME_MAX_LENGTH: usize = 125;

/// Maximum length of a launch template name prefix
/// A generated unique suffix is appended, and the result is limited to
/// [`LAUNCH_TEMPLATE_NAME_MAX_LENGTH`]
pub const LAUNCH_TEMPLATE_NAME_PREFIX_MAX_LENGTH: usize = 99;

/// RFC3339 layout as shown to users in timestamp errors
pub const RFC3339_LAYOUT: &str = "2006-01-02T15:04:05Z07:00";

/// Default key used by the CLI and batch runner when none is given
pub const DEFAULT_FIELD_KEY: &str = "value";
