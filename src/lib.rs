//! Provider Verify Library
//!
//! Field validators for infrastructure-as-code provider schemas. Each
//! validator checks one user-supplied configuration value (ARN, CIDR block,
//! account ID, maintenance window, duration, JSON/YAML document, ...) and
//! reports human-readable warnings and errors before the value is sent to a
//! cloud API.
//!
//! ## Quick Start
//!
//! ```rust
//! use verify::prelude::*;
//!
//! let report = valid_arn(&ConfigValue::from("arn:aws:s3:::my-bucket"), "bucket_arn");
//! assert!(report.is_ok());
//!
//! let report = valid_cidr_network_address(&ConfigValue::from("10.0.0.1/24"), "cidr_block");
//! assert_eq!(
//!     report.errors[0].to_string(),
//!     "\"10.0.0.1/24\" is not a valid CIDR block; did you mean \"10.0.0.0/24\"?"
//! );
//! ```
//!
//! Validators come in two forms:
//! - key form, `(value, key) -> ValidationReport`, see [`validation`]
//! - diagnostic form, `(value, path) -> Diagnostics`, see [`diag`]

pub mod arn;
pub mod batch;
pub mod constants;
pub mod diag;
pub mod duration;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod validation;
pub mod value;
