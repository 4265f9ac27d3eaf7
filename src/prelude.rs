//! # Prelude
//!
//! Re-exports commonly used types for convenience.
//!
//! ```rust
//! use verify::prelude::*;
//!
//! let check = valid_all_diag(vec![
//!     to_diag(std::sync::Arc::new(valid_region_name)),
//!     to_diag(std::sync::Arc::new(valid_kms_key_id)),
//! ]);
//! let diags = check(&ConfigValue::from("us-east-1"), &AttributePath::root("region"));
//! assert!(diags.is_empty());
//! ```

pub use crate::arn::Arn;
pub use crate::diag::{
    to_diag, valid_all_diag, valid_any_diag, AttributePath, DiagValidator, Diagnostic,
    Diagnostics, PathStep, Severity,
};
pub use crate::errors::ValidationError;
pub use crate::validation::*;
pub use crate::value::{ConfigValue, ValueKind};
