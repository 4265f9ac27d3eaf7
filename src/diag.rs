//! # Diagnostics
//!
//! The path-aware validator form used by the host schema framework, plus the
//! two combinators that compose diagnostic validators.
//!
//! - [`to_diag`] adapts a key-based validator into a diagnostic validator
//! - [`valid_all_diag`] runs every validator and concatenates their diagnostics
//! - [`valid_any_diag`] succeeds as soon as one validator reports nothing

use crate::validation::Validator;
use crate::value::ConfigValue;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("Error"),
            Severity::Warning => f.write_str("Warning"),
        }
    }
}

/// One step into a configuration value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Named attribute of an object/block
    Attribute(String),
    /// Key into a map
    Key(String),
    /// Index into a list
    Index(i64),
}

/// Location of a value inside the configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttributePath(pub Vec<PathStep>);

impl AttributePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path to a top-level attribute
    #[must_use]
    pub fn root(name: &str) -> Self {
        AttributePath(vec![PathStep::Attribute(name.to_owned())])
    }

    #[must_use]
    pub fn attribute(mut self, name: &str) -> Self {
        self.0.push(PathStep::Attribute(name.to_owned()));
        self
    }

    #[must_use]
    pub fn key(mut self, key: &str) -> Self {
        self.0.push(PathStep::Key(key.to_owned()));
        self
    }

    #[must_use]
    pub fn index(mut self, index: i64) -> Self {
        self.0.push(PathStep::Index(index));
        self
    }

    /// Name of the last attribute step, if any
    ///
    /// Used as the practitioner-facing key when adapting key-based validators.
    #[must_use]
    pub fn last_attribute(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|step| match step {
            PathStep::Attribute(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A warning or error tied to a configuration path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub attribute_path: AttributePath,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        if !self.attribute_path.0.is_empty() {
            write!(f, " (at {})", self.attribute_path)?;
        }
        Ok(())
    }
}

pub type Diagnostics = Vec<Diagnostic>;

/// Validator in diagnostic form: `(value, path) -> diagnostics`
pub type DiagValidator = Arc<dyn Fn(&ConfigValue, &AttributePath) -> Diagnostics + Send + Sync>;

/// True when any diagnostic is an error
#[must_use]
pub fn has_error(diags: &[Diagnostic]) -> bool {
    diags.iter().any(|d| d.severity == Severity::Error)
}

/// Adapt a key-based validator into diagnostic form
///
/// The key handed to the validator is the last attribute name on the path
/// (empty if there is none). Warnings become [`Severity::Warning`] and errors
/// [`Severity::Error`], each carrying the full path.
#[must_use]
pub fn to_diag(validator: Validator) -> DiagValidator {
    Arc::new(move |value: &ConfigValue, path: &AttributePath| {
        let key = path.last_attribute().unwrap_or_default();
        let report = validator(value, key);

        let warnings = report.warnings.into_iter().map(|w| Diagnostic {
            severity: Severity::Warning,
            summary: w,
            detail: String::new(),
            attribute_path: path.clone(),
        });
        let errors = report.errors.into_iter().map(|e| Diagnostic {
            severity: Severity::Error,
            summary: e.to_string(),
            detail: String::new(),
            attribute_path: path.clone(),
        });
        warnings.chain(errors).collect()
    })
}

/// Run every validator and concatenate all diagnostics
///
/// Never short-circuits: later validators run even after earlier failures.
#[must_use]
pub fn valid_all_diag(validators: Vec<DiagValidator>) -> DiagValidator {
    Arc::new(move |value: &ConfigValue, path: &AttributePath| {
        let mut results = Diagnostics::new();
        for validator in &validators {
            results.extend(validator(value, path));
        }
        results
    })
}

/// Succeed as soon as one validator reports no diagnostics
///
/// Diagnostics gathered from earlier failing validators are discarded on
/// success. If every validator fails, the union of their diagnostics is
/// returned.
#[must_use]
pub fn valid_any_diag(validators: Vec<DiagValidator>) -> DiagValidator {
    Arc::new(move |value: &ConfigValue, path: &AttributePath| {
        let mut results = Diagnostics::new();
        for (i, validator) in validators.iter().enumerate() {
            let diags = validator(value, path);
            if diags.is_empty() {
                debug!(path = %path, validator = i, "valid_any_diag satisfied");
                return Diagnostics::new();
            }
            results.extend(diags);
        }
        results
    })
}
