//! Common test utilities for validator integration tests
//!
//! Provides small helpers to build values and read reports.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::sync::Arc;
use verify::prelude::*;

/// Error messages of a report, in order
pub fn error_messages(report: &ValidationReport) -> Vec<String> {
    report.errors.iter().map(ToString::to_string).collect()
}

/// Run a key-form validator against a string value
pub fn check(validator: fn(&ConfigValue, &str) -> ValidationReport, value: &str) -> ValidationReport {
    validator(&ConfigValue::from(value), "field")
}

/// Diagnostic validator that always reports one error
pub fn failing_diag(summary: &'static str) -> DiagValidator {
    Arc::new(move |_: &ConfigValue, path: &AttributePath| {
        vec![Diagnostic {
            severity: Severity::Error,
            summary: summary.to_string(),
            detail: String::new(),
            attribute_path: path.clone(),
        }]
    })
}

/// Diagnostic validator that never reports anything
pub fn passing_diag() -> DiagValidator {
    Arc::new(|_: &ConfigValue, _: &AttributePath| Diagnostics::new())
}
