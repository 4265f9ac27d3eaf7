//! # Check Command
//!
//! Command to validate a single value.

use anyhow::{Context, Result};
use tracing::info;
use verify::registry;
use verify::value::ConfigValue;

/// Validate one value, printing warnings and errors
///
/// Returns `false` when the validator reported any error.
pub fn check_command(validator_name: &str, raw: &str, key: &str, json: bool) -> Result<bool> {
    let validator = registry::lookup(validator_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown validator '{validator_name}'.\n\n\
            Run 'verifyctl list' to see available validators."
        )
    })?;

    let value = if json {
        serde_json::from_str::<ConfigValue>(raw)
            .with_context(|| format!("Failed to parse value as JSON: {raw}"))?
    } else {
        ConfigValue::from(raw)
    };

    info!(validator = validator_name, key, "checking value");
    let report = validator(&value, key);

    for warning in &report.warnings {
        println!("Warning: {warning}");
    }
    for error in &report.errors {
        println!("Error: {error}");
    }

    if report.is_ok() {
        println!("✅ {key}: valid");
    }

    Ok(report.is_ok())
}
