//! # Batch Validation
//!
//! Runs many validators in one pass from a YAML or JSON document:
//!
//! ```yaml
//! - validator: valid_account_id
//!   key: account_id
//!   value: "123456789012"
//! - validator: valid_ipv4_cidr_network_address
//!   key: cidr_block
//!   value: 10.0.0.0/16
//! ```
//!
//! `key` defaults to `value`. Every entry is resolved before any runs, so a
//! document naming an unknown validator fails as a whole.

use crate::constants::DEFAULT_FIELD_KEY;
use crate::diag::{has_error, to_diag, AttributePath, Diagnostics};
use crate::registry;
use crate::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading or resolving a batch document
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read batch file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse batch document as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse batch document as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown validator '{0}'")]
    UnknownValidator(String),
}

/// Document format of a batch file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Yaml,
}

impl BatchFormat {
    /// `.json` files are JSON, everything else is YAML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BatchFormat::Json,
            _ => BatchFormat::Yaml,
        }
    }
}

fn default_key() -> String {
    DEFAULT_FIELD_KEY.to_owned()
}

/// One value to validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Registered validator name
    pub validator: String,
    /// Field key reported in messages
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default)]
    pub value: ConfigValue,
}

/// Result of one batch entry
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub entry: BatchEntry,
    pub diagnostics: Diagnostics,
}

impl BatchOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        !has_error(&self.diagnostics)
    }
}

/// Parse batch entries from document text
///
/// # Errors
///
/// Returns [`BatchError::Json`] or [`BatchError::Yaml`] for malformed documents.
pub fn parse_batch(content: &str, format: BatchFormat) -> Result<Vec<BatchEntry>, BatchError> {
    let entries = match format {
        BatchFormat::Json => serde_json::from_str(content)?,
        BatchFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(entries)
}

/// Load batch entries from a file
///
/// # Errors
///
/// Returns [`BatchError::Io`] when the file cannot be read, or a parse error.
pub fn load_batch(path: &Path) -> Result<Vec<BatchEntry>, BatchError> {
    let content = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&content, BatchFormat::from_path(path))
}

/// Run every entry through its validator
///
/// Each value is reported at the top-level attribute named by its key.
///
/// # Errors
///
/// Returns [`BatchError::UnknownValidator`] if any entry names an unregistered
/// validator; nothing is run in that case.
pub fn run_batch(entries: &[BatchEntry]) -> Result<Vec<BatchOutcome>, BatchError> {
    let validators = entries
        .iter()
        .map(|entry| {
            registry::lookup(&entry.validator)
                .ok_or_else(|| BatchError::UnknownValidator(entry.validator.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let outcomes = entries
        .iter()
        .zip(validators)
        .map(|(entry, validator)| {
            let path = AttributePath::root(&entry.key);
            let diagnostics = to_diag(validator)(&entry.value, &path);
            debug!(
                validator = %entry.validator,
                key = %entry.key,
                diagnostics = diagnostics.len(),
                "batch entry validated"
            );
            BatchOutcome {
                entry: entry.clone(),
                diagnostics,
            }
        })
        .collect();

    Ok(outcomes)
}
