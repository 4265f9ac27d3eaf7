//! # Batch Document Tests
//!
//! Tests loading batch documents from disk and running them through the
//! validator registry.

use std::io::Write;
use tempfile::NamedTempFile;
use verify::batch::{load_batch, run_batch, BatchError};
use verify::prelude::*;
use verify::registry;

fn write_batch(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write batch document");
    file
}

#[test]
fn test_load_yaml_batch() {
    let file = write_batch(
        ".yaml",
        r#"
- validator: valid_account_id
  key: account_id
  value: "123456789012"
- validator: valid_ipv4_cidr_network_address
  key: cidr_block
  value: 10.0.0.1/16
- validator: valid_once_a_week_window_format
  value: Mon:01:00-Mon:02:00
"#,
    );

    let entries = load_batch(file.path()).expect("Failed to load batch");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].key, "value");

    let outcomes = run_batch(&entries).expect("Failed to run batch");
    let passed: Vec<bool> = outcomes.iter().map(|o| o.passed()).collect();
    assert_eq!(passed, vec![true, false, true]);
    assert_eq!(
        outcomes[1].diagnostics[0].summary,
        "\"10.0.0.1/16\" is not a valid IPv4 CIDR block; did you mean \"10.0.0.0/16\"?"
    );
    assert_eq!(
        outcomes[1].diagnostics[0].attribute_path,
        AttributePath::root("cidr_block")
    );
}

#[test]
fn test_load_json_batch_with_typed_values() {
    let file = write_batch(
        ".json",
        r#"[
            {"validator": "valid_4_byte_asn", "key": "asn", "value": "64512"},
            {"validator": "valid_4_byte_asn", "key": "asn", "value": 64512}
        ]"#,
    );

    let entries = load_batch(file.path()).expect("Failed to load batch");
    assert_eq!(entries[1].value, ConfigValue::Int(64512));

    let outcomes = run_batch(&entries).expect("Failed to run batch");
    assert!(outcomes[0].passed());
    assert!(!outcomes[1].passed());
    assert_eq!(
        outcomes[1].diagnostics[0].summary,
        "expected type of asn to be string"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.yaml");

    let error = load_batch(&path).unwrap_err();
    assert!(matches!(error, BatchError::Io { .. }));
    assert!(error.to_string().contains("missing.yaml"));
}

#[test]
fn test_malformed_json_is_json_error() {
    let file = write_batch(".json", "[{\"validator\": ");
    assert!(matches!(load_batch(file.path()), Err(BatchError::Json(_))));
}

#[test]
fn test_unknown_validator_fails_whole_batch() {
    let file = write_batch(
        ".yml",
        "- validator: valid_region_name\n  value: us-east-1\n- validator: valid_colour\n  value: red\n",
    );
    let entries = load_batch(file.path()).expect("Failed to load batch");

    let error = run_batch(&entries).unwrap_err();
    assert_eq!(error.to_string(), "unknown validator 'valid_colour'");
}

#[test]
fn test_every_registered_name_resolves() {
    for name in registry::names() {
        assert!(registry::lookup(name).is_some(), "'{name}' should resolve");
    }
    assert!(registry::lookup("no_such_validator").is_none());
}
