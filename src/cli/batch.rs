//! # Batch Command
//!
//! Command to validate every entry of a batch document.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use verify::batch::{load_batch, run_batch};

/// Run a batch document, printing one line per entry and its diagnostics
///
/// Returns `false` when any entry failed.
pub fn batch_command(file: &Path) -> Result<bool> {
    let entries = load_batch(file)
        .with_context(|| format!("Failed to load batch document {}", file.display()))?;

    info!(entries = entries.len(), file = %file.display(), "running batch");
    let outcomes = run_batch(&entries).context("Failed to resolve batch validators")?;

    if outcomes.is_empty() {
        println!("No entries found.");
        return Ok(true);
    }

    println!("\n{:<36} {:<30} {:<8}", "VALIDATOR", "KEY", "RESULT");
    println!("{}", "-".repeat(76));

    let mut failed = 0;
    for outcome in &outcomes {
        let result = if outcome.passed() { "ok" } else { "FAILED" };
        println!(
            "{:<36} {:<30} {:<8}",
            outcome.entry.validator, outcome.entry.key, result
        );
        for diagnostic in &outcome.diagnostics {
            println!("    {diagnostic}");
        }
        if !outcome.passed() {
            failed += 1;
        }
    }

    println!("\n{} entries, {failed} failed", outcomes.len());
    Ok(failed == 0)
}
