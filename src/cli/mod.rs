//! # VERIFYCTL CLI
//!
//! Command-line interface for the provider field validators.
//!
//! Runs the same validators a provider schema uses, outside of any host
//! framework, to check configuration values ahead of a plan.
//!
//! ## Usage
//!
//! ```bash
//! # Check a single value
//! verifyctl check valid_account_id 123456789012
//!
//! # Name the field so messages match what users see in plan output
//! verifyctl check valid_duration -5s --key timeout
//!
//! # Pass a typed value as JSON
//! verifyctl check valid_4_byte_asn '"64512"' --json
//!
//! # Run a batch document (YAML, or JSON for .json files)
//! verifyctl batch fields.yaml
//!
//! # List available validators
//! verifyctl list
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use verify::constants::DEFAULT_FIELD_KEY;

mod batch;
mod check;
mod list;

use batch::batch_command;
use check::check_command;
use list::list_command;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Provider field validator CLI
#[derive(Parser)]
#[command(name = "verifyctl")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Validate provider configuration values",
    long_about = None,
    after_help = "\
Examples:
  verifyctl check valid_arn arn:aws:s3:::my-bucket
  verifyctl check valid_ipv4_cidr_network_address 10.0.0.0/16 --key cidr_block
  verifyctl batch fields.yaml
  verifyctl list
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single value
    Check {
        /// Validator name (see `verifyctl list`)
        #[arg(value_name = "VALIDATOR")]
        validator: String,

        /// Value to validate
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        /// Field key used in messages
        #[arg(short, long, default_value = DEFAULT_FIELD_KEY)]
        key: String,

        /// Parse VALUE as JSON instead of taking it as a string
        #[arg(long)]
        json: bool,
    },
    /// Validate every entry of a YAML or JSON batch document
    Batch {
        /// Path to the batch document
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List registered validators
    List,
}

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verifyctl=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::Check {
            validator,
            value,
            key,
            json,
        } => check_command(&validator, &value, &key, json)?,
        Commands::Batch { file } => batch_command(&file)?,
        Commands::List => {
            list_command();
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
