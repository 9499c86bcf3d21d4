//! Up Banking export CLI
//!
//! Fetches every account and transaction from the Up Banking API and writes
//! them to a CSV file.
//!
//! # Usage
//!
//! ```bash
//! UP_API_KEY=up:yeah:... cargo run
//! cargo run -- --api-key up:yeah:... --output transactions.csv
//! cargo run -- --categories-output categories.csv --page-size 50
//! RUST_LOG=up_bank_export=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid configuration, account listing unavailable, output not writable)

use std::process;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use up_bank_export::cli;
use up_bank_export::pipeline::ExportPipeline;

/// Log filter used when `RUST_LOG` is unset; covers the library and this binary
const DEFAULT_LOG_FILTER: &str = "up_bank_export=info,up_export=info";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let result = args
        .to_export_config()
        .and_then(ExportPipeline::from_config)
        .and_then(|pipeline| pipeline.run());

    match result {
        Ok(summary) => {
            info!(
                "exported {} rows from {} accounts",
                summary.rows, summary.accounts
            );
            if let Some(pairs) = summary.category_pairs {
                info!("exported {} category pairs", pairs);
            }
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
