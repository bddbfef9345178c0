//! # tally
//!
//! Command-line front end for tally-core.
//!
//! ## Usage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ echo '{"items":[{"price":"$5.25","quantity":3}]}' | tally total      │
//! │  { "success": true, "total": 15.75, ... }                               │
//! │                                                                         │
//! │  Exit codes: 0 accepted/valid, 1 rejected/invalid, 2 unreadable input   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::CommandLine;
use crate::config::TallyConfig;

fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLine::parse_args();

    // Load configuration
    let config = TallyConfig::load()?;
    init_logging(&config.log_filter);
    info!(max_items = config.max_items, "Configuration loaded");

    let limits = config.limits()?;
    match commands::run(cli.command, &limits) {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::from(1)),
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            Ok(ExitCode::from(2))
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable JSON.
/// `RUST_LOG` wins over `TALLY_LOG` when both are set.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
