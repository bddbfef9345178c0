//! # CLI Error Type
//!
//! Failures that stop a command before tally-core ever sees the input.
//! Malformed prices and quantities are NOT errors; only unreadable input is.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] tally_core::CoreError),
}

impl CliError {
    pub fn read(path: Option<&PathBuf>, source: std::io::Error) -> Self {
        CliError::Read {
            source_name: path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string()),
            source,
        }
    }
}
