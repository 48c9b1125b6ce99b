//! CLI error types

use sizing_core::types::InputError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line argument had an unsupported value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field edit could not be applied
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
