//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid catalogue or radius list.
    #[error("Invalid input: {0}")]
    Input(#[from] vpf_kernel::InputError),

    /// Invalid estimator settings.
    #[error("Invalid estimator configuration: {0}")]
    Estimator(#[from] vpf_kernel::mc::ConfigError),

    /// CSV read or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
