//! CLI error types.

use thiserror::Error;
use variate_core::{Family, VariateError};

/// Errors surfaced by the `variate` command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A request was rejected by the generator.
    #[error(transparent)]
    Variate(#[from] VariateError),

    /// A family parameter was not supplied.
    #[error("Missing parameter '{name}' for {family}; expected: {expected}")]
    MissingParameter {
        family: Family,
        name: &'static str,
        expected: String,
    },

    /// A parameter name the family does not take.
    #[error("Unknown parameter '{name}' for {family}; expected: {expected}")]
    UnknownParameter {
        family: Family,
        name: String,
        expected: String,
    },

    /// Malformed command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The sampler self-check found sample means out of tolerance.
    #[error("Moment check failed for {failures} of {total} distributions")]
    CheckFailed { failures: usize, total: usize },

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
