//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Confidence level other than 95% or 99%.
    #[error("Invalid confidence level: {0}. Use 95 or 99.")]
    InvalidConfidence(String),

    /// Malformed ticker or weight list.
    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(String),

    /// Portfolio name not found among presets or configured portfolios.
    #[error("Unknown portfolio: {0}. Run `vantage portfolios` to list them.")]
    UnknownPortfolio(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
