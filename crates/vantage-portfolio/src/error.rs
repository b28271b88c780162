//! Error types for portfolio construction and return calculation.

use thiserror::Error;
use vantage_core::CoreError;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Invalid portfolio configuration.
    #[error("Invalid portfolio: {reason}")]
    InvalidPortfolio {
        /// The reason the portfolio is invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Weight count differs from ticker count.
    #[error("Dimension mismatch: {tickers} tickers but {weights} weights")]
    DimensionMismatch {
        /// Number of tickers (return columns).
        tickers: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Invalid weight (NaN or infinite).
    #[error("Invalid weight for {ticker}: {weight}")]
    InvalidWeight {
        /// Ticker the weight belongs to.
        ticker: String,
        /// The rejected weight.
        weight: f64,
    },

    /// Not enough price observations to form a return.
    #[error("Insufficient data: need at least {required} price rows, got {actual}")]
    InsufficientData {
        /// Minimum number of rows.
        required: usize,
        /// Rows available.
        actual: usize,
    },

    /// Data-model violation from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Creates an invalid portfolio error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPortfolio {
            reason: reason.into(),
        }
    }
}
