//! Error types for risk calculations.

use thiserror::Error;
use vantage_core::SourceError;
use vantage_math::MathError;
use vantage_portfolio::PortfolioError;

/// Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Confidence level outside `(0, 1)`.
    #[error("invalid confidence level {0}: must be strictly between 0 and 1")]
    InvalidConfidence(f64),

    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for calculation
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Observations available.
        actual: usize,
    },

    /// Numerical failure
    #[error("calculation failed: {0}")]
    Math(MathError),

    /// Portfolio construction or aggregation failed
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Price data could not be fetched
    #[error("price data unavailable: {0}")]
    Source(#[from] SourceError),
}

impl From<MathError> for RiskError {
    fn from(e: MathError) -> Self {
        match e {
            MathError::InsufficientData { required, actual } => {
                RiskError::InsufficientData { required, actual }
            }
            other => RiskError::Math(other),
        }
    }
}
