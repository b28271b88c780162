//! Value at Risk (VaR) calculations.
//!
//! VaR is the return threshold that the portfolio is expected to stay above
//! with probability `confidence` over one period. It is reported as the
//! `1 - confidence` quantile of the return distribution, so losses are
//! negative numbers.

mod historical;
mod monte_carlo;
mod parametric;

pub use historical::*;
pub use monte_carlo::*;
pub use parametric::*;

use serde::{Deserialize, Serialize};

use crate::{RiskError, RiskResult};

/// Minimum number of observations the estimators accept.
///
/// Two points are the least for which a sample standard deviation exists.
pub const MIN_OBSERVATIONS: usize = 2;

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaRMethod {
    /// Historical simulation
    Historical,
    /// Parametric (variance-covariance)
    Parametric,
    /// Monte Carlo simulation
    MonteCarlo,
}

impl VaRMethod {
    /// All methods, in report order.
    pub const ALL: [VaRMethod; 3] = [
        VaRMethod::Historical,
        VaRMethod::Parametric,
        VaRMethod::MonteCarlo,
    ];
}

impl std::fmt::Display for VaRMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VaRMethod::Historical => "Historical",
            VaRMethod::Parametric => "Parametric",
            VaRMethod::MonteCarlo => "Monte Carlo",
        };
        f.write_str(name)
    }
}

/// Tail probability `1 - confidence`, validating `confidence` in `(0, 1)`.
pub fn tail_probability(confidence: f64) -> RiskResult<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(RiskError::InvalidConfidence(confidence));
    }
    Ok(1.0 - confidence)
}

pub(crate) fn check_returns(returns: &[f64]) -> RiskResult<()> {
    if returns.len() < MIN_OBSERVATIONS {
        return Err(RiskError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: returns.len(),
        });
    }
    if let Some((i, r)) = returns.iter().enumerate().find(|(_, r)| !r.is_finite()) {
        return Err(RiskError::InvalidInput(format!(
            "return at index {i} is not finite ({r})"
        )));
    }
    Ok(())
}
