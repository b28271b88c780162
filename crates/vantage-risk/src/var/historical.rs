//! Historical VaR calculation.

use vantage_math::stats::quantile;

use super::{check_returns, tail_probability};
use crate::RiskResult;

/// Calculate historical VaR from a series of returns.
///
/// The `1 - confidence` quantile of the empirical distribution, linearly
/// interpolated between order statistics.
///
/// # Arguments
///
/// * `returns` - Historical returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence` - Confidence level (e.g., 0.95 for 95%)
pub fn historical_var(returns: &[f64], confidence: f64) -> RiskResult<f64> {
    let tail = tail_probability(confidence)?;
    check_returns(returns)?;
    Ok(quantile(returns, tail)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;
    use approx::assert_relative_eq;

    const RETURNS: [f64; 10] = [
        -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
    ];

    #[test]
    fn test_historical_var() {
        // h = (10 - 1) * 0.05 = 0.45, between -0.02 and -0.015
        let var = historical_var(&RETURNS, 0.95).unwrap();
        assert_relative_eq!(var, -0.01775, epsilon = 1e-15);

        // h = (10 - 1) * 0.01 = 0.09
        let var = historical_var(&RETURNS, 0.99).unwrap();
        assert_relative_eq!(var, -0.01955, epsilon = 1e-15);
    }

    #[test]
    fn test_historical_var_unsorted_input() {
        let mut shuffled = RETURNS;
        shuffled.swap(0, 9);
        shuffled.swap(3, 6);
        assert_relative_eq!(
            historical_var(&shuffled, 0.95).unwrap(),
            -0.01775,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_historical_var_empty() {
        let result = historical_var(&[], 0.95);
        assert!(matches!(result, Err(RiskError::InsufficientData { .. })));
    }

    #[test]
    fn test_historical_var_bad_confidence() {
        assert!(matches!(
            historical_var(&RETURNS, 1.0),
            Err(RiskError::InvalidConfidence(_))
        ));
    }
}
