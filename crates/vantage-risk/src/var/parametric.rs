//! Parametric (Gaussian) VaR.

use vantage_math::distributions::standard_normal_quantile;
use vantage_math::stats::{mean, sample_std_dev};

use super::{check_returns, tail_probability};
use crate::{RiskError, RiskResult};

/// Parametric VaR from a return sample: `mean + Φ⁻¹(1 - c) · std`, using the
/// sample mean and sample standard deviation.
pub fn parametric_var(returns: &[f64], confidence: f64) -> RiskResult<f64> {
    let tail = tail_probability(confidence)?;
    check_returns(returns)?;
    let mu = mean(returns)?;
    let sigma = sample_std_dev(returns)?;
    gaussian_quantile(mu, sigma, tail)
}

/// Parametric VaR from known moments.
///
/// With `std_dev == 0` the result is `mean`.
pub fn parametric_var_from_moments(mean: f64, std_dev: f64, confidence: f64) -> RiskResult<f64> {
    let tail = tail_probability(confidence)?;
    gaussian_quantile(mean, std_dev, tail)
}

fn gaussian_quantile(mean: f64, std_dev: f64, tail: f64) -> RiskResult<f64> {
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(RiskError::InvalidInput(format!(
            "moments must be finite with non-negative std dev (mean {mean}, std {std_dev})"
        )));
    }
    let z = standard_normal_quantile(tail)?;
    Ok(mean + z * std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const RETURNS: [f64; 10] = [
        -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
    ];

    #[test]
    fn test_parametric_var_reference() {
        // mean 0.0025, sample std 0.0151382517704875
        assert_abs_diff_eq!(
            parametric_var(&RETURNS, 0.95).unwrap(),
            -0.02240020833039085,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            parametric_var(&RETURNS, 0.99).unwrap(),
            -0.03271683982296849,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_more_negative_at_higher_confidence() {
        let v95 = parametric_var_from_moments(0.001, 0.02, 0.95).unwrap();
        let v99 = parametric_var_from_moments(0.001, 0.02, 0.99).unwrap();
        assert!(v99 < v95);
    }

    #[test]
    fn test_zero_volatility_collapses_to_mean() {
        assert_abs_diff_eq!(
            parametric_var_from_moments(0.004, 0.0, 0.99).unwrap(),
            0.004,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(parametric_var(&[0.004; 5], 0.95).unwrap(), 0.004, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_negative_std() {
        assert!(matches!(
            parametric_var_from_moments(0.0, -0.1, 0.95),
            Err(RiskError::InvalidInput(_))
        ));
    }
}
