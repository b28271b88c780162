//! Conditional VaR (expected shortfall).

use vantage_math::stats::minimum;

use crate::var::{check_returns, historical_var};
use crate::RiskResult;

/// Historical CVaR: the mean of all returns at or below the historical VaR.
///
/// This is the average outcome on the days that fell in the worst
/// `1 - confidence` fraction of the sample, so it is never above the VaR
/// itself.
pub fn historical_cvar(returns: &[f64], confidence: f64) -> RiskResult<f64> {
    let var = historical_var(returns, confidence)?;
    tail_mean(returns, var)
}

/// Mean of the returns `<= threshold`.
///
/// When no return reaches the threshold (possible only for a threshold below
/// the sample minimum) the sample minimum is returned, the closest observed
/// outcome to the tail.
pub fn tail_mean(returns: &[f64], threshold: f64) -> RiskResult<f64> {
    check_returns(returns)?;

    let (sum, count) = returns
        .iter()
        .filter(|&&r| r <= threshold)
        .fold((0.0, 0usize), |(s, n), &r| (s + r, n + 1));

    if count == 0 {
        return Ok(minimum(returns)?);
    }
    // Every summand is <= threshold; keep rounding in the sum from crossing it.
    Ok((sum / count as f64).min(threshold))
}
