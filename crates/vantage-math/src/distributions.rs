//! Probability distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{MathError, MathResult};

/// Inverse of the standard normal CDF, `Φ⁻¹(p)`, for `p` in `(0, 1)`.
///
/// Negative for `p < 0.5`: `Φ⁻¹(0.05) ≈ -1.6449`.
pub fn standard_normal_quantile(p: f64) -> MathResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::InvalidProbability {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::invalid_input(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}
