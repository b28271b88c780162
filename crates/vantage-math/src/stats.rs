//! Descriptive statistics over return samples.
//!
//! Moments delegate to `statrs`. Quantiles use the linear rule between order
//! statistics (Hyndman & Fan type 7, the default of most statistics
//! packages):
//!
//! ```text
//! h = (n - 1) * p
//! Q(p) = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```

use statrs::statistics::Statistics;

use crate::error::{MathError, MathResult};

/// Dispersion below this fraction of the sample's magnitude is rounding
/// noise, not spread.
const STD_DEV_NOISE: f64 = 1e-12;

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> MathResult<f64> {
    check_finite(data, 1)?;
    Ok(data.mean())
}

/// Sample standard deviation (`n - 1` denominator).
///
/// A constant sample yields exactly `0.0`; statrs leaves residue of a few
/// ulps there, which is snapped away.
pub fn sample_std_dev(data: &[f64]) -> MathResult<f64> {
    check_finite(data, 2)?;
    let std = data.std_dev();
    let scale = data.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if std <= scale * STD_DEV_NOISE {
        return Ok(0.0);
    }
    Ok(std)
}

/// Smallest value.
pub fn minimum(data: &[f64]) -> MathResult<f64> {
    check_finite(data, 1)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns a sorted copy of `data`.
pub fn sorted(data: &[f64]) -> MathResult<Vec<f64>> {
    check_finite(data, 1)?;
    let mut out = data.to_vec();
    out.sort_by(f64::total_cmp);
    Ok(out)
}

/// The `p`-quantile of an unsorted sample, `p` in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use vantage_math::stats::quantile;
///
/// let q = quantile(&[3.0, 1.0, 2.0, 4.0], 0.5).unwrap();
/// assert!((q - 2.5).abs() < 1e-12);
/// ```
pub fn quantile(data: &[f64], p: f64) -> MathResult<f64> {
    quantile_sorted(&sorted(data)?, p)
}

/// The `p`-quantile of an already ascending sample.
///
/// Callers that need several quantiles of the same sample sort once and
/// call this repeatedly.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::InvalidProbability {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;

    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

fn check_finite(data: &[f64], required: usize) -> MathResult<()> {
    if data.len() < required {
        return Err(MathError::insufficient_data(required, data.len()));
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(MathError::NonFinite { index, value });
    }
    Ok(())
}
