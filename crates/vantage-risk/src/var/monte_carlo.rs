//! Monte Carlo VaR.
//!
//! Draws returns from `Normal(mean, std)` and reads off the tail quantile of
//! the simulated sample. The random source is injected so callers decide
//! between a reproducible seeded run and an entropy-seeded one.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;
use vantage_math::stats::{mean, quantile, sample_std_dev};

use super::{check_returns, tail_probability};
use crate::{RiskError, RiskResult};

/// Number of simulated returns drawn by default.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Monte Carlo VaR of a return sample, fitting a normal distribution to its
/// sample mean and sample standard deviation.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use vantage_risk::var::monte_carlo_var;
///
/// let returns = [-0.02, -0.01, 0.0, 0.01, 0.02];
/// let a = monte_carlo_var(&returns, 0.95, 10_000, &mut StdRng::seed_from_u64(42)).unwrap();
/// let b = monte_carlo_var(&returns, 0.95, 10_000, &mut StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn monte_carlo_var<R: Rng + ?Sized>(
    returns: &[f64],
    confidence: f64,
    simulations: usize,
    rng: &mut R,
) -> RiskResult<f64> {
    check_returns(returns)?;
    let mu = mean(returns)?;
    let sigma = sample_std_dev(returns)?;
    monte_carlo_var_from_moments(mu, sigma, confidence, simulations, rng)
}

/// Monte Carlo VaR from known moments.
///
/// With `std_dev == 0` every draw equals `mean`, so `mean` is returned
/// without sampling.
pub fn monte_carlo_var_from_moments<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    confidence: f64,
    simulations: usize,
    rng: &mut R,
) -> RiskResult<f64> {
    let tail = tail_probability(confidence)?;
    if simulations == 0 {
        return Err(RiskError::InvalidInput(
            "simulation count must be positive".to_string(),
        ));
    }
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(RiskError::InvalidInput(format!(
            "moments must be finite with non-negative std dev (mean {mean}, std {std_dev})"
        )));
    }
    if std_dev == 0.0 {
        return Ok(mean);
    }

    let normal = Normal::new(mean, std_dev).map_err(|e| RiskError::InvalidInput(e.to_string()))?;
    let draws: Vec<f64> = normal.sample_iter(&mut *rng).take(simulations).collect();
    debug!(simulations, mean, std_dev, "simulated portfolio returns");

    Ok(quantile(&draws, tail)?)
}
