//! Integrated risk calculator.
//!
//! [`RiskCalculator`] computes every statistic of a [`RiskReport`] from one
//! return sample, sharing the sort and the moment estimates between the
//! estimators.
//!
//! # Example
//!
//! ```rust
//! use vantage_risk::{RiskCalculator, RiskConfig};
//!
//! let returns = [-0.012, 0.004, -0.007, 0.011, 0.002, -0.001, 0.006];
//! let calc = RiskCalculator::new(RiskConfig::new(0.99).with_seed(1)).unwrap();
//! let report = calc.report(&returns).unwrap();
//!
//! println!("{report}");
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vantage_math::stats::{mean, quantile_sorted, sample_std_dev, sorted};

use crate::cvar::tail_mean;
use crate::report::RiskReport;
use crate::var::{
    check_returns, monte_carlo_var_from_moments, parametric_var_from_moments, tail_probability,
    DEFAULT_SIMULATIONS,
};
use crate::{RiskError, RiskResult};

/// Settings shared by every estimate in a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Confidence level in `(0, 1)`.
    pub confidence: f64,
    /// Monte Carlo draws.
    pub simulations: usize,
    /// Monte Carlo seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RiskConfig {
    /// Config at `confidence` with the default simulation count and no seed.
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence,
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
        }
    }

    /// Sets the Monte Carlo draw count.
    #[must_use]
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Fixes the Monte Carlo seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the settings.
    pub fn validate(&self) -> RiskResult<()> {
        tail_probability(self.confidence)?;
        if self.simulations == 0 {
            return Err(RiskError::InvalidInput(
                "simulation count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The random source this config asks for.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self::new(0.95)
    }
}

/// Calculator for the full set of tail-risk statistics.
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    config: RiskConfig,
}

impl RiskCalculator {
    /// Creates a calculator, validating `config`.
    pub fn new(config: RiskConfig) -> RiskResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Computes a report, drawing Monte Carlo samples from the RNG described
    /// by the config.
    pub fn report(&self, returns: &[f64]) -> RiskResult<RiskReport> {
        let mut rng = self.config.rng();
        self.report_with_rng(returns, &mut rng)
    }

    /// Computes a report with an explicit random source.
    pub fn report_with_rng<R: Rng + ?Sized>(
        &self,
        returns: &[f64],
        rng: &mut R,
    ) -> RiskResult<RiskReport> {
        check_returns(returns)?;
        let confidence = self.config.confidence;
        let tail = tail_probability(confidence)?;

        let ordered = sorted(returns)?;
        let historical_var = quantile_sorted(&ordered, tail)?;
        let historical_cvar = tail_mean(returns, historical_var)?;

        let mu = mean(returns)?;
        let sigma = sample_std_dev(returns)?;
        let parametric_var = parametric_var_from_moments(mu, sigma, confidence)?;
        let monte_carlo_var =
            monte_carlo_var_from_moments(mu, sigma, confidence, self.config.simulations, rng)?;

        debug!(
            observations = returns.len(),
            confidence, historical_var, parametric_var, monte_carlo_var, historical_cvar,
            "computed risk report"
        );

        Ok(RiskReport {
            confidence_level: confidence,
            historical_var,
            parametric_var,
            monte_carlo_var,
            historical_cvar,
            observations: returns.len(),
            mean: mu,
            std_dev: sigma,
            simulations: self.config.simulations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvar::historical_cvar;
    use crate::var::{historical_var, parametric_var};
    use approx::assert_relative_eq;

    const RETURNS: [f64; 10] = [
        -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
    ];

    #[test]
    fn test_report_matches_standalone_estimators() {
        let calc = RiskCalculator::new(RiskConfig::new(0.95).with_seed(11)).unwrap();
        let r = calc.report(&RETURNS).unwrap();

        assert_relative_eq!(r.historical_var, historical_var(&RETURNS, 0.95).unwrap());
        assert_relative_eq!(r.parametric_var, parametric_var(&RETURNS, 0.95).unwrap());
        assert_relative_eq!(r.historical_cvar, historical_cvar(&RETURNS, 0.95).unwrap());
        assert_eq!(r.observations, 10);
        assert_eq!(r.simulations, DEFAULT_SIMULATIONS);
        assert_relative_eq!(r.mean, 0.0025, epsilon = 1e-15);
    }

    #[test]
    fn test_seeded_report_is_reproducible() {
        let calc = RiskCalculator::new(RiskConfig::new(0.99).with_seed(99)).unwrap();
        assert_eq!(calc.report(&RETURNS).unwrap(), calc.report(&RETURNS).unwrap());
    }

    #[test]
    fn test_degenerate_series() {
        let flat = [0.0015; 30];
        let calc = RiskCalculator::new(RiskConfig::new(0.95).with_seed(3)).unwrap();
        let r = calc.report(&flat).unwrap();
        assert_eq!(r.std_dev, 0.0);
        assert_eq!(r.parametric_var, r.mean);
        assert_eq!(r.monte_carlo_var, r.mean);
        assert_relative_eq!(r.historical_var, 0.0015, epsilon = 1e-15);
        assert_relative_eq!(r.historical_cvar, 0.0015, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            RiskCalculator::new(RiskConfig::new(0.0)),
            Err(RiskError::InvalidConfidence(_))
        ));
        assert!(matches!(
            RiskCalculator::new(RiskConfig::new(0.95).with_simulations(0)),
            Err(RiskError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_observation_is_insufficient() {
        let calc = RiskCalculator::new(RiskConfig::default()).unwrap();
        assert!(matches!(
            calc.report(&[0.01]),
            Err(RiskError::InsufficientData { required: 2, actual: 1 })
        ));
    }
}
