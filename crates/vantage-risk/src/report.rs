//! Risk report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::var::VaRMethod;
use crate::{RiskError, RiskResult};

/// The four tail-risk statistics of one return series at one confidence
/// level, plus the sample moments they were derived from.
///
/// Statistics are signed return fractions: negative values are losses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Empirical tail quantile.
    pub historical_var: f64,
    /// Gaussian tail quantile from the sample moments.
    pub parametric_var: f64,
    /// Tail quantile of the simulated Gaussian sample.
    pub monte_carlo_var: f64,
    /// Mean of the returns at or below the historical VaR.
    pub historical_cvar: f64,
    /// Number of returns in the sample.
    pub observations: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Number of Monte Carlo draws.
    pub simulations: usize,
}

impl RiskReport {
    /// VaR for the given method.
    pub fn var(&self, method: VaRMethod) -> f64 {
        match method {
            VaRMethod::Historical => self.historical_var,
            VaRMethod::Parametric => self.parametric_var,
            VaRMethod::MonteCarlo => self.monte_carlo_var,
        }
    }

    /// Scales the statistics to loss amounts on a position of `notional`.
    ///
    /// Amounts are positive for losses and rounded to cents.
    pub fn monetary(&self, notional: Decimal) -> RiskResult<MonetaryRisk> {
        if notional.is_sign_negative() {
            return Err(RiskError::InvalidInput(format!(
                "notional must be non-negative, got {notional}"
            )));
        }
        Ok(MonetaryRisk {
            notional,
            historical_var: loss_amount(self.historical_var, notional)?,
            parametric_var: loss_amount(self.parametric_var, notional)?,
            monte_carlo_var: loss_amount(self.monte_carlo_var, notional)?,
            historical_cvar: loss_amount(self.historical_cvar, notional)?,
        })
    }
}

impl std::fmt::Display for RiskReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%): historical {:.4}%, parametric {:.4}%, monte carlo {:.4}%; CVaR {:.4}%",
            self.confidence_level * 100.0,
            self.historical_var * 100.0,
            self.parametric_var * 100.0,
            self.monte_carlo_var * 100.0,
            self.historical_cvar * 100.0
        )
    }
}

/// Risk statistics expressed as currency losses on a notional position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryRisk {
    /// Position value.
    pub notional: Decimal,
    /// Historical VaR loss.
    pub historical_var: Decimal,
    /// Parametric VaR loss.
    pub parametric_var: Decimal,
    /// Monte Carlo VaR loss.
    pub monte_carlo_var: Decimal,
    /// Historical CVaR loss.
    pub historical_cvar: Decimal,
}

fn loss_amount(ret: f64, notional: Decimal) -> RiskResult<Decimal> {
    let ret = Decimal::try_from(ret)
        .map_err(|e| RiskError::InvalidInput(format!("cannot scale return {ret}: {e}")))?;
    Ok((-ret * notional).round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report() -> RiskReport {
        RiskReport {
            confidence_level: 0.95,
            historical_var: -0.021,
            parametric_var: -0.019,
            monte_carlo_var: -0.0195,
            historical_cvar: -0.03,
            observations: 120,
            mean: 0.0008,
            std_dev: 0.012,
            simulations: 10_000,
        }
    }

    #[test]
    fn test_var_by_method() {
        let r = report();
        assert_eq!(r.var(VaRMethod::Historical), -0.021);
        assert_eq!(r.var(VaRMethod::Parametric), -0.019);
        assert_eq!(r.var(VaRMethod::MonteCarlo), -0.0195);
    }

    #[test]
    fn test_monetary() {
        let m = report().monetary(dec!(1_000_000)).unwrap();
        assert_eq!(m.historical_var, dec!(21000.00));
        assert_eq!(m.parametric_var, dec!(19000.00));
        assert_eq!(m.monte_carlo_var, dec!(19500.00));
        assert_eq!(m.historical_cvar, dec!(30000.00));
    }

    #[test]
    fn test_monetary_rejects_negative_notional() {
        assert!(report().monetary(dec!(-1)).is_err());
    }

    #[test]
    fn test_display() {
        let s = report().to_string();
        assert!(s.starts_with("VaR(95%)"));
        assert!(s.contains("-2.1000%"));
        assert!(s.contains("CVaR -3.0000%"));
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["observations"], 120);
        assert_eq!(json["confidence_level"], 0.95);
    }
}
