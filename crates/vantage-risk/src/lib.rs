//! # vantage-risk
//!
//! Tail-risk estimators for a portfolio return series.
//!
//! This crate provides:
//!
//! - **VaR**: Historical (empirical quantile), Parametric (Gaussian) and
//!   Monte Carlo (simulated Gaussian) Value-at-Risk
//! - **CVaR**: Historical expected shortfall
//! - **Reports**: an immutable [`RiskReport`] and its monetary scaling
//! - **Analysis**: the fetch-then-compute workflow behind the CLI
//!
//! All statistics are signed return fractions: `-0.021` means a 2.1% loss.
//!
//! ## Example
//!
//! ```rust
//! use vantage_risk::prelude::*;
//!
//! let returns = [-0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025];
//! let calc = RiskCalculator::new(RiskConfig::new(0.95).with_seed(7)).unwrap();
//! let report = calc.report(&returns).unwrap();
//!
//! assert!((report.historical_var - (-0.01775)).abs() < 1e-12);
//! assert!(report.historical_cvar <= report.historical_var);
//! ```

pub mod analysis;
pub mod calculator;
pub mod cvar;
mod error;
pub mod report;
pub mod var;

pub use calculator::{RiskCalculator, RiskConfig};
pub use error::{RiskError, RiskResult};
pub use report::{MonetaryRisk, RiskReport};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::calculator::{RiskCalculator, RiskConfig};
    pub use crate::cvar::*;
    pub use crate::report::{MonetaryRisk, RiskReport};
    pub use crate::var::*;
    pub use crate::{RiskError, RiskResult};
}
