//! # Vantage Portfolio
//!
//! Portfolio definitions and return-series construction.
//!
//! ## Features
//!
//! - **Portfolios**: named ticker/weight sets, with the built-in presets
//! - **Return Calculator**: simple daily returns `P_t / P_{t-1} - 1`
//! - **Portfolio Aggregator**: weighted sum of per-ticker returns per date
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vantage_core::{DatedRow, PriceTable, Ticker};
//! use vantage_portfolio::prelude::*;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let prices = PriceTable::new(
//!     vec![Ticker::new("AAPL")?, Ticker::new("MSFT")?],
//!     vec![
//!         DatedRow::new(d(2), vec![100.0, 50.0]),
//!         DatedRow::new(d(3), vec![101.0, 49.0]),
//!     ],
//! )?;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("AAPL & MSFT")
//!     .add_holding("AAPL", 0.5)
//!     .add_holding("MSFT", 0.5)
//!     .build()?;
//!
//! let series = portfolio.returns_from_prices(&prices)?;
//! assert!((series.values()[0] - (-0.005)).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod error;
pub mod portfolio;
pub mod presets;
pub mod returns;

pub use error::{PortfolioError, PortfolioResult};
pub use portfolio::{Holding, Portfolio, PortfolioBuilder, PortfolioSpec};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::aggregate::portfolio_returns;
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{Holding, Portfolio, PortfolioBuilder, PortfolioSpec};
    pub use crate::presets::{builtin_portfolios, find_builtin, DEFAULT_PORTFOLIO};
    pub use crate::returns::simple_returns;
}
