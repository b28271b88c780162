//! # Vantage Ext Yahoo
//!
//! Yahoo Finance price data for the Vantage portfolio risk toolkit.
//!
//! [`YahooPriceSource`] implements [`PriceSource`](vantage_core::PriceSource)
//! over the public chart endpoint (`/v8/finance/chart/{ticker}`), one
//! blocking request per ticker. Closes are dividend/split adjusted unless
//! [`YahooConfig::adjusted`] is turned off.
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use vantage_core::{DateRange, PriceSource, Ticker};
//! use vantage_ext_yahoo::{YahooConfig, YahooPriceSource};
//!
//! let source = YahooPriceSource::new(YahooConfig::default())?;
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
//! )?;
//! let prices = source.fetch(&Ticker::parse_list("META,GOOGL")?, &range)?;
//! println!("{} aligned rows", prices.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod chart;
mod client;

pub use chart::parse_chart;
pub use client::{YahooConfig, YahooPriceSource, DEFAULT_BASE_URL};
