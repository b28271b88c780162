//! # Vantage Ext File
//!
//! File-based price data for the Vantage portfolio risk toolkit.
//!
//! This crate provides an offline [`PriceSource`](vantage_core::PriceSource)
//! for reproducible runs, tests and end-of-day files:
//! - CSV-based closing price source (`date,TICKER1,TICKER2,...`)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod prices;

pub use prices::*;
