//! # Vantage Core
//!
//! Core types and traits for the Vantage portfolio risk toolkit.
//!
//! This crate provides the building blocks shared by every other Vantage crate:
//!
//! - **Types**: `Ticker`, `DateRange`, `PriceTable`, `ReturnTable`, `ReturnSeries`
//! - **Traits**: [`PriceSource`](traits::PriceSource), the seam between data
//!   providers (HTTP, CSV) and the pure risk computation
//! - **Errors**: `CoreError` for data-model violations, `SourceError` for providers
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vantage_core::prelude::*;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let table = PriceTable::new(
//!     vec![Ticker::new("aapl").unwrap()],
//!     vec![DatedRow::new(d(2), vec![100.0]), DatedRow::new(d(3), vec![101.0])],
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.tickers()[0].as_str(), "AAPL");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult, SourceError, SourceResult};
    pub use crate::traits::PriceSource;
    pub use crate::types::{
        DateRange, DatedRow, PriceColumn, PriceTable, ReturnSeries, ReturnTable, Ticker,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult, SourceError, SourceResult};
pub use traits::PriceSource;
pub use types::{DateRange, DatedRow, PriceColumn, PriceTable, ReturnSeries, ReturnTable, Ticker};
