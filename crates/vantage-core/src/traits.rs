//! Provider traits.
//!
//! [`PriceSource`] separates the data-fetch step (network, file) from the
//! risk computation, which only ever sees an aligned [`PriceTable`].

use crate::error::SourceResult;
use crate::types::{DateRange, PriceTable, Ticker};

/// A provider of daily closing prices.
///
/// Implementations return a table whose columns follow the order of
/// `tickers`, whose dates lie inside `range` (start inclusive, end
/// exclusive), and from which every date lacking a price for any ticker has
/// been dropped. [`PriceTable::from_columns`] performs that alignment.
pub trait PriceSource {
    /// Short provider name used in logs and output.
    fn name(&self) -> &str;

    /// Fetch aligned closing prices for `tickers` over `range`.
    fn fetch(&self, tickers: &[Ticker], range: &DateRange) -> SourceResult<PriceTable>;
}

impl<S: PriceSource + ?Sized> PriceSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, tickers: &[Ticker], range: &DateRange) -> SourceResult<PriceTable> {
        (**self).fetch(tickers, range)
    }
}

impl<S: PriceSource + ?Sized> PriceSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, tickers: &[Ticker], range: &DateRange) -> SourceResult<PriceTable> {
        (**self).fetch(tickers, range)
    }
}
