//! Return calculation.

use vantage_core::{DatedRow, PriceTable, ReturnTable};

use crate::{PortfolioError, PortfolioResult};

/// Simple daily returns, `P_t / P_{t-1} - 1`, per ticker.
///
/// The first date has no prior price and is dropped, so the result has one
/// row fewer than `prices`, dated by the later of each pair.
///
/// # Errors
///
/// [`PortfolioError::InsufficientData`] when `prices` has fewer than two rows
/// (an unknown ticker or a window without trading days ends up here).
pub fn simple_returns(prices: &PriceTable) -> PortfolioResult<ReturnTable> {
    if prices.len() < 2 {
        return Err(PortfolioError::InsufficientData {
            required: 2,
            actual: prices.len(),
        });
    }

    let rows = prices
        .rows()
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let values = curr
                .values
                .iter()
                .zip(&prev.values)
                .map(|(p1, p0)| p1 / p0 - 1.0)
                .collect();
            DatedRow::new(curr.date, values)
        })
        .collect();

    Ok(ReturnTable::new(prices.tickers().to_vec(), rows)?)
}
