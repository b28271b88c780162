//! Weighted aggregation of per-ticker returns.

use vantage_core::{ReturnSeries, ReturnTable};

use crate::{PortfolioError, PortfolioResult};

/// Portfolio return per date: the dot product of that date's return vector
/// with `weights` (one weight per column, in column order).
///
/// Weights are applied as given, without normalisation.
pub fn portfolio_returns(returns: &ReturnTable, weights: &[f64]) -> PortfolioResult<ReturnSeries> {
    let columns = returns.tickers().len();
    if weights.len() != columns {
        return Err(PortfolioError::DimensionMismatch {
            tickers: columns,
            weights: weights.len(),
        });
    }
    if let Some((i, &w)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
        return Err(PortfolioError::InvalidWeight {
            ticker: returns.tickers()[i].to_string(),
            weight: w,
        });
    }

    let points = returns
        .rows()
        .iter()
        .map(|row| {
            let r: f64 = row.values.iter().zip(weights).map(|(r, w)| r * w).sum();
            (row.date, r)
        })
        .collect();

    Ok(ReturnSeries::new(points)?)
}
