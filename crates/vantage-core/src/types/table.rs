//! Date-indexed tables with one column per ticker.
//!
//! [`PriceTable`] holds closing prices and [`ReturnTable`] holds per-ticker
//! returns. Both keep their rows in strictly ascending date order with
//! exactly one finite value per ticker, so downstream code never has to deal
//! with gaps.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::Ticker;

/// One date and one value per ticker, in the owning table's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRow {
    /// Trading date.
    pub date: NaiveDate,
    /// Values in ticker order.
    pub values: Vec<f64>,
}

impl DatedRow {
    /// Creates a row.
    pub fn new(date: NaiveDate, values: Vec<f64>) -> Self {
        Self { date, values }
    }
}

/// Raw observations for a single ticker, possibly with gaps.
///
/// This is what a provider typically receives: one series per ticker, with
/// `None` where the market had no close (or the feed had a hole).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceColumn {
    /// Ticker the observations belong to.
    pub ticker: Ticker,
    /// `(date, close)` pairs in any order.
    pub observations: Vec<(NaiveDate, Option<f64>)>,
}

impl PriceColumn {
    /// Creates a column for `ticker`.
    pub fn new(ticker: Ticker, observations: Vec<(NaiveDate, Option<f64>)>) -> Self {
        Self {
            ticker,
            observations,
        }
    }
}

/// Daily closing prices, one column per ticker.
///
/// Invariants: at least one ticker, no duplicate tickers, dates strictly
/// ascending, every price finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    tickers: Vec<Ticker>,
    rows: Vec<DatedRow>,
}

impl PriceTable {
    /// Creates a table, validating every invariant.
    pub fn new(tickers: Vec<Ticker>, rows: Vec<DatedRow>) -> CoreResult<Self> {
        validate(&tickers, &rows, |p| p.is_finite() && p > 0.0)?;
        Ok(Self { tickers, rows })
    }

    /// Aligns per-ticker columns on their common dates.
    ///
    /// A date survives only if every column carries a usable (finite,
    /// positive) close for it; everything else is dropped. Rows come out in
    /// ascending date order and columns in the order given.
    pub fn from_columns(columns: Vec<PriceColumn>) -> CoreResult<Self> {
        let width = columns.len();
        let mut tickers = Vec::with_capacity(width);
        let mut grid: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();

        for (col, column) in columns.into_iter().enumerate() {
            tickers.push(column.ticker);
            for (date, price) in column.observations {
                let slot = grid.entry(date).or_insert_with(|| vec![None; width]);
                slot[col] = price.filter(|p| p.is_finite() && *p > 0.0);
            }
        }

        let total = grid.len();
        let rows: Vec<DatedRow> = grid
            .into_iter()
            .filter_map(|(date, values)| {
                values
                    .into_iter()
                    .collect::<Option<Vec<f64>>>()
                    .map(|values| DatedRow::new(date, values))
            })
            .collect();

        if rows.len() < total {
            warn!(
                dropped = total - rows.len(),
                kept = rows.len(),
                "dropped dates with missing prices"
            );
        }

        Self::new(tickers, rows)
    }

    /// Column tickers.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Rows in ascending date order.
    pub fn rows(&self) -> &[DatedRow] {
        &self.rows
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no dates.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    /// Position of `ticker` among the columns.
    pub fn column_index(&self, ticker: &Ticker) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }

    /// All prices for `ticker`, in date order.
    pub fn column(&self, ticker: &Ticker) -> Option<Vec<f64>> {
        let idx = self.column_index(ticker)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    /// Returns a table restricted to (and reordered as) `tickers`.
    pub fn select(&self, tickers: &[Ticker]) -> CoreResult<Self> {
        let indices = select_indices(&self.tickers, tickers)?;
        let rows = self
            .rows
            .iter()
            .map(|r| DatedRow::new(r.date, indices.iter().map(|&i| r.values[i]).collect()))
            .collect();
        Self::new(tickers.to_vec(), rows)
    }
}

/// Per-ticker simple returns, one column per ticker.
///
/// Invariants: at least one ticker, no duplicate tickers, dates strictly
/// ascending, every return finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnTable {
    tickers: Vec<Ticker>,
    rows: Vec<DatedRow>,
}

impl ReturnTable {
    /// Creates a table, validating every invariant.
    pub fn new(tickers: Vec<Ticker>, rows: Vec<DatedRow>) -> CoreResult<Self> {
        validate(&tickers, &rows, f64::is_finite)?;
        Ok(Self { tickers, rows })
    }

    /// Column tickers.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Rows in ascending date order.
    pub fn rows(&self) -> &[DatedRow] {
        &self.rows
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no dates.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All returns for `ticker`, in date order.
    pub fn column(&self, ticker: &Ticker) -> Option<Vec<f64>> {
        let idx = self.tickers.iter().position(|t| t == ticker)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }
}

fn select_indices(have: &[Ticker], want: &[Ticker]) -> CoreResult<Vec<usize>> {
    want.iter()
        .map(|t| {
            have.iter()
                .position(|h| h == t)
                .ok_or_else(|| CoreError::UnknownTicker(t.to_string()))
        })
        .collect()
}

fn validate(tickers: &[Ticker], rows: &[DatedRow], usable: impl Fn(f64) -> bool) -> CoreResult<()> {
    if tickers.is_empty() {
        return Err(CoreError::NoTickers);
    }

    let mut seen = HashSet::with_capacity(tickers.len());
    for t in tickers {
        if !seen.insert(t) {
            return Err(CoreError::DuplicateTicker(t.to_string()));
        }
    }

    for (i, row) in rows.iter().enumerate() {
        if i > 0 && rows[i - 1].date >= row.date {
            return Err(CoreError::UnorderedDates {
                previous: rows[i - 1].date,
                next: row.date,
            });
        }
        if row.values.len() != tickers.len() {
            return Err(CoreError::RowWidthMismatch {
                date: row.date,
                expected: tickers.len(),
                actual: row.values.len(),
            });
        }
        if let Some((col, &value)) = row.values.iter().enumerate().find(|(_, v)| !usable(**v)) {
            return Err(CoreError::InvalidValue {
                ticker: tickers[col].to_string(),
                date: row.date,
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn t(s: &str) -> Ticker {
        Ticker::new(s).unwrap()
    }

    #[test]
    fn test_from_columns_inner_joins_and_sorts() {
        let aapl = PriceColumn::new(
            t("AAPL"),
            vec![(d(5), Some(102.0)), (d(4), Some(101.0)), (d(6), Some(99.0))],
        );
        // MSFT is missing the 5th and has a null on the 6th.
        let msft = PriceColumn::new(
            t("MSFT"),
            vec![(d(4), Some(50.0)), (d(6), None), (d(7), Some(51.0))],
        );

        let table = PriceTable::from_columns(vec![aapl, msft]).unwrap();
        assert_eq!(table.dates(), vec![d(4)]);
        assert_eq!(table.rows()[0].values, vec![101.0, 50.0]);
    }

    #[test]
    fn test_from_columns_drops_non_positive_prices() {
        let col = PriceColumn::new(
            t("X"),
            vec![(d(1), Some(10.0)), (d(2), Some(0.0)), (d(3), Some(f64::NAN))],
        );
        let table = PriceTable::from_columns(vec![col]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_columns_without_overlap_is_empty() {
        let a = PriceColumn::new(t("A"), vec![(d(1), Some(1.0))]);
        let b = PriceColumn::new(t("B"), vec![(d(2), Some(1.0))]);
        let table = PriceTable::from_columns(vec![a, b]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.tickers().len(), 2);
    }

    #[test]
    fn test_new_rejects_unordered_dates() {
        let rows = vec![DatedRow::new(d(2), vec![1.0]), DatedRow::new(d(2), vec![1.0])];
        assert!(matches!(
            PriceTable::new(vec![t("A")], rows),
            Err(CoreError::UnorderedDates { .. })
        ));
    }

    #[test]
    fn test_new_rejects_width_mismatch() {
        let rows = vec![DatedRow::new(d(2), vec![1.0])];
        assert!(matches!(
            PriceTable::new(vec![t("A"), t("B")], rows),
            Err(CoreError::RowWidthMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_and_empty_tickers() {
        assert!(matches!(
            PriceTable::new(vec![t("A"), t("A")], vec![]),
            Err(CoreError::DuplicateTicker(_))
        ));
        assert!(matches!(
            PriceTable::new(vec![], vec![]),
            Err(CoreError::NoTickers)
        ));
    }

    #[test]
    fn test_returns_may_be_negative_but_finite() {
        let ok = ReturnTable::new(vec![t("A")], vec![DatedRow::new(d(1), vec![-0.5])]);
        assert!(ok.is_ok());
        let bad = ReturnTable::new(vec![t("A")], vec![DatedRow::new(d(1), vec![f64::INFINITY])]);
        assert!(matches!(bad, Err(CoreError::InvalidValue { .. })));
    }

    #[test]
    fn test_select_reorders_columns() {
        let table = PriceTable::new(
            vec![t("A"), t("B"), t("C")],
            vec![DatedRow::new(d(1), vec![1.0, 2.0, 3.0])],
        )
        .unwrap();

        let picked = table.select(&[t("C"), t("A")]).unwrap();
        assert_eq!(picked.tickers(), &[t("C"), t("A")]);
        assert_eq!(picked.rows()[0].values, vec![3.0, 1.0]);

        assert!(matches!(
            table.select(&[t("Z")]),
            Err(CoreError::UnknownTicker(_))
        ));
    }

    #[test]
    fn test_column() {
        let table = PriceTable::new(
            vec![t("A"), t("B")],
            vec![
                DatedRow::new(d(1), vec![1.0, 10.0]),
                DatedRow::new(d(2), vec![2.0, 20.0]),
            ],
        )
        .unwrap();
        assert_eq!(table.column(&t("B")), Some(vec![10.0, 20.0]));
        assert_eq!(table.column(&t("Q")), None);
    }
}
