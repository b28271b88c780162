//! Property tests for price-table alignment.

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use vantage_core::{PriceColumn, PriceTable, Ticker};

const SYMBOLS: [&str; 3] = ["AAPL", "MSFT", "SPY"];

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn date(offset: u32) -> NaiveDate {
    base() + Days::new(u64::from(offset))
}

/// A close that may be missing or unusable.
fn close() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        6 => (1.0f64..500.0).prop_map(Some),
        1 => Just(None),
        1 => Just(Some(0.0)),
        1 => Just(Some(-3.0)),
        1 => Just(Some(f64::NAN)),
    ]
}

fn column() -> impl Strategy<Value = BTreeMap<u32, Option<f64>>> {
    prop::collection::btree_map(0u32..40, close(), 0..40)
}

fn columns() -> impl Strategy<Value = Vec<BTreeMap<u32, Option<f64>>>> {
    prop::collection::vec(column(), 1..=SYMBOLS.len())
}

fn usable(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite() && *p > 0.0)
}

fn build(raw: &[BTreeMap<u32, Option<f64>>]) -> PriceTable {
    // Feed observations newest first; alignment must not depend on input order.
    let cols = raw
        .iter()
        .zip(SYMBOLS)
        .map(|(obs, symbol)| {
            PriceColumn::new(
                Ticker::new(symbol).unwrap(),
                obs.iter().rev().map(|(&day, &p)| (date(day), p)).collect(),
            )
        })
        .collect();
    PriceTable::from_columns(cols).unwrap()
}

proptest! {
    #[test]
    fn aligned_dates_strictly_ascending(raw in columns()) {
        let table = build(&raw);
        for pair in table.rows().windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn aligned_rows_are_complete(raw in columns()) {
        let table = build(&raw);
        prop_assert_eq!(table.tickers().len(), raw.len());
        for row in table.rows() {
            prop_assert_eq!(row.values.len(), raw.len());
            prop_assert!(row.values.iter().all(|p| p.is_finite() && *p > 0.0));
        }
    }

    #[test]
    fn aligned_keeps_exactly_common_dates(raw in columns()) {
        let table = build(&raw);

        let expected: Vec<NaiveDate> = (0u32..40)
            .filter(|day| raw.iter().all(|col| usable(col.get(day).copied().flatten()).is_some()))
            .map(date)
            .collect();
        prop_assert_eq!(table.dates(), expected);

        for row in table.rows() {
            let day = u32::try_from((row.date - base()).num_days()).unwrap();
            for (col, &value) in raw.iter().zip(&row.values) {
                let input = col[&day].unwrap();
                assert_relative_eq!(value, input);
            }
        }
    }
}
