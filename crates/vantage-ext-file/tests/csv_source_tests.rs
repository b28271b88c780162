//! File-backed tests for the CSV price source.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use vantage_core::{DateRange, PriceSource, SourceError, Ticker};
use vantage_ext_file::CsvPriceSource;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn year_2024() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_open_and_fetch() {
    let file = write_csv("date,META,GOOGL\n2024-01-02,346.29,138.17\n2024-01-03,344.47,138.92\n");
    let source = CsvPriceSource::open(file.path()).unwrap();

    assert_eq!(source.file_path(), Some(file.path()));
    assert_eq!(source.name(), "csv");

    let tickers = Ticker::parse_list("META,GOOGL").unwrap();
    let table = source.fetch(&tickers, &year_2024()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1].values, vec![344.47, 138.92]);
}

#[test]
fn test_unsorted_file_comes_back_sorted() {
    let file = write_csv("date,SPY\n2024-03-01,510\n2024-01-02,470\n2024-02-01,490\n");
    let source = CsvPriceSource::open(file.path()).unwrap();
    let table = source.fetch(&[Ticker::new("SPY").unwrap()], &year_2024()).unwrap();
    let closes: Vec<f64> = table.rows().iter().map(|r| r.values[0]).collect();
    assert_eq!(closes, vec![470.0, 490.0, 510.0]);
}

#[test]
fn test_reload_picks_up_changes() {
    let mut file = write_csv("date,SPY\n2024-01-02,470\n");
    let mut source = CsvPriceSource::open(file.path()).unwrap();
    assert_eq!(source.len(), 1);

    file.write_all(b"2024-01-03,472\n").unwrap();
    file.flush().unwrap();
    source.reload().unwrap();
    assert_eq!(source.len(), 2);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(CsvPriceSource::open(&missing), Err(SourceError::Io(_))));
}
