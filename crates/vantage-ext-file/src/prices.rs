//! CSV price source.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use vantage_core::{
    DateRange, PriceColumn, PriceSource, PriceTable, SourceError, SourceResult, Ticker,
};

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// Date format of the first column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV-based closing price source.
///
/// The file is wide: a `date` column followed by one column per ticker.
///
/// ```text
/// date,AAPL,MSFT
/// 2024-01-02,185.64,370.87
/// 2024-01-03,184.25,
/// ```
///
/// An empty cell is a missing close; that date is dropped when the ticker is
/// requested alongside others. The whole file is read up front.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    file_path: Option<PathBuf>,
    tickers: Vec<Ticker>,
    rows: Vec<(NaiveDate, Vec<Option<f64>>)>,
}

impl CsvPriceSource {
    /// Open and parse a CSV price file.
    pub fn open(file_path: impl AsRef<Path>) -> SourceResult<Self> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", file_path.display())))?;

        let mut source = Self::from_reader(file)?;
        source.file_path = Some(file_path.to_path_buf());
        debug!(
            path = %file_path.display(),
            tickers = source.tickers.len(),
            rows = source.rows.len(),
            "loaded price file"
        );
        Ok(source)
    }

    /// Parse CSV price data from any reader.
    pub fn from_reader<R: Read>(reader: R) -> SourceResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| SourceError::Parse(e.to_string()))?
            .clone();
        if headers.len() < 2 {
            return Err(SourceError::Parse(
                "expected a date column followed by at least one ticker column".to_string(),
            ));
        }

        let mut tickers: Vec<Ticker> = Vec::with_capacity(headers.len() - 1);
        for name in headers.iter().skip(1) {
            let ticker = Ticker::new(name)?;
            if tickers.contains(&ticker) {
                return Err(SourceError::Parse(format!("duplicate column {ticker}")));
            }
            tickers.push(ticker);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| SourceError::Parse(e.to_string()))?;
            let line = record.position().map_or(0, csv::Position::line);

            let date = record
                .get(0)
                .ok_or_else(|| SourceError::Parse(format!("line {line}: missing date")))
                .and_then(|s| parse_date(s, line))?;

            let values = tickers
                .iter()
                .enumerate()
                .map(|(i, ticker)| parse_price(record.get(i + 1).unwrap_or(""), ticker, line))
                .collect::<SourceResult<Vec<_>>>()?;

            rows.push((date, values));
        }

        Ok(Self {
            file_path: None,
            tickers,
            rows,
        })
    }

    /// Re-read the backing file, if this source was opened from one.
    pub fn reload(&mut self) -> SourceResult<()> {
        if let Some(path) = self.file_path.clone() {
            *self = Self::open(path)?;
        }
        Ok(())
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Tickers present in the file, in column order.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Number of data rows in the file.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the file has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PriceSource for CsvPriceSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, tickers: &[Ticker], range: &DateRange) -> SourceResult<PriceTable> {
        let indices = tickers
            .iter()
            .map(|t| {
                self.tickers
                    .iter()
                    .position(|have| have == t)
                    .ok_or_else(|| SourceError::UnknownTicker(t.to_string()))
            })
            .collect::<SourceResult<Vec<_>>>()?;

        let in_range: Vec<_> = self
            .rows
            .iter()
            .filter(|(date, _)| range.contains(*date))
            .collect();
        if in_range.is_empty() {
            return Err(SourceError::NoData {
                tickers: join(tickers),
                range: range.to_string(),
            });
        }

        let columns = tickers
            .iter()
            .zip(&indices)
            .map(|(ticker, &i)| {
                let observations = in_range.iter().map(|(date, values)| (*date, values[i])).collect();
                PriceColumn::new(ticker.clone(), observations)
            })
            .collect();

        Ok(PriceTable::from_columns(columns)?)
    }
}

fn parse_date(s: &str, line: u64) -> SourceResult<NaiveDate> {
    // Accept "2024-01-02 00:00:00" and "2024-01-02T00:00:00" as well.
    let day = s.split([' ', 'T']).next().unwrap_or(s);
    NaiveDate::parse_from_str(day, DATE_FORMAT)
        .map_err(|e| SourceError::Parse(format!("line {line}: invalid date {s:?}: {e}")))
}

fn parse_price(s: &str, ticker: &Ticker, line: u64) -> SourceResult<Option<f64>> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>().map(Some).map_err(|e| {
        SourceError::Parse(format!("line {line}: invalid price {s:?} for {ticker}: {e}"))
    })
}

fn join(tickers: &[Ticker]) -> String {
    tickers
        .iter()
        .map(Ticker::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
