//! Error types for the Vantage data model and price providers.

use thiserror::Error;

/// A specialized Result type for core data-model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// A specialized Result type for price source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Violations of the core data-model invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Ticker symbol is empty or contains invalid characters.
    #[error("Invalid ticker: {symbol:?} - {reason}")]
    InvalidTicker {
        /// The rejected symbol.
        symbol: String,
        /// Reason for rejection.
        reason: String,
    },

    /// Date range with start after end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Range start.
        start: chrono::NaiveDate,
        /// Range end.
        end: chrono::NaiveDate,
    },

    /// Rows are not in strictly ascending date order.
    #[error("Dates must be strictly ascending: {previous} followed by {next}")]
    UnorderedDates {
        /// Earlier row date.
        previous: chrono::NaiveDate,
        /// Offending row date.
        next: chrono::NaiveDate,
    },

    /// A row does not carry one value per ticker.
    #[error("Row {date} has {actual} values, expected {expected}")]
    RowWidthMismatch {
        /// Date of the row.
        date: chrono::NaiveDate,
        /// Number of tickers.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// A value is not usable (NaN, infinite, or a non-positive price).
    #[error("Invalid value {value} for {ticker} on {date}")]
    InvalidValue {
        /// Ticker column.
        ticker: String,
        /// Row date.
        date: chrono::NaiveDate,
        /// The rejected value.
        value: f64,
    },

    /// Same ticker appears twice in a table.
    #[error("Duplicate ticker: {0}")]
    DuplicateTicker(String),

    /// Ticker not present in a table.
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    /// Table has no tickers.
    #[error("Table has no tickers")]
    NoTickers,
}

/// Errors raised by [`PriceSource`](crate::traits::PriceSource) providers.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure (connection, timeout, HTTP status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The remote service answered with an error payload.
    #[error("API error for {ticker}: {message}")]
    Api {
        /// Ticker being requested.
        ticker: String,
        /// Message returned by the service.
        message: String,
    },

    /// Response or file content could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// The source does not know the requested ticker.
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    /// The source returned no usable prices.
    #[error("No price data for {tickers} in {range}")]
    NoData {
        /// Comma-separated tickers requested.
        tickers: String,
        /// Requested range.
        range: String,
    },

    /// Fetched data violated a data-model invariant.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e.to_string())
    }
}
