//! Blocking HTTP client for the chart endpoint.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use vantage_core::{
    DateRange, PriceColumn, PriceSource, PriceTable, SourceError, SourceResult, Ticker,
};

use crate::chart::parse_chart;

/// Public Yahoo Finance query host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// The endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = concat!("Mozilla/5.0 (compatible; vantage/", env!("CARGO_PKG_VERSION"), ")");

/// Connection settings for [`YahooPriceSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    /// Scheme and host, without a trailing path.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Use dividend/split adjusted closes.
    pub adjusted: bool,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            adjusted: true,
        }
    }
}

/// Daily closing prices from the Yahoo Finance chart API.
#[derive(Debug, Clone)]
pub struct YahooPriceSource {
    client: Client,
    config: YahooConfig,
}

impl YahooPriceSource {
    /// Create a source with the given settings.
    pub fn new(config: YahooConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Chart endpoint URL for `ticker`.
    pub fn chart_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.config.base_url.trim_end_matches('/'),
            ticker
        )
    }

    fn fetch_one(&self, ticker: &Ticker, range: &DateRange) -> SourceResult<String> {
        let url = self.chart_url(ticker);
        debug!(%ticker, %url, %range, "requesting chart");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", unix_midnight(range.start()).to_string()),
                ("period2", unix_midnight(range.end()).to_string()),
                ("interval", "1d".to_string()),
                ("events", "div,splits".to_string()),
            ])
            .send()
            .map_err(|e| SourceError::Http(format!("{ticker}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SourceError::Http(format!("{ticker}: {e}")))?;

        // Error payloads (unknown symbol, bad range) arrive with 4xx statuses
        // but still carry a parseable chart.error.
        if !status.is_success() && !body.contains("\"chart\"") {
            return Err(SourceError::Http(format!("{ticker}: HTTP {status}")));
        }
        Ok(body)
    }
}

impl PriceSource for YahooPriceSource {
    fn name(&self) -> &str {
        "yahoo"
    }

    fn fetch(&self, tickers: &[Ticker], range: &DateRange) -> SourceResult<PriceTable> {
        let mut columns = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let body = self.fetch_one(ticker, range)?;
            columns.push(parse_chart(ticker, &body, self.config.adjusted)?);
        }

        let table = align_window(tickers, range, columns)?;
        info!(tickers = tickers.len(), rows = table.len(), %range, "fetched Yahoo prices");
        Ok(table)
    }
}

/// Trims parsed columns to `range` and joins them on their common dates.
fn align_window(
    tickers: &[Ticker],
    range: &DateRange,
    mut columns: Vec<PriceColumn>,
) -> SourceResult<PriceTable> {
    for column in &mut columns {
        // The endpoint may append today's live bar past period2.
        column.observations.retain(|(date, _)| range.contains(*date));
    }

    if columns.iter().all(|c| c.observations.is_empty()) {
        return Err(SourceError::NoData {
            tickers: tickers
                .iter()
                .map(Ticker::as_str)
                .collect::<Vec<_>>()
                .join(","),
            range: range.to_string(),
        });
    }

    Ok(PriceTable::from_columns(columns)?)
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map_or(0, |dt| dt.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = YahooConfig::default();
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.timeout_secs, 30);
        assert!(c.adjusted);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let c: YahooConfig = toml::from_str("adjusted = false").unwrap();
        assert!(!c.adjusted);
        assert_eq!(c.timeout_secs, 30);
    }

    #[test]
    fn test_chart_url() {
        let source = YahooPriceSource::new(YahooConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..YahooConfig::default()
        })
        .unwrap();
        assert_eq!(
            source.chart_url(&Ticker::new("brk-b").unwrap()),
            "http://localhost:9000/v8/finance/chart/BRK-B"
        );
        assert_eq!(source.name(), "yahoo");
    }

    #[test]
    fn test_unix_midnight() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(unix_midnight(d), 1_704_153_600);
    }

    // 09:30 New York on 2024-01-02, one bar per day after that.
    const FIRST_OPEN: i64 = 1_704_205_800;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn window(start: u32, end: u32) -> DateRange {
        DateRange::new(day(start), day(end)).unwrap()
    }

    fn parsed(symbol: &str, closes: &[Option<f64>]) -> PriceColumn {
        let timestamps: Vec<String> = (0..closes.len())
            .map(|i| (FIRST_OPEN + 86_400 * i as i64).to_string())
            .collect();
        let closes: Vec<String> = closes
            .iter()
            .map(|c| c.map_or_else(|| "null".to_string(), |v| v.to_string()))
            .collect();
        let body = format!(
            r#"{{"chart":{{"result":[{{"meta":{{"gmtoffset":-18000}},"timestamp":[{}],
               "indicators":{{"quote":[{{"close":[{}]}}]}}}}],"error":null}}}}"#,
            timestamps.join(","),
            closes.join(","),
        );
        parse_chart(&Ticker::new(symbol).unwrap(), &body, true).unwrap()
    }

    fn tickers(symbols: &[&str]) -> Vec<Ticker> {
        symbols.iter().map(|s| Ticker::new(s).unwrap()).collect()
    }

    #[test]
    fn test_align_drops_bars_outside_window() {
        // Jan 2..=Jan 6, the last one a live bar past the exclusive end.
        let aapl = parsed("AAPL", &[Some(185.6), Some(184.3), Some(181.9), Some(181.2), Some(182.0)]);
        let table = align_window(&tickers(&["AAPL"]), &window(2, 6), vec![aapl]).unwrap();
        assert_eq!(table.dates(), vec![day(2), day(3), day(4), day(5)]);
        assert_eq!(table.rows()[0].values, vec![185.6]);
    }

    #[test]
    fn test_align_joins_on_common_dates() {
        let aapl = parsed("AAPL", &[Some(185.6), Some(184.3), Some(181.9), Some(181.2)]);
        let msft = parsed("MSFT", &[Some(370.9), None, Some(367.9), Some(368.0)]);
        let table =
            align_window(&tickers(&["AAPL", "MSFT"]), &window(1, 31), vec![aapl, msft]).unwrap();

        assert_eq!(table.tickers(), tickers(&["AAPL", "MSFT"]).as_slice());
        assert_eq!(table.dates(), vec![day(2), day(4), day(5)]);
        assert_eq!(table.rows()[1].values, vec![181.9, 367.9]);
    }

    #[test]
    fn test_align_empty_window_is_no_data() {
        let aapl = parsed("AAPL", &[Some(185.6), Some(184.3)]);
        let msft = parsed("MSFT", &[Some(370.9), Some(370.6)]);
        let err = align_window(&tickers(&["AAPL", "MSFT"]), &window(10, 20), vec![aapl, msft])
            .unwrap_err();
        match err {
            SourceError::NoData { tickers, range } => {
                assert_eq!(tickers, "AAPL,MSFT");
                assert_eq!(range, window(10, 20).to_string());
            }
            other => panic!("expected NoData, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_host_is_http_error() {
        let source = YahooPriceSource::new(YahooConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            adjusted: true,
        })
        .unwrap();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap();
        assert!(matches!(
            source.fetch(&[Ticker::new("AAPL").unwrap()], &range),
            Err(SourceError::Http(_))
        ));
    }
}
