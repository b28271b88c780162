//! Chart endpoint response parsing.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use vantage_core::{PriceColumn, SourceError, SourceResult, Ticker};

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
    #[serde(default)]
    adjclose: Vec<AdjCloseBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses a chart endpoint body into a price column for `ticker`.
///
/// Bars are dated in the exchange's local calendar (`timestamp + gmtoffset`).
/// With `adjusted` the adjusted close is used when the response carries one,
/// the raw close otherwise. `null` closes become gaps.
pub fn parse_chart(ticker: &Ticker, body: &str, adjusted: bool) -> SourceResult<PriceColumn> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::Parse(format!("{ticker}: malformed chart response: {e}")))?;

    if let Some(err) = envelope.chart.error {
        return Err(SourceError::Api {
            ticker: ticker.to_string(),
            message: format!("{}: {}", err.code, err.description),
        });
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(PriceColumn::new(ticker.clone(), Vec::new()));
    };

    let closes = select_closes(result.indicators, adjusted);
    if !closes.is_empty() && closes.len() != result.timestamp.len() {
        return Err(SourceError::Parse(format!(
            "{ticker}: {} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        )));
    }

    let offset = result.meta.gmtoffset;
    let observations = result
        .timestamp
        .iter()
        .zip(closes.into_iter().chain(std::iter::repeat(None)))
        .map(|(&ts, close)| Ok((local_date(ts, offset, ticker)?, close)))
        .collect::<SourceResult<Vec<_>>>()?;

    debug!(%ticker, bars = observations.len(), adjusted, "parsed chart response");
    Ok(PriceColumn::new(ticker.clone(), observations))
}

fn select_closes(indicators: Indicators, adjusted: bool) -> Vec<Option<f64>> {
    let Indicators { quote, adjclose } = indicators;
    if adjusted {
        if let Some(block) = adjclose.into_iter().next() {
            if !block.adjclose.is_empty() {
                return block.adjclose;
            }
        }
    }
    quote.into_iter().next().map(|q| q.close).unwrap_or_default()
}

fn local_date(timestamp: i64, gmtoffset: i64, ticker: &Ticker) -> SourceResult<NaiveDate> {
    DateTime::from_timestamp(timestamp + gmtoffset, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| SourceError::Parse(format!("{ticker}: timestamp {timestamp} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl() -> Ticker {
        Ticker::new("AAPL").unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    // 2024-01-02/03/04 14:30 UTC, New York open.
    const BODY: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "AAPL", "gmtoffset": -18000},
                "timestamp": [1704205800, 1704292200, 1704378600],
                "indicators": {
                    "quote": [{"close": [185.64, 184.25, null], "open": [187.15, 184.22, 182.15]}],
                    "adjclose": [{"adjclose": [184.94, 183.55, null]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_adjusted_closes() {
        let col = parse_chart(&aapl(), BODY, true).unwrap();
        assert_eq!(col.ticker, aapl());
        assert_eq!(
            col.observations,
            vec![(d(2), Some(184.94)), (d(3), Some(183.55)), (d(4), None)]
        );
    }

    #[test]
    fn test_raw_closes() {
        let col = parse_chart(&aapl(), BODY, false).unwrap();
        assert_eq!(col.observations[0], (d(2), Some(185.64)));
    }

    #[test]
    fn test_falls_back_to_close_without_adjclose() {
        let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":0},
            "timestamp":[1704205800],
            "indicators":{"quote":[{"close":[185.64]}]}}],"error":null}}"#;
        let col = parse_chart(&aapl(), body, true).unwrap();
        assert_eq!(col.observations, vec![(d(2), Some(185.64))]);
    }

    #[test]
    fn test_gmtoffset_shifts_the_calendar_day() {
        // 2024-01-03 02:00 UTC is still the 2nd in New York.
        let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},
            "timestamp":[1704247200],
            "indicators":{"quote":[{"close":[100.0]}]}}],"error":null}}"#;
        let col = parse_chart(&aapl(), body, false).unwrap();
        assert_eq!(col.observations[0].0, d(2));
    }

    #[test]
    fn test_api_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = parse_chart(&aapl(), body, true).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Api { ref ticker, ref message } if ticker == "AAPL" && message.starts_with("Not Found")
        ));
    }

    #[test]
    fn test_empty_window() {
        let body = r#"{"chart":{"result":[{"meta":{"gmtoffset":-18000},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let col = parse_chart(&aapl(), body, true).unwrap();
        assert!(col.observations.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let body = r#"{"chart":{"result":[{"timestamp":[1704205800,1704292200],
            "indicators":{"quote":[{"close":[1.0]}]}}],"error":null}}"#;
        assert!(matches!(parse_chart(&aapl(), body, false), Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_chart(&aapl(), "<html>rate limited</html>", true),
            Err(SourceError::Parse(_))
        ));
    }
}
