//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod portfolios;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use config::ConfigArgs;

use chrono::NaiveDate;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a comma-separated weight list such as `0.6,0.4`.
pub fn parse_weights(s: &str) -> CliResult<Vec<f64>> {
    s.split(',')
        .map(|w| {
            w.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidPortfolio(format!("invalid weight {:?}", w.trim())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(parse_date("15/03/2024"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_weights() {
        assert_eq!(parse_weights("0.6, 0.4").unwrap(), vec![0.6, 0.4]);
        assert!(parse_weights("0.6,x").is_err());
    }
}
