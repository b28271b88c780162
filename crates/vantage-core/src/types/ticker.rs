//! Ticker symbols.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An exchange ticker symbol, normalised to upper case.
///
/// Symbols may contain ASCII letters, digits, `.`, `-`, `^` and `=`, which
/// covers share classes (`BRK-B`), indices (`^GSPC`) and FX pairs (`EURUSD=X`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker, trimming whitespace and upper-casing the symbol.
    pub fn new(symbol: impl AsRef<str>) -> CoreResult<Self> {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() {
            return Err(CoreError::InvalidTicker {
                symbol: symbol.to_string(),
                reason: "symbol is empty".to_string(),
            });
        }
        if let Some(c) = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(CoreError::InvalidTicker {
                symbol: symbol.to_string(),
                reason: format!("unexpected character {c:?}"),
            });
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    /// Parses a comma-separated list such as `"AAPL, msft"`.
    pub fn parse_list(list: &str) -> CoreResult<Vec<Self>> {
        list.split(',').map(Self::new).collect()
    }

    /// The symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
