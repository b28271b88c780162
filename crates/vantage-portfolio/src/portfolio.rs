//! Portfolio definitions.

use serde::{Deserialize, Serialize};
use tracing::warn;
use vantage_core::{PriceTable, ReturnSeries, Ticker};

use crate::aggregate::portfolio_returns;
use crate::returns::simple_returns;
use crate::{PortfolioError, PortfolioResult};

/// Tolerance on `|sum(weights) - 1|` before a warning is logged.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A single ticker with its portfolio weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// Fraction of portfolio value.
    pub weight: f64,
}

/// A named set of tickers with fixed weights.
///
/// Weights are used as given: they are expected to sum to one but are never
/// normalised. A portfolio whose weights do not sum to one still aggregates,
/// with a warning in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PortfolioSpec", into = "PortfolioSpec")]
pub struct Portfolio {
    name: String,
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a portfolio from parallel ticker and weight lists.
    pub fn new(
        name: impl Into<String>,
        tickers: Vec<Ticker>,
        weights: Vec<f64>,
    ) -> PortfolioResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PortfolioError::MissingField {
                field: "name".to_string(),
            });
        }
        if tickers.is_empty() {
            return Err(PortfolioError::invalid(format!("{name} has no tickers")));
        }
        if tickers.len() != weights.len() {
            return Err(PortfolioError::DimensionMismatch {
                tickers: tickers.len(),
                weights: weights.len(),
            });
        }
        for (i, t) in tickers.iter().enumerate() {
            if tickers[..i].contains(t) {
                return Err(PortfolioError::invalid(format!("{t} listed twice in {name}")));
            }
        }
        if let Some((t, &w)) = tickers.iter().zip(&weights).find(|(_, w)| !w.is_finite()) {
            return Err(PortfolioError::InvalidWeight {
                ticker: t.to_string(),
                weight: w,
            });
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warn!(portfolio = %name, weight_sum = sum, "portfolio weights do not sum to 1");
        }

        let holdings = tickers
            .into_iter()
            .zip(weights)
            .map(|(ticker, weight)| Holding { ticker, weight })
            .collect();

        Ok(Self { name, holdings })
    }

    /// Portfolio name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Holdings in declaration order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Tickers in declaration order.
    pub fn tickers(&self) -> Vec<Ticker> {
        self.holdings.iter().map(|h| h.ticker.clone()).collect()
    }

    /// Weights in ticker order.
    pub fn weights(&self) -> Vec<f64> {
        self.holdings.iter().map(|h| h.weight).collect()
    }

    /// Sum of weights.
    pub fn weight_sum(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight).sum()
    }

    /// Human-readable composition, e.g. `META 50.0%, GOOGL 50.0%`.
    pub fn composition(&self) -> String {
        self.holdings
            .iter()
            .map(|h| format!("{} {:.1}%", h.ticker, h.weight * 100.0))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Aligns `prices` to this portfolio's tickers, converts to returns and
    /// aggregates with the portfolio weights.
    pub fn returns_from_prices(&self, prices: &PriceTable) -> PortfolioResult<ReturnSeries> {
        let aligned = prices.select(&self.tickers())?;
        let returns = simple_returns(&aligned)?;
        portfolio_returns(&returns, &self.weights())
    }
}

/// Serialised form of a [`Portfolio`], as written in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSpec {
    /// Display name.
    pub name: String,
    /// Ticker symbols.
    pub tickers: Vec<String>,
    /// Weights in ticker order.
    pub weights: Vec<f64>,
}

impl TryFrom<PortfolioSpec> for Portfolio {
    type Error = PortfolioError;

    fn try_from(spec: PortfolioSpec) -> Result<Self, Self::Error> {
        let tickers = spec
            .tickers
            .iter()
            .map(Ticker::new)
            .collect::<Result<Vec<_>, _>>()?;
        Portfolio::new(spec.name, tickers, spec.weights)
    }
}

impl From<Portfolio> for PortfolioSpec {
    fn from(p: Portfolio) -> Self {
        Self {
            tickers: p.holdings.iter().map(|h| h.ticker.to_string()).collect(),
            weights: p.holdings.iter().map(|h| h.weight).collect(),
            name: p.name,
        }
    }
}

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use vantage_portfolio::PortfolioBuilder;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("TSLA & AMZN")
///     .add_holding("TSLA", 0.5)
///     .add_holding("AMZN", 0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.weights(), vec![0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    holdings: Vec<(String, f64)>,
}

impl PortfolioBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a ticker with its weight.
    #[must_use]
    pub fn add_holding(mut self, ticker: impl Into<String>, weight: f64) -> Self {
        self.holdings.push((ticker.into(), weight));
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing, a ticker is invalid or
    /// repeated, or a weight is not finite.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self.name.ok_or_else(|| PortfolioError::MissingField {
            field: "name".to_string(),
        })?;
        let (tickers, weights): (Vec<String>, Vec<f64>) = self.holdings.into_iter().unzip();
        Portfolio::try_from(PortfolioSpec {
            name,
            tickers,
            weights,
        })
    }
}
