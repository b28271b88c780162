//! End-to-end portfolio risk analysis.
//!
//! The workflow is split in two so that data acquisition (network, files)
//! and computation fail independently:
//!
//! 1. [`fetch_prices`] asks a [`PriceSource`] for the portfolio's prices.
//! 2. [`analyze_prices`] turns those prices into a return series and a
//!    [`RiskReport`]. It is pure given the random source.
//!
//! [`analyze`] composes both steps.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use vantage_core::{DateRange, PriceSource, PriceTable, ReturnSeries};
use vantage_portfolio::{Portfolio, PortfolioError};

use crate::calculator::{RiskCalculator, RiskConfig};
use crate::report::RiskReport;
use crate::var::MIN_OBSERVATIONS;
use crate::{RiskError, RiskResult};

/// What to analyse: a portfolio over a date window at given risk settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRequest {
    /// Portfolio to analyse.
    pub portfolio: Portfolio,
    /// Price window, end exclusive.
    pub range: DateRange,
    /// Confidence and simulation settings.
    pub config: RiskConfig,
}

impl RiskRequest {
    /// Creates a request.
    pub fn new(portfolio: Portfolio, range: DateRange, config: RiskConfig) -> Self {
        Self {
            portfolio,
            range,
            config,
        }
    }
}

/// Result of a portfolio risk analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    /// Portfolio name.
    pub portfolio: String,
    /// Human-readable holdings, e.g. `META 50.0%, GOOGL 50.0%`.
    pub composition: String,
    /// Requested window.
    pub range: DateRange,
    /// Aligned price rows used.
    pub price_rows: usize,
    /// The risk statistics.
    pub report: RiskReport,
    /// The portfolio's daily returns.
    pub series: ReturnSeries,
}

/// Fetches the portfolio's prices over the requested window.
#[instrument(skip_all, fields(source = source.name(), portfolio = request.portfolio.name()))]
pub fn fetch_prices<S>(source: &S, request: &RiskRequest) -> RiskResult<PriceTable>
where
    S: PriceSource + ?Sized,
{
    let tickers = request.portfolio.tickers();
    let prices = source.fetch(&tickers, &request.range)?;
    info!(rows = prices.len(), range = %request.range, "fetched prices");
    Ok(prices)
}

/// Computes returns and risk statistics from already-fetched prices.
///
/// `prices` may carry more tickers than the portfolio, or carry them in
/// another order; columns are matched by ticker.
pub fn analyze_prices<R: Rng + ?Sized>(
    prices: &PriceTable,
    request: &RiskRequest,
    rng: &mut R,
) -> RiskResult<RiskResponse> {
    let calculator = RiskCalculator::new(request.config)?;

    let series = request
        .portfolio
        .returns_from_prices(prices)
        .map_err(|e| match e {
            // Too few prices means too few returns.
            PortfolioError::InsufficientData { actual, .. } => RiskError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: actual.saturating_sub(1),
            },
            other => RiskError::Portfolio(other),
        })?;

    let report = calculator.report_with_rng(&series.values(), rng)?;
    info!(
        portfolio = request.portfolio.name(),
        observations = report.observations,
        "risk analysis complete"
    );

    Ok(RiskResponse {
        portfolio: request.portfolio.name().to_string(),
        composition: request.portfolio.composition(),
        range: request.range,
        price_rows: prices.len(),
        report,
        series,
    })
}

/// Fetches prices and analyses them, seeding the Monte Carlo step from the
/// request's config.
pub fn analyze<S>(source: &S, request: &RiskRequest) -> RiskResult<RiskResponse>
where
    S: PriceSource + ?Sized,
{
    let prices = fetch_prices(source, request)?;
    let mut rng = request.config.rng();
    analyze_prices(&prices, request, &mut rng)
}
