//! Analyze command implementation.
//!
//! Fetches prices for a portfolio and reports its VaR and CVaR.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use vantage_core::{DateRange, PriceSource, Ticker};
use vantage_ext_file::CsvPriceSource;
use vantage_ext_yahoo::YahooPriceSource;
use vantage_portfolio::Portfolio;
use vantage_risk::analysis::{analyze, RiskRequest, RiskResponse};
use vantage_risk::{MonetaryRisk, RiskConfig};

use crate::chart::{histogram_chart, time_series_chart, var_markers};
use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_weights};
use crate::config::{validate_confidence, AppConfig, SourceKind};
use crate::error::CliError;
use crate::output::{print_csv, print_header, print_json, print_output, KeyValue};

const HISTOGRAM_WIDTH: usize = 40;
const SERIES_WIDTH: usize = 60;
const SERIES_HEIGHT: usize = 12;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Preset or configured portfolio name (see `vantage portfolios`)
    #[arg(short, long, conflicts_with = "tickers")]
    pub portfolio: Option<String>,

    /// Comma-separated tickers for an ad-hoc portfolio, e.g. AAPL,MSFT
    #[arg(short, long)]
    pub tickers: Option<String>,

    /// Comma-separated weights matching --tickers. Defaults to equal weights.
    #[arg(short, long, requires = "tickers")]
    pub weights: Option<String>,

    /// Display name for an ad-hoc portfolio
    #[arg(long, requires = "tickers")]
    pub name: Option<String>,

    /// First price date (YYYY-MM-DD). Defaults to January 2nd of this year.
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date, exclusive (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub end: Option<String>,

    /// Confidence level in percent: 95 or 99
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// Number of Monte Carlo draws
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// Seed for a reproducible Monte Carlo run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Price source
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// CSV price file (implies --source csv)
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Position value for loss amounts
    #[arg(long)]
    pub notional: Option<Decimal>,

    /// Histogram bin count
    #[arg(long)]
    pub bins: Option<usize>,

    /// Skip the charts
    #[arg(long)]
    pub no_charts: bool,
}

/// Flat summary record for CSV output.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    portfolio: &'a str,
    start: String,
    end: String,
    confidence: f64,
    observations: usize,
    mean: f64,
    std_dev: f64,
    historical_var: f64,
    parametric_var: f64,
    monte_carlo_var: f64,
    historical_cvar: f64,
}

/// JSON document: the analysis plus optional loss amounts.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    response: &'a RiskResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    monetary: Option<&'a MonetaryRisk>,
}

/// Execute the analyze command.
pub fn execute(
    args: AnalyzeArgs,
    config: &AppConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let portfolio = resolve_portfolio(&args, config)?;
    let range = resolve_range(&args)?;

    let confidence = validate_confidence(args.confidence.unwrap_or(config.confidence))?;
    let mut risk = RiskConfig::new(confidence)
        .with_simulations(args.simulations.unwrap_or(config.simulations));
    if let Some(seed) = args.seed.or(config.seed) {
        risk = risk.with_seed(seed);
    }

    let bins = args.bins.unwrap_or(config.histogram_bins);
    if bins == 0 {
        return Err(CliError::Config("--bins must be positive".to_string()).into());
    }

    let source = build_source(&args, config)?;
    info!(
        portfolio = portfolio.name(),
        source = source.name(),
        %range,
        confidence,
        "starting analysis"
    );

    let request = RiskRequest::new(portfolio, range, risk);
    let response = analyze(source.as_ref(), &request)?;
    let monetary = args
        .notional
        .map(|n| response.report.monetary(n))
        .transpose()?;

    match format {
        OutputFormat::Table => {
            print_table(&response, monetary.as_ref(), source.name())?;
            if !quiet && !args.no_charts {
                print_charts(&response, bins)?;
            }
        }
        OutputFormat::Json => print_json(&JsonOutput {
            response: &response,
            monetary: monetary.as_ref(),
        })?,
        OutputFormat::Csv => print_csv(&[summary_row(&response)])?,
        OutputFormat::Minimal => println!("{}", response.report),
    }

    Ok(())
}

fn resolve_portfolio(args: &AnalyzeArgs, config: &AppConfig) -> Result<Portfolio> {
    if let Some(list) = &args.tickers {
        let tickers =
            Ticker::parse_list(list).map_err(|e| CliError::InvalidPortfolio(e.to_string()))?;
        let weights = match &args.weights {
            Some(w) => parse_weights(w)?,
            None => vec![1.0 / tickers.len() as f64; tickers.len()],
        };
        let name = args.name.clone().unwrap_or_else(|| {
            tickers
                .iter()
                .map(Ticker::as_str)
                .collect::<Vec<_>>()
                .join(" & ")
        });
        return Portfolio::new(name, tickers, weights)
            .map_err(|e| CliError::InvalidPortfolio(e.to_string()).into());
    }

    let name = args
        .portfolio
        .as_deref()
        .unwrap_or(&config.default_portfolio);
    config
        .find_portfolio(name)
        .ok_or_else(|| CliError::UnknownPortfolio(name.to_string()).into())
}

fn resolve_range(args: &AnalyzeArgs) -> Result<DateRange> {
    let default = DateRange::year_to_date(Local::now().date_naive());
    let start = args
        .start
        .as_deref()
        .map(parse_date)
        .transpose()?
        .unwrap_or(default.start());
    let end = args
        .end
        .as_deref()
        .map(parse_date)
        .transpose()?
        .unwrap_or(default.end());
    Ok(DateRange::new(start, end)?)
}

fn build_source(args: &AnalyzeArgs, config: &AppConfig) -> Result<Box<dyn PriceSource>> {
    let kind = args.source.unwrap_or(if args.prices.is_some() {
        SourceKind::Csv
    } else {
        config.source
    });

    match kind {
        SourceKind::Csv => {
            let path = args
                .prices
                .clone()
                .or_else(|| config.prices_file.clone())
                .ok_or_else(|| CliError::MissingArgument("--prices (csv source)".to_string()))?;
            Ok(Box::new(CsvPriceSource::open(path)?))
        }
        SourceKind::Yahoo => Ok(Box::new(YahooPriceSource::new(config.yahoo.clone())?)),
    }
}

fn print_table(
    response: &RiskResponse,
    monetary: Option<&MonetaryRisk>,
    source: &str,
) -> Result<()> {
    let report = &response.report;
    print_header(&format!(
        "Portfolio Risk: {} ({:.0}% confidence)",
        response.portfolio,
        report.confidence_level * 100.0
    ));

    let mut results = vec![
        KeyValue::new("Portfolio", response.portfolio.as_str()),
        KeyValue::new("Holdings", response.composition.as_str()),
        KeyValue::new("Source", source),
        KeyValue::new(
            "Period",
            format!("{} to {}", response.range.start(), response.range.end()),
        ),
        KeyValue::new("Return Dates", return_dates(response)),
        KeyValue::new("Observations", report.observations.to_string()),
        KeyValue::from_percent("Mean Daily Return", report.mean),
        KeyValue::from_percent("Daily Volatility", report.std_dev),
        KeyValue::new("", ""), // Separator
        KeyValue::from_percent("Historical VaR", report.historical_var),
        KeyValue::from_percent("Parametric VaR", report.parametric_var),
        KeyValue::from_percent("Monte Carlo VaR", report.monte_carlo_var),
        KeyValue::from_percent("Historical CVaR", report.historical_cvar),
        KeyValue::new("Simulations", report.simulations.to_string()),
    ];

    if let Some(m) = monetary {
        results.push(KeyValue::new("", ""));
        results.push(KeyValue::new("Notional", format!("{:.2}", m.notional)));
        results.push(KeyValue::new("Historical VaR Loss", format!("{:.2}", m.historical_var)));
        results.push(KeyValue::new("Parametric VaR Loss", format!("{:.2}", m.parametric_var)));
        results.push(KeyValue::new("Monte Carlo VaR Loss", format!("{:.2}", m.monte_carlo_var)));
        results.push(KeyValue::new("Historical CVaR Loss", format!("{:.2}", m.historical_cvar)));
    }

    print_output(&results, OutputFormat::Table)
}

/// Span of the dates that actually carry a portfolio return.
fn return_dates(response: &RiskResponse) -> String {
    match (response.series.first_date(), response.series.last_date()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "-".to_string(),
    }
}

fn print_charts(response: &RiskResponse, bins: usize) -> Result<()> {
    let markers = var_markers(&response.report);

    print_header("Return Distribution");
    println!(
        "{}",
        histogram_chart(&response.series.values(), bins, &markers, HISTOGRAM_WIDTH)?
    );

    print_header("Daily Returns");
    println!(
        "{}",
        time_series_chart(response.series.points(), &markers, SERIES_WIDTH, SERIES_HEIGHT)
    );
    Ok(())
}

fn summary_row(response: &RiskResponse) -> SummaryRow<'_> {
    let r = &response.report;
    SummaryRow {
        portfolio: &response.portfolio,
        start: response.range.start().to_string(),
        end: response.range.end().to_string(),
        confidence: r.confidence_level,
        observations: r.observations,
        mean: r.mean,
        std_dev: r.std_dev,
        historical_var: r.historical_var,
        parametric_var: r.parametric_var,
        monte_carlo_var: r.monte_carlo_var,
        historical_cvar: r.historical_cvar,
    }
}
