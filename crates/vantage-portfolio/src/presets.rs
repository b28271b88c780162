//! Built-in portfolios.

use crate::portfolio::{Portfolio, PortfolioBuilder};
use crate::PortfolioResult;

/// Name of the portfolio used when none is selected.
pub const DEFAULT_PORTFOLIO: &str = "META & GOOGL";

const PRESETS: [(&str, [&str; 2]); 3] = [
    ("META & GOOGL", ["META", "GOOGL"]),
    ("AAPL & MSFT", ["AAPL", "MSFT"]),
    ("TSLA & AMZN", ["TSLA", "AMZN"]),
];

/// The built-in equal-weight pairs.
pub fn builtin_portfolios() -> Vec<Portfolio> {
    PRESETS
        .iter()
        .filter_map(|(name, tickers)| equal_weight(name, tickers).ok())
        .collect()
}

/// Finds a built-in portfolio by name, ignoring case and surrounding space.
pub fn find_builtin(name: &str) -> Option<Portfolio> {
    let wanted = name.trim();
    builtin_portfolios()
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(wanted))
}

fn equal_weight(name: &str, tickers: &[&str]) -> PortfolioResult<Portfolio> {
    let weight = 1.0 / tickers.len() as f64;
    tickers
        .iter()
        .fold(PortfolioBuilder::new().name(name), |b, t| b.add_holding(*t, weight))
        .build()
}
