//! Configuration file handling.
//!
//! The file is TOML. Every field has a default, so an empty or partial file
//! is valid. Command-line flags override the values read here.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vantage_ext_yahoo::YahooConfig;
use vantage_portfolio::presets::{builtin_portfolios, find_builtin, DEFAULT_PORTFOLIO};
use vantage_portfolio::Portfolio;
use vantage_risk::var::DEFAULT_SIMULATIONS;

use crate::error::{CliError, CliResult};

/// Confidence levels the CLI offers.
pub const SUPPORTED_CONFIDENCE: [f64; 2] = [0.95, 0.99];

/// Default histogram bin count.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Where prices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Yahoo Finance chart API
    #[default]
    Yahoo,
    /// Local CSV price file
    Csv,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yahoo => f.write_str("yahoo"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/// Contents of `config.toml`.
///
/// Scalars come before tables so the struct serialises to valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Confidence level, 0.95 or 0.99.
    pub confidence: f64,
    /// Monte Carlo draws.
    pub simulations: usize,
    /// Monte Carlo seed; unset means a fresh seed per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Price source.
    pub source: SourceKind,
    /// CSV price file for the `csv` source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices_file: Option<PathBuf>,
    /// Portfolio analysed when none is named.
    pub default_portfolio: String,
    /// Histogram bin count.
    pub histogram_bins: usize,
    /// Yahoo connection settings.
    pub yahoo: YahooConfig,
    /// User-defined portfolios.
    pub portfolios: Vec<Portfolio>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
            source: SourceKind::Yahoo,
            prices_file: None,
            default_portfolio: DEFAULT_PORTFOLIO.to_string(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            yahoo: YahooConfig::default(),
            portfolios: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. The default location may be absent, in
    /// which case defaults are used.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates TOML content.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises to TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> CliResult<()> {
        validate_confidence(self.confidence)?;
        if self.simulations == 0 {
            return Err(CliError::Config("simulations must be positive".to_string()));
        }
        if self.histogram_bins == 0 {
            return Err(CliError::Config("histogram_bins must be positive".to_string()));
        }
        Ok(())
    }

    /// Looks a portfolio up by name, configured portfolios first, then
    /// presets. Matching ignores case.
    pub fn find_portfolio(&self, name: &str) -> Option<Portfolio> {
        self.portfolios
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .cloned()
            .or_else(|| find_builtin(name))
    }

    /// Presets followed by configured portfolios, tagged with their origin.
    pub fn all_portfolios(&self) -> Vec<(Portfolio, &'static str)> {
        builtin_portfolios()
            .into_iter()
            .map(|p| (p, "preset"))
            .chain(self.portfolios.iter().cloned().map(|p| (p, "config")))
            .collect()
    }
}

/// Accepts 95/99 as percentages or 0.95/0.99 as fractions.
pub fn validate_confidence(value: f64) -> CliResult<f64> {
    let fraction = if value > 1.0 { value / 100.0 } else { value };
    SUPPORTED_CONFIDENCE
        .iter()
        .copied()
        .find(|c| (c - fraction).abs() < 1e-9)
        .ok_or_else(|| CliError::InvalidConfidence(value.to_string()))
}

/// Default config file location.
pub fn default_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".to_string()))?;
    Ok(base.join("vantage").join("config.toml"))
}

/// Resolves the config file path: the explicit one, else the default.
pub fn resolve_path(path: Option<&Path>) -> CliResult<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_path(),
    }
}
