//! Vantage CLI - Portfolio Value-at-Risk from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Year-to-date risk of the default portfolio, from Yahoo Finance
//! vantage analyze
//!
//! # A preset at 99% with a reproducible Monte Carlo run
//! vantage analyze --portfolio "AAPL & MSFT" --confidence 99 --seed 42
//!
//! # An ad-hoc portfolio from a local CSV file, as JSON
//! vantage --format json analyze --tickers SPY,TLT --weights 0.6,0.4 --prices prices.csv
//!
//! # List portfolios, write a starter config
//! vantage portfolios
//! vantage config init
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod chart;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::AppConfig;
use output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => {
            let config = AppConfig::load(config_path)?;
            commands::analyze::execute(args, &config, format, cli.quiet)?;
        }
        Commands::Portfolios => {
            let config = AppConfig::load(config_path)?;
            commands::portfolios::execute(&config, format)?;
        }
        Commands::Config(args) => commands::config::execute(args, config_path, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
