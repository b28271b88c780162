//! Portfolios command implementation.
//!
//! Lists the preset portfolios and any defined in the config file.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::output::{print_header, print_json, print_output};

/// One listed portfolio.
#[derive(Debug, Serialize, Tabled)]
struct PortfolioRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Holdings")]
    holdings: String,
    #[tabled(rename = "Origin")]
    origin: &'static str,
}

/// Execute the portfolios command.
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let listed = config.all_portfolios();

    match format {
        OutputFormat::Json => {
            let specs: Vec<_> = listed.iter().map(|(p, _)| p).collect();
            print_json(&specs)?;
        }
        _ => {
            let rows: Vec<PortfolioRow> = listed
                .iter()
                .map(|(p, origin)| PortfolioRow {
                    name: p.name().to_string(),
                    holdings: p.composition(),
                    origin: *origin,
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Portfolios");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
