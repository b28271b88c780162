//! Config command implementation.
//!
//! Shows, locates and initialises the configuration file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::{resolve_path, AppConfig};
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, format),
        ConfigCommand::Path => execute_path(path, format),
        ConfigCommand::Init(init_args) => execute_init(init_args, path),
    }
}

/// Show current configuration.
fn execute_show(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = AppConfig::load(path)?;

    match format {
        OutputFormat::Table => {
            let mut results = vec![
                KeyValue::new("confidence", format!("{:.0}%", config.confidence * 100.0)),
                KeyValue::new("simulations", config.simulations.to_string()),
                KeyValue::new(
                    "seed",
                    config.seed.map_or_else(|| "(random)".to_string(), |s| s.to_string()),
                ),
                KeyValue::new("source", config.source.to_string()),
                KeyValue::new(
                    "prices_file",
                    config
                        .prices_file
                        .as_ref()
                        .map_or_else(|| "(none)".to_string(), |p| p.display().to_string()),
                ),
                KeyValue::new("default_portfolio", config.default_portfolio.as_str()),
                KeyValue::new("histogram_bins", config.histogram_bins.to_string()),
                KeyValue::new("yahoo.base_url", config.yahoo.base_url.as_str()),
                KeyValue::new("yahoo.timeout_secs", config.yahoo.timeout_secs.to_string()),
                KeyValue::new("yahoo.adjusted", config.yahoo.adjusted.to_string()),
            ];
            for p in &config.portfolios {
                results.push(KeyValue::new(format!("portfolio: {}", p.name()), p.composition()));
            }
            print_header("Current Configuration");
            print_output(&results, format)?;
        }
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Csv | OutputFormat::Minimal => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = resolve_path(path)?;
    if format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, path: Option<&Path>) -> Result<()> {
    let path = resolve_path(path)?;
    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, AppConfig::default().to_toml()?)?;

    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
