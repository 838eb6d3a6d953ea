//! Adder Normalizer CLI
//!
//! Reads the raw adder dump and writes the complete canonical truth table.

use adder_common::{logging, AdderConfig, TableError};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addernorm")]
#[command(about = "Normalize a 4-bit adder dump into a complete canonical truth table", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source dump (overrides config input_path)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Canonical CSV to write (overrides config output_path)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let config = AdderConfig::load(cli.config.as_deref())
        .context("Failed to load config")?
        .with_overrides(cli.input.clone(), cli.output.clone());

    let summary = addernorm::run(&config).with_context(|| {
        format!(
            "Failed to normalize {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Saved {} rows to '{}'",
            summary.rows_written,
            config.output_path.display()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err.downcast_ref::<TableError>().map_or(1, TableError::exit_code);
        std::process::exit(code);
    }
}
