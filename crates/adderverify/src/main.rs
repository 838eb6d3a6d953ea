//! Adder Verifier CLI
//!
//! Checks every row of the canonical truth table against an independent
//! adder model. Exit status 0 when every row is correct, 1 when any row is
//! wrong or unreadable.

use adder_common::{logging, AdderConfig, TableError};
use adderverify::report::print_report;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adderverify")]
#[command(about = "Verify a canonical 4-bit adder truth table", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canonical CSV to check (overrides config output_path)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<bool> {
    let config = AdderConfig::load(cli.config.as_deref())
        .context("Failed to load config")?
        .with_overrides(None, cli.input.clone());

    let report = adderverify::verify_file(&config.output_path)
        .with_context(|| format!("Failed to verify {}", config.output_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report.is_success())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err.downcast_ref::<TableError>().map_or(2, TableError::exit_code);
            std::process::exit(code);
        }
    }
}
