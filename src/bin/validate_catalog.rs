//! Checks the package catalog before it is published or consumed.
//!
//! Usage:
//!   validate-catalog
//!   validate-catalog --catalog path/to/catalog.json
//!
//! Without arguments the catalog is read from `package-catalog/catalog.json`
//! under the working directory. Exit status is 0 when the catalog is valid or
//! not created yet, 1 when violations were found or the file cannot be parsed.

use anyhow::{Context, Result};
use clap::Parser;
use pgcatalog::report::EXIT_INVALID;
use pgcatalog::{Outcome, check_catalog, default_catalog_path};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "validate-catalog")]
#[command(about = "Validate the structure of the package catalog")]
struct Cli {
    /// Catalog file to check; defaults to package-catalog/catalog.json.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() {
    init_tracing();
    match run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(EXIT_INVALID);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    let path = match cli.catalog {
        Some(path) => path,
        None => default_catalog_path(&env::current_dir().context("resolving working directory")?),
    };

    let outcome = check_catalog(&path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    outcome.render(&mut out).context("writing report to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(outcome)
}

// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
