//! ringsight: analyze a transaction CSV and print the result as JSON.
//!
//! This is the calling boundary around the core engine: it loads the CSV,
//! times the analysis, fills `processing_time_seconds`, and maps any engine
//! error to a non-zero exit with the descriptive message.
//!
//! Usage:
//!   ringsight --input transactions.csv [--output result.json] [--pretty]

use anyhow::{Context, Result};
use ringsight_core::{analyze, TransactionTable};
use std::env;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = flag_value(&args, "--input")
        .context("usage: ringsight --input <transactions.csv> [--output <file>] [--pretty]")?;
    let output = flag_value(&args, "--output");
    let pretty = args.iter().any(|a| a == "--pretty");

    let table = TransactionTable::from_csv_path(&input)
        .with_context(|| format!("failed to load {input}"))?;
    log::info!("loaded {} transactions from {input}", table.len());

    let started = Instant::now();
    let mut result = analyze(&table)?;
    result.summary.processing_time_seconds =
        (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("failed to write {path}"))?;
            log::info!("result written to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
