use std::env;
use std::fs::File;
use std::io;

use account_ledger::config::LedgerConfig;
use account_ledger::process_operations;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the receipts
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() == 2,
        "Usage: {} <operations.csv>",
        args.first().map(String::as_str).unwrap_or("account-ledger")
    );

    let filename = &args[1];

    let config = LedgerConfig::from_env().context("Invalid ledger configuration")?;

    let file = File::open(filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    let ledger = process_operations(file, io::stdout(), config.initial_balance)
        .context("Failed to process operations and write receipts")?;

    info!(
        balance = %ledger.balance(),
        transactions = ledger.transaction_history().len(),
        "replay finished"
    );

    Ok(())
}
