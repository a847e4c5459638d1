//! MarketDesk list tool.
//!
//! Usage:
//!   marketdesk --input products.json --search lamp --sort base_price:desc
//!
//! The page is printed to stdout as JSON; logs go to stderr.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use marketdesk_cli::{run, Cli};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let payload = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", cli.input.display()))?;
    info!("Loaded {}", cli.input.display());

    let page = run(payload, &cli.request(), cli.load_config())?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
