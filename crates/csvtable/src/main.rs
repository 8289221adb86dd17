//! csvtable - Pandoc filter that includes CSV data as tables

use anyhow::{Context, Result};
use clap::Parser;
use csvtable::CsvTable;
use pandoc_filter::run_filter_reporting;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "csvtable")]
#[command(about = "Include content from CSV files as tables in Pandoc.", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Target output format (passed by pandoc)
    format: Option<String>,

    /// Parse cell content as markdown
    #[arg(short = 'm', long)]
    markdown: bool,

    /// Print version
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "csvtable=warn,pandoc_filter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("csvtable {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if cli.markdown {
        // cells are always parsed as markdown; the flag is accepted for compatibility
        tracing::debug!("--markdown has no effect");
    }

    let format = cli.format.unwrap_or_default();
    let filter: CsvTable = CsvTable::default();
    run_filter_reporting(
        &filter,
        &format,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )
    .context("csvtable filter failed")?;
    Ok(())
}
