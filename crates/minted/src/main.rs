//! minted - Pandoc filter that typesets code with the LaTeX minted package

use anyhow::{Context, Result};
use clap::Parser;
use minted::Minted;
use pandoc_filter::run_filter_reporting;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minted")]
#[command(about = "Convert code blocks and inline code to minted LaTeX.", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Target output format (passed by pandoc)
    format: Option<String>,

    /// Print version
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minted=warn,pandoc_filter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("minted {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let format = cli.format.unwrap_or_default();
    run_filter_reporting(
        &Minted,
        &format,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    )
    .context("minted filter failed")?;
    Ok(())
}
