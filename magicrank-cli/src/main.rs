//! MagicRank CLI — run the magic-formula screen over a locale-formatted CSV.
//!
//! With no arguments the pipeline reads `stocks.csv`, writes
//! `stocks_converted.csv`, and exports:
//! - `magic_formula_results_pl_roe.xlsx` — P/L + ROE ranking
//! - `magic_formula_results_ev_ebit_roic.xlsx` — EV/EBIT + ROIC ranking
//!
//! `--config` overrides paths, threshold, and logging from a TOML file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use magicrank_runner::{run_pipeline, write_summary, PipelineConfig, RunSummary};

#[derive(Parser)]
#[command(
    name = "magicrank",
    about = "MagicRank — Greenblatt magic-formula ranking (P/L+ROE, EV/EBIT+ROIC)"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to the built-in file layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the run summary as JSON to this path.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    config.logging.init();
    info!(input = %config.input.display(), "starting magic-formula run");

    let summary = run_pipeline(&config)?;
    print_summary(&summary);

    if let Some(path) = cli.summary {
        write_summary(&summary, &path)?;
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Loaded {} rows from {} ({} above liquidity threshold)",
        summary.rows_read,
        summary.input.display(),
        summary.rows_retained
    );
    println!("Dataset hash: {}", summary.dataset_hash);
    for ranking in &summary.rankings {
        println!(
            "  {:<14} {:>5} ranked → {}",
            ranking.name,
            ranking.rows,
            ranking.output.display()
        );
    }
}
