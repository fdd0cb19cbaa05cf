//! End-to-end pipeline: convert → load → rank (×2) → export (×2).
//!
//! Fail-fast: the first structural error (unreadable file, malformed CSV,
//! missing column, unwritable output) aborts the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use magicrank_core::{rank, Metric, RankedTable, RankingConfig};

use crate::config::PipelineConfig;
use crate::convert::convert_file;
use crate::data_loader::{load_records, LoadOptions, LoadedRecords};
use crate::export::export_ranked;

/// What one ranking produced and where it went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub name: String,
    pub primary: Metric,
    pub secondary: Metric,
    pub rows: usize,
    pub output: PathBuf,
}

/// Provenance and counts for a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: NaiveDateTime,
    pub input: PathBuf,
    pub dataset_hash: String,
    pub rows_read: usize,
    pub rows_retained: usize,
    pub rankings: Vec<RankingSummary>,
}

/// Run every stage against the paths in `config`.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary> {
    convert_file(&config.input, &config.converted).with_context(|| {
        format!(
            "failed to convert {} into {}",
            config.input.display(),
            config.converted.display()
        )
    })?;

    let opts = LoadOptions {
        min_liquidity: config.min_liquidity,
    };
    let loaded = load_records(&config.converted, &opts)
        .with_context(|| format!("failed to load {}", config.converted.display()))?;

    let mut rankings = Vec::with_capacity(2);
    for ranking in RankingConfig::presets() {
        let output = config
            .output_for(&ranking.name)
            .with_context(|| format!("no output path configured for {}", ranking.name))?;
        let table = rank_loaded(&loaded, &ranking);
        export_ranked(&table, output)
            .with_context(|| format!("failed to export {} ranking", ranking.name))?;
        rankings.push(summarize(&ranking, &table, output));
    }

    Ok(RunSummary {
        generated_at: chrono::Local::now().naive_local(),
        input: config.input.clone(),
        dataset_hash: loaded.dataset_hash.clone(),
        rows_read: loaded.rows_read,
        rows_retained: loaded.rows_retained(),
        rankings,
    })
}

/// Rank an already-loaded set, logging how many records the positivity
/// filter excluded.
pub fn rank_loaded(loaded: &LoadedRecords, ranking: &RankingConfig) -> RankedTable {
    let table = rank(&loaded.records, ranking);
    info!(
        ranking = %ranking.name,
        primary = ranking.primary.column(),
        secondary = ranking.secondary.column(),
        ranked = table.len(),
        excluded = loaded.rows_retained().saturating_sub(table.len()),
        "ranked instruments"
    );
    table
}

/// Write `summary` as pretty JSON.
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(summary).context("failed to serialize run summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote run summary");
    Ok(())
}

fn summarize(ranking: &RankingConfig, table: &RankedTable, output: &Path) -> RankingSummary {
    RankingSummary {
        name: ranking.name.clone(),
        primary: ranking.primary,
        secondary: ranking.secondary,
        rows: table.len(),
        output: output.to_path_buf(),
    }
}
