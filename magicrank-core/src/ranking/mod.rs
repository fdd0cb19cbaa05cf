//! Magic-formula ranking — two single-metric rankings combined by rank sum.
//!
//! Given a liquidity-filtered `RecordSet` and a `RankingConfig`:
//! 1. Drop records whose primary metric is null or not strictly positive.
//! 2. Rank the survivors by the primary metric (1-based, stable).
//! 3. Rank the same survivors by the secondary metric (1-based, stable,
//!    nulls last).
//! 4. Inner-join both rankings on ticker, in primary-ranking order.
//! 5. `rank_final = rank_primary + rank_secondary`.
//! 6. Project output columns.
//! 7. Stable sort by `rank_final` ascending.
//!
//! Every step is a pure function of the input; calling `rank` twice with the
//! same arguments yields the same table.

mod table;

pub use table::{RankedRow, RankedTable};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{InstrumentRecord, Metric, RecordSet, SortDirection};
use crate::schema::{RANK_FINAL_COLUMN, TICKER_COLUMN};

/// Which metric pair to rank by, and in which directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Stable identifier used in logs and run summaries.
    pub name: String,
    pub primary: Metric,
    pub secondary: Metric,
    pub primary_direction: SortDirection,
    pub secondary_direction: SortDirection,
}

impl RankingConfig {
    /// Cheapness metric ascending, profitability metric descending.
    pub fn new(name: impl Into<String>, primary: Metric, secondary: Metric) -> Self {
        Self {
            name: name.into(),
            primary,
            secondary,
            primary_direction: SortDirection::Ascending,
            secondary_direction: SortDirection::Descending,
        }
    }

    /// P/L ascending combined with ROE descending.
    pub fn pl_roe() -> Self {
        Self::new("pl_roe", Metric::PriceEarnings, Metric::ReturnOnEquity)
    }

    /// EV/EBIT ascending combined with ROIC descending.
    pub fn ev_ebit_roic() -> Self {
        Self::new("ev_ebit_roic", Metric::EvEbit, Metric::ReturnOnInvestedCapital)
    }

    /// Both standard configurations, in export order.
    pub fn presets() -> [Self; 2] {
        [Self::pl_roe(), Self::ev_ebit_roic()]
    }
}

/// Rank `records` under `config`.
///
/// Never fails: empty input, or input where no primary metric is positive,
/// yields an empty table with the full header.
pub fn rank(records: &RecordSet, config: &RankingConfig) -> RankedTable {
    let eligible: Vec<&InstrumentRecord> = records
        .records()
        .iter()
        .filter(|r| matches!(records.metric(r, config.primary), Some(v) if v > 0.0))
        .collect();

    let primary_order = stable_order(
        &eligible,
        |r| records.metric(r, config.primary),
        config.primary_direction,
    );
    let secondary_order = stable_order(
        &eligible,
        |r| records.metric(r, config.secondary),
        config.secondary_direction,
    );

    let mut secondary_by_ticker: HashMap<&str, Vec<(usize, &InstrumentRecord)>> = HashMap::new();
    for (pos, &i) in secondary_order.iter().enumerate() {
        let record = eligible[i];
        secondary_by_ticker
            .entry(record.ticker.as_str())
            .or_default()
            .push((pos + 1, record));
    }

    let (header, sources) = output_columns(records, config);

    let mut rows = Vec::with_capacity(eligible.len());
    for (pos, &i) in primary_order.iter().enumerate() {
        let rank_primary = pos + 1;
        let Some(matches) = secondary_by_ticker.get(eligible[i].ticker.as_str()) else {
            continue;
        };
        for &(rank_secondary, record) in matches {
            rows.push(RankedRow {
                ticker: record.ticker.clone(),
                rank_primary,
                rank_secondary,
                rank_final: rank_primary + rank_secondary,
                values: sources.iter().map(|&c| record.cells[c].clone()).collect(),
            });
        }
    }

    // Vec::sort_by_key is stable: ties keep primary-ranking order.
    rows.sort_by_key(|r| r.rank_final);

    RankedTable::new(config.name.clone(), header, rows)
}

/// Indices into `items`, stably sorted by `key` under `direction`.
fn stable_order<F>(items: &[&InstrumentRecord], key: F, direction: SortDirection) -> Vec<usize>
where
    F: Fn(&InstrumentRecord) -> Option<f64>,
{
    let keys: Vec<Option<f64>> = items.iter().map(|&r| key(r)).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| direction.compare(keys[a], keys[b]));
    order
}

/// Output header and, for every data column, its source column index.
///
/// Leading columns are fixed: ticker, primary rank, secondary rank, final
/// rank, price, primary metric, secondary metric, liquidity. The remaining
/// source columns follow in their original order; names already emitted
/// are not repeated.
fn output_columns(records: &RecordSet, config: &RankingConfig) -> (Vec<String>, Vec<usize>) {
    let map = records.column_map();
    let columns = records.columns();

    let mut header = vec![
        TICKER_COLUMN.to_string(),
        config.primary.rank_column(),
        config.secondary.rank_column(),
        RANK_FINAL_COLUMN.to_string(),
    ];
    let mut sources: Vec<usize> = Vec::with_capacity(columns.len());

    let leading = [
        map.price,
        map.metric(config.primary),
        map.metric(config.secondary),
        map.metric(Metric::AvgDailyLiquidity),
    ];
    for idx in leading {
        if !header.contains(&columns[idx]) {
            header.push(columns[idx].clone());
            sources.push(idx);
        }
    }

    for (idx, name) in columns.iter().enumerate() {
        if !header.contains(name) {
            header.push(name.clone());
            sources.push(idx);
        }
    }

    (header, sources)
}
