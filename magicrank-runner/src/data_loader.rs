//! Record loading for the runner.
//!
//! Reads the normalized (comma-delimited) file into a `RecordSet`:
//! 1. Resolve required columns; a missing column fails the load
//! 2. Coerce metric columns (unparseable or missing → null, never an error)
//! 3. Drop records whose average daily liquidity is null or not above the
//!    configured threshold
//!
//! The loader also fingerprints the input with BLAKE3 so a run summary can
//! identify exactly which dataset was ranked.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use magicrank_core::{Metric, RecordSet, SchemaError, MIN_AVG_DAILY_LIQUIDITY};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("line {line}: found {found} fields, but the header has {expected}")]
    TooManyFields {
        line: u64,
        found: usize,
        expected: usize,
    },
}

/// Options controlling how records are loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Records must have average daily liquidity strictly above this.
    pub min_liquidity: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            min_liquidity: MIN_AVG_DAILY_LIQUIDITY,
        }
    }
}

/// Result of loading records, with provenance and filter statistics.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    /// Liquidity-filtered records in file order.
    pub records: RecordSet,
    /// Data rows in the file.
    pub rows_read: usize,
    /// Rows removed by the liquidity filter.
    pub rows_illiquid: usize,
    /// Per metric column, how many cells failed to parse (before filtering).
    pub null_counts: Vec<(Metric, usize)>,
    /// BLAKE3 hash over header and rows, in file order.
    pub dataset_hash: String,
}

impl LoadedRecords {
    pub fn rows_retained(&self) -> usize {
        self.records.len()
    }
}

/// Load and filter the normalized file at `path`.
pub fn load_records(path: &Path, opts: &LoadOptions) -> Result<LoadedRecords, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let loaded = load_records_from_reader(file, opts)?;
    info!(
        path = %path.display(),
        rows_read = loaded.rows_read,
        rows_retained = loaded.rows_retained(),
        dataset_hash = %loaded.dataset_hash,
        "loaded records"
    );
    Ok(loaded)
}

/// Load from any reader. See [`load_records`].
pub fn load_records_from_reader<R: Read>(
    reader: R,
    opts: &LoadOptions,
) -> Result<LoadedRecords, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut hasher = blake3::Hasher::new();
    hash_row(&mut hasher, headers.iter());

    let mut records = RecordSet::new(headers.iter().map(str::to_string).collect())?;
    for result in rdr.records() {
        let row = result?;
        if row.len() > headers.len() {
            return Err(LoadError::TooManyFields {
                line: row.position().map_or(0, |p| p.line()),
                found: row.len(),
                expected: headers.len(),
            });
        }
        hash_row(&mut hasher, row.iter());
        let fields: Vec<&str> = row.iter().collect();
        records.push_fields(&fields);
    }
    let rows_read = records.len();

    let null_counts: Vec<(Metric, usize)> = Metric::ALL
        .iter()
        .map(|&m| (m, records.null_count(m)))
        .collect();
    for (metric, nulls) in &null_counts {
        if *nulls > 0 {
            debug!(column = metric.column(), nulls, "non-numeric cells coerced to null");
        }
    }

    warn_on_duplicate_tickers(&records);

    let rows_illiquid = records.retain_liquid(opts.min_liquidity);
    debug!(
        threshold = opts.min_liquidity,
        dropped = rows_illiquid,
        "applied liquidity filter"
    );

    Ok(LoadedRecords {
        records,
        rows_read,
        rows_illiquid,
        null_counts,
        dataset_hash: hasher.finalize().to_hex().to_string(),
    })
}

/// Hash one row with unambiguous field and row separators.
fn hash_row<'a>(hasher: &mut blake3::Hasher, fields: impl Iterator<Item = &'a str>) {
    for field in fields {
        hasher.update(field.as_bytes());
        hasher.update(&[0x1f]);
    }
    hasher.update(&[0x1e]);
}

fn warn_on_duplicate_tickers(records: &RecordSet) {
    let mut seen = HashSet::new();
    for record in records.records() {
        if !seen.insert(record.ticker.as_str()) {
            warn!(ticker = %record.ticker, "duplicate ticker in source file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
TICKER,PRECO,P/L,ROE,EV/EBIT,ROIC, LIQUIDEZ MEDIA DIARIA
AAAA3,10.5,5,20,4,15,2000000
BBBB4,7,-,10,3,,999999
CCCC3,30,8,30,n/a,25,1000000
DDDD11,12,6,12,5,9,
EEEE3,44,-3,18,7,11,15000000.5
";

    fn load(csv: &str) -> Result<LoadedRecords, LoadError> {
        load_records_from_reader(csv.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn filters_by_liquidity() {
        let loaded = load(CSV).unwrap();
        assert_eq!(loaded.rows_read, 5);
        assert_eq!(loaded.rows_illiquid, 3);
        let tickers: Vec<&str> = loaded
            .records
            .records()
            .iter()
            .map(|r| r.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["AAAA3", "EEEE3"]);
    }

    #[test]
    fn negative_primary_survives_loading() {
        // Positivity is the ranking engine's concern, not the loader's.
        let loaded = load(CSV).unwrap();
        let e = &loaded.records.records()[1];
        assert_eq!(loaded.records.metric(e, Metric::PriceEarnings), Some(-3.0));
    }

    #[test]
    fn counts_nulls_before_filtering() {
        let loaded = load(CSV).unwrap();
        let count = |m: Metric| {
            loaded
                .null_counts
                .iter()
                .find(|(metric, _)| *metric == m)
                .map(|(_, n)| *n)
                .unwrap()
        };
        assert_eq!(count(Metric::PriceEarnings), 1);
        assert_eq!(count(Metric::EvEbit), 1);
        assert_eq!(count(Metric::ReturnOnInvestedCapital), 1);
        assert_eq!(count(Metric::AvgDailyLiquidity), 1);
        assert_eq!(count(Metric::ReturnOnEquity), 0);
    }

    #[test]
    fn custom_threshold() {
        let opts = LoadOptions { min_liquidity: 0.0 };
        let loaded = load_records_from_reader(CSV.as_bytes(), &opts).unwrap();
        assert_eq!(loaded.rows_retained(), 4);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let csv = "TICKER,PRECO,P/L,ROE,EV/EBIT,ROIC,LIQUIDEZ MEDIA DIARIA\nA,1,1,1,1,1,5000000\n";
        let err = load(csv).unwrap_err();
        match err {
            LoadError::Schema(SchemaError::MissingColumn(col)) => {
                assert_eq!(col, " LIQUIDEZ MEDIA DIARIA")
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn dataset_hash_is_deterministic_and_content_sensitive() {
        let a = load(CSV).unwrap();
        let b = load(CSV).unwrap();
        assert_eq!(a.dataset_hash, b.dataset_hash);
        assert_eq!(a.dataset_hash.len(), 64);

        let changed = CSV.replace("10.5", "10.6");
        let c = load(&changed).unwrap();
        assert_ne!(a.dataset_hash, c.dataset_hash);
    }

    #[test]
    fn header_only_file_loads_empty() {
        let csv = "TICKER,PRECO,P/L,ROE,EV/EBIT,ROIC, LIQUIDEZ MEDIA DIARIA\n";
        let loaded = load(csv).unwrap();
        assert_eq!(loaded.rows_read, 0);
        assert!(loaded.records.is_empty());
    }

    #[test]
    fn short_row_loads_with_null_metrics() {
        let csv = "\
TICKER,PRECO, LIQUIDEZ MEDIA DIARIA,P/L,ROE,EV/EBIT,ROIC
AAAA3,10.5,2000000,5,20,4,15
BBBB4,7,3000000,3
";
        let loaded = load(csv).unwrap();
        assert_eq!(loaded.rows_retained(), 2);
        let b = &loaded.records.records()[1];
        assert_eq!(loaded.records.metric(b, Metric::PriceEarnings), Some(3.0));
        assert_eq!(loaded.records.metric(b, Metric::ReturnOnEquity), None);
        assert_eq!(loaded.records.metric(b, Metric::ReturnOnInvestedCapital), None);
    }

    #[test]
    fn wide_row_is_error() {
        let csv = "\
TICKER,PRECO,P/L,ROE,EV/EBIT,ROIC, LIQUIDEZ MEDIA DIARIA
AAAA3,10.5,5,20,4,15,2000000,extra
";
        let err = load(csv).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TooManyFields {
                line: 2,
                found: 8,
                expected: 7
            }
        ));
    }

    #[test]
    fn missing_file_is_error() {
        let err = load_records(Path::new("/nonexistent/stocks_converted.csv"), &LoadOptions::default());
        assert!(matches!(err, Err(LoadError::Csv(_))));
    }
}
