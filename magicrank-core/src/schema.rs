//! Input schema: required column names and header resolution.

use thiserror::Error;

use crate::domain::Metric;

/// Ticker column header.
pub const TICKER_COLUMN: &str = "TICKER";

/// Price column header.
pub const PRICE_COLUMN: &str = "PRECO";

/// Composite rank column header.
pub const RANK_FINAL_COLUMN: &str = "RANK_FINAL";

/// Minimum average daily liquidity a record must exceed to be ranked.
pub const MIN_AVG_DAILY_LIQUIDITY: f64 = 1_000_000.0;

/// Every column the source file must provide.
pub fn required_columns() -> Vec<&'static str> {
    let mut cols = vec![TICKER_COLUMN, PRICE_COLUMN];
    cols.extend(Metric::ALL.iter().map(|m| m.column()));
    cols
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Missing required column: {0:?}")]
    MissingColumn(String),
}

/// Header positions of the required columns, resolved once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub ticker: usize,
    pub price: usize,
    metrics: [usize; 5],
}

impl ColumnMap {
    /// Resolve required columns against a header row.
    ///
    /// Header names are matched exactly, whitespace included. The first
    /// occurrence wins when a name repeats.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref() == name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };

        let ticker = find(TICKER_COLUMN)?;
        let price = find(PRICE_COLUMN)?;
        let mut metrics = [0usize; 5];
        for (slot, metric) in metrics.iter_mut().zip(Metric::ALL) {
            *slot = find(metric.column())?;
        }

        Ok(Self {
            ticker,
            price,
            metrics,
        })
    }

    /// Header position of a metric column.
    pub fn metric(&self, metric: Metric) -> usize {
        let slot = Metric::ALL
            .iter()
            .position(|m| *m == metric)
            .unwrap_or_default();
        self.metrics[slot]
    }

    /// Whether the column at `index` is one of the coerced metric columns.
    pub fn is_metric(&self, index: usize) -> bool {
        self.metrics.contains(&index)
    }
}
