//! Instrument records and the record set produced by the loader.

use crate::domain::{Cell, Metric};
use crate::schema::{ColumnMap, SchemaError};

/// One row of the source table.
///
/// `cells` is aligned with the owning `RecordSet`'s columns.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentRecord {
    pub ticker: String,
    pub cells: Vec<Cell>,
}

/// The loaded table: ordered header plus records in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    map: ColumnMap,
    records: Vec<InstrumentRecord>,
}

impl RecordSet {
    /// Create an empty set for the given header.
    ///
    /// Fails if any required column is absent.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        let map = ColumnMap::resolve(&columns)?;
        Ok(Self {
            columns,
            map,
            records: Vec::new(),
        })
    }

    /// Build a set from a header and raw text rows.
    pub fn from_rows<H, R, S>(columns: &[H], rows: R) -> Result<Self, SchemaError>
    where
        H: AsRef<str>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(columns.iter().map(|c| c.as_ref().to_string()).collect())?;
        for row in rows {
            let fields: Vec<S> = row.into_iter().collect();
            set.push_fields(&fields);
        }
        Ok(set)
    }

    /// Append a row of raw text fields.
    ///
    /// Metric columns are coerced (unparseable → `Empty`); the ticker is kept
    /// as text; every other column is inferred. Missing trailing fields are
    /// treated as blank.
    pub fn push_fields<S: AsRef<str>>(&mut self, fields: &[S]) {
        let field = |i: usize| fields.get(i).map(|f| f.as_ref()).unwrap_or("");

        let cells = (0..self.columns.len())
            .map(|i| {
                if i == self.map.ticker {
                    Cell::Text(field(i).to_string())
                } else if self.map.is_metric(i) {
                    Cell::coerce(field(i))
                } else {
                    Cell::infer(field(i))
                }
            })
            .collect();

        self.records.push(InstrumentRecord {
            ticker: field(self.map.ticker).to_string(),
            cells,
        });
    }

    /// Keep only records whose liquidity is present and strictly above `threshold`.
    ///
    /// Returns the number of records dropped.
    pub fn retain_liquid(&mut self, threshold: f64) -> usize {
        let before = self.records.len();
        let idx = self.map.metric(Metric::AvgDailyLiquidity);
        self.records
            .retain(|r| matches!(r.cells[idx].as_f64(), Some(v) if v > threshold));
        before - self.records.len()
    }

    /// Value of a metric for a record of this set. `None` when null.
    pub fn metric(&self, record: &InstrumentRecord, metric: Metric) -> Option<f64> {
        record.cells[self.map.metric(metric)].as_f64()
    }

    /// Number of records where `metric` is null.
    pub fn null_count(&self, metric: Metric) -> usize {
        let idx = self.map.metric(metric);
        self.records.iter().filter(|r| r.cells[idx].is_empty()).count()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_map(&self) -> &ColumnMap {
        &self.map
    }

    pub fn records(&self) -> &[InstrumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
