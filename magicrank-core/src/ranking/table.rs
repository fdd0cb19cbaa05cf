//! Ranked result rows and tables.

use crate::domain::Cell;

/// One ranked instrument.
///
/// `values` is aligned with the data columns of the owning table, i.e. the
/// header minus the four leading ticker/rank columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub ticker: String,
    pub rank_primary: usize,
    pub rank_secondary: usize,
    pub rank_final: usize,
    pub values: Vec<Cell>,
}

impl RankedRow {
    /// The full output row in header order.
    pub fn to_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.values.len() + 4);
        cells.push(Cell::Text(self.ticker.clone()));
        cells.push(Cell::Number(self.rank_primary as f64));
        cells.push(Cell::Number(self.rank_secondary as f64));
        cells.push(Cell::Number(self.rank_final as f64));
        cells.extend(self.values.iter().cloned());
        cells
    }
}

/// Output of one ranking run, sorted by `rank_final` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable {
    name: String,
    header: Vec<String>,
    rows: Vec<RankedRow>,
}

impl RankedTable {
    pub(crate) fn new(name: String, header: Vec<String>, rows: Vec<RankedRow>) -> Self {
        Self { name, header, rows }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names: ticker, the three rank columns, then data columns.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tickers in output order.
    pub fn tickers(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.ticker.as_str()).collect()
    }

    /// Look up a cell by row position and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<Cell> {
        let col = self.header.iter().position(|h| h == column)?;
        let row = self.rows.get(row)?;
        row.to_cells().into_iter().nth(col)
    }
}
