//! Result export — spreadsheet and CSV writers for ranked tables.
//!
//! The destination extension picks the format:
//! - **`.xlsx`**: one worksheet, header row, one row per ranked instrument,
//!   numbers as numeric cells, blanks for nulls, no index column
//! - **`.csv`**: same header and rows, nulls as empty fields
//!
//! Values are written as-is; the exporter performs no transformation. An
//! empty table still produces a file containing the header row.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use magicrank_core::{Cell, RankedTable};

/// Write `table` to `path`, choosing the format from the extension.
pub fn export_ranked(table: &RankedTable, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("xlsx") => export_xlsx(table, path)?,
        Some("csv") => {
            let csv = export_csv(table)?;
            std::fs::write(path, csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        _ => bail!(
            "unsupported export format for {} (expected .xlsx or .csv)",
            path.display()
        ),
    }

    info!(
        ranking = table.name(),
        path = %path.display(),
        rows = table.len(),
        "exported ranking"
    );
    Ok(())
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Serialize a ranked table as CSV text.
pub fn export_csv(table: &RankedTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(table.header())?;
    for row in table.rows() {
        wtr.write_record(row.to_cells().iter().map(Cell::to_string))?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── XLSX export ────────────────────────────────────────────────────

/// Write a ranked table to a single-sheet `.xlsx` workbook.
pub fn export_xlsx(table: &RankedTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (c, name) in table.header().iter().enumerate() {
        worksheet.write_string(0, column_index(c)?, name)?;
    }

    for (r, row) in table.rows().iter().enumerate() {
        let r = u32::try_from(r + 1).context("too many rows for a worksheet")?;
        for (c, cell) in row.to_cells().iter().enumerate() {
            write_cell(worksheet, r, column_index(c)?, cell)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Number(v) if v.is_finite() => {
            worksheet.write_number(row, col, *v)?;
        }
        // Spreadsheets have no representation for infinities.
        Cell::Number(v) => {
            worksheet.write_string(row, col, v.to_string())?;
        }
        Cell::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn column_index(c: usize) -> Result<u16> {
    u16::try_from(c).context("too many columns for a worksheet")
}
