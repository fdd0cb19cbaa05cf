//! Source file conversion — semicolon-delimited locale CSV to standard CSV.
//!
//! The header row is copied verbatim (including significant whitespace).
//! Every data field is rewritten with `normalize_numeric_text`; no numeric
//! interpretation happens at this stage. Short rows are padded with empty
//! fields up to the header width; rows wider than the header are rejected.

use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use magicrank_core::normalize_fields;

/// Errors from the conversion layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: found {found} fields, but the header has {expected}")]
    TooManyFields {
        line: u64,
        found: usize,
        expected: usize,
    },
}

/// Row counts from one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub columns: usize,
    pub rows: usize,
}

/// Convert `input` (`;`-delimited) into `output` (`,`-delimited).
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertStats, ConvertError> {
    let reader = std::fs::File::open(input)?;
    let writer = std::fs::File::create(output)?;
    let stats = convert(reader, writer)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows = stats.rows,
        "converted source file"
    );
    Ok(stats)
}

/// Stream conversion between arbitrary reader and writer.
///
/// A data row with more fields than the header is a structural error and
/// aborts the conversion. Missing trailing fields are written as empty.
pub fn convert<R: Read, W: Write>(input: R, output: W) -> Result<ConvertStats, ConvertError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let mut wtr = csv::Writer::from_writer(output);

    let headers = rdr.headers()?.clone();
    wtr.write_record(&headers)?;

    let width = headers.len();
    let mut rows = 0usize;
    let mut padded = 0usize;
    for result in rdr.records() {
        let record = result?;
        if record.len() > width {
            return Err(ConvertError::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                found: record.len(),
                expected: width,
            });
        }
        let mut fields = normalize_fields(record.iter());
        if fields.len() < width {
            fields.resize(width, String::new());
            padded += 1;
        }
        wtr.write_record(&fields)?;
        rows += 1;
    }
    if padded > 0 {
        warn!(rows = padded, "short rows padded with empty fields");
    }
    wtr.flush()?;

    debug!(columns = headers.len(), rows, "normalized locale numbers");
    Ok(ConvertStats {
        columns: headers.len(),
        rows,
    })
}
