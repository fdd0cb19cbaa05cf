use std::fmt;

/// A single table value after loading.
///
/// Metric columns are coerced: they only ever hold `Number` or `Empty`.
/// Every other column is inferred cell by cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Coerce text to a number. Anything that does not parse becomes `Empty`.
    ///
    /// NaN is treated as missing so it can never reach a sort comparator.
    pub fn coerce(text: &str) -> Self {
        match parse_number(text) {
            Some(v) => Cell::Number(v),
            None => Cell::Empty,
        }
    }

    /// Infer a cell type from raw text: number, blank, or text kept verbatim.
    pub fn infer(text: &str) -> Self {
        if text.trim().is_empty() {
            return Cell::Empty;
        }
        match parse_number(text) {
            Some(v) => Cell::Number(v),
            None => Cell::Text(text.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}
