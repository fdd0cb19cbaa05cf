//! Locale number normalization.
//!
//! Source files format numbers with `.` as thousands separator and `,` as
//! decimal separator. Normalization is a pure text transform: every `.` is
//! removed, then every `,` becomes `.`. No numeric interpretation happens
//! here; cells that are not numbers pass through the same rewrite.

/// Rewrite one locale-formatted cell into standard decimal text.
pub fn normalize_numeric_text(text: &str) -> String {
    text.replace('.', "").replace(',', ".")
}

/// Normalize every field of a data row.
pub fn normalize_fields<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().map(normalize_numeric_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_and_decimal_separators() {
        assert_eq!(normalize_numeric_text("1.234,56"), "1234.56");
        assert_eq!(normalize_numeric_text("12.345.678,9"), "12345678.9");
        assert_eq!(normalize_numeric_text("-0,5"), "-0.5");
    }

    #[test]
    fn plain_integers_unchanged() {
        assert_eq!(normalize_numeric_text("1000"), "1000");
    }

    #[test]
    fn thousands_only() {
        assert_eq!(normalize_numeric_text("2.500.000"), "2500000");
    }

    #[test]
    fn text_without_separators_unchanged() {
        assert_eq!(normalize_numeric_text("PETR4"), "PETR4");
        assert_eq!(normalize_numeric_text(""), "");
        assert_eq!(normalize_numeric_text(" Energia Elétrica"), " Energia Elétrica");
    }

    #[test]
    fn row_normalization_preserves_order() {
        let row = normalize_fields(["VALE3", "68,90", "1.234,5"]);
        assert_eq!(row, vec!["VALE3", "68.90", "1234.5"]);
    }
}
