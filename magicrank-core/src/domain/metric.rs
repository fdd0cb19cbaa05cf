//! Named numeric columns and sort directions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The numeric columns the loader coerces to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Price / earnings (P/L). Cheapness: lower is better.
    PriceEarnings,
    /// Return on equity. Profitability: higher is better.
    ReturnOnEquity,
    /// Enterprise value / EBIT. Cheapness: lower is better.
    EvEbit,
    /// Return on invested capital. Profitability: higher is better.
    ReturnOnInvestedCapital,
    /// Average daily traded volume, used only by the liquidity filter.
    AvgDailyLiquidity,
}

impl Metric {
    /// Every coerced column, in input-schema order.
    pub const ALL: [Metric; 5] = [
        Metric::PriceEarnings,
        Metric::ReturnOnEquity,
        Metric::EvEbit,
        Metric::ReturnOnInvestedCapital,
        Metric::AvgDailyLiquidity,
    ];

    /// Exact header name in the source file.
    ///
    /// The liquidity column carries a leading space that must be kept.
    pub fn column(&self) -> &'static str {
        match self {
            Self::PriceEarnings => "P/L",
            Self::ReturnOnEquity => "ROE",
            Self::EvEbit => "EV/EBIT",
            Self::ReturnOnInvestedCapital => "ROIC",
            Self::AvgDailyLiquidity => " LIQUIDEZ MEDIA DIARIA",
        }
    }

    /// Name of the rank column produced when ranking by this metric.
    pub fn rank_column(&self) -> String {
        format!("RANK_{}", self.column())
    }
}

/// Sort direction for a single-metric ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Compare two nullable values under this direction.
    ///
    /// Nulls always sort after every non-null value, in either direction.
    pub fn compare(&self, a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(x), Some(y)) => {
                let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                match self {
                    Self::Ascending => ord,
                    Self::Descending => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquidity_column_keeps_leading_space() {
        assert_eq!(Metric::AvgDailyLiquidity.column(), " LIQUIDEZ MEDIA DIARIA");
    }

    #[test]
    fn rank_column_names() {
        assert_eq!(Metric::PriceEarnings.rank_column(), "RANK_P/L");
        assert_eq!(Metric::ReturnOnInvestedCapital.rank_column(), "RANK_ROIC");
    }

    #[test]
    fn ascending_orders_low_first() {
        assert_eq!(
            SortDirection::Ascending.compare(Some(1.0), Some(2.0)),
            Ordering::Less
        );
    }

    #[test]
    fn descending_orders_high_first() {
        assert_eq!(
            SortDirection::Descending.compare(Some(1.0), Some(2.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn nulls_last_in_both_directions() {
        for dir in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(dir.compare(None, Some(-1e9)), Ordering::Greater);
            assert_eq!(dir.compare(Some(1e9), None), Ordering::Less);
            assert_eq!(dir.compare(None, None), Ordering::Equal);
        }
    }
}
