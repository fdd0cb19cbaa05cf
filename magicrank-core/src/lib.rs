//! MagicRank Core — instrument records, locale normalization, and the
//! magic-formula rank-sum engine.
//!
//! This crate is I/O-free. It contains:
//! - Domain types (cells, metrics, instrument records, record sets)
//! - Input schema: required column names and column resolution
//! - Locale number normalization (`1.234,56` → `1234.56`)
//! - The ranking engine: two independent single-metric rankings combined
//!   into a composite rank, parameterized by a `RankingConfig`

pub mod domain;
pub mod normalize;
pub mod ranking;
pub mod schema;

pub use domain::{Cell, InstrumentRecord, Metric, RecordSet, SortDirection};
pub use normalize::{normalize_fields, normalize_numeric_text};
pub use ranking::{rank, RankedRow, RankedTable, RankingConfig};
pub use schema::{ColumnMap, SchemaError, MIN_AVG_DAILY_LIQUIDITY};
