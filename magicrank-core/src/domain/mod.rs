//! Domain types for MagicRank

pub mod cell;
pub mod metric;
pub mod record;

pub use cell::Cell;
pub use metric::{Metric, SortDirection};
pub use record::{InstrumentRecord, RecordSet};
