//! MagicRank Runner — file conversion, record loading, ranking runs, export.
//!
//! This crate builds on `magicrank-core` to provide:
//! - Conversion of the locale-formatted source file into standard CSV
//! - Record loading with metric coercion and the liquidity filter
//! - Spreadsheet (`.xlsx`) and CSV export of ranked tables
//! - The end-to-end pipeline and its run summary
//! - Configuration (TOML) and logging setup

pub mod config;
pub mod convert;
pub mod data_loader;
pub mod export;
pub mod logging;
pub mod pipeline;

pub use config::{ConfigError, OutputPaths, PipelineConfig};
pub use convert::{convert_file, ConvertError, ConvertStats};
pub use data_loader::{
    load_records, load_records_from_reader, LoadError, LoadOptions, LoadedRecords,
};
pub use export::{export_csv, export_ranked, export_xlsx};
pub use logging::LoggingConfig;
pub use pipeline::{rank_loaded, run_pipeline, write_summary, RankingSummary, RunSummary};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<PipelineConfig>();
        assert_sync::<PipelineConfig>();
        assert_send::<LoadOptions>();
        assert_sync::<LoadOptions>();
        assert_send::<LoggingConfig>();
        assert_sync::<LoggingConfig>();
    }

    #[test]
    fn loaded_records_is_send_sync() {
        assert_send::<LoadedRecords>();
        assert_sync::<LoadedRecords>();
    }

    #[test]
    fn run_summary_is_send_sync() {
        assert_send::<RunSummary>();
        assert_sync::<RunSummary>();
        assert_send::<RankingSummary>();
        assert_sync::<RankingSummary>();
    }

    #[test]
    fn error_types_are_send_sync() {
        assert_send::<LoadError>();
        assert_sync::<LoadError>();
        assert_send::<ConvertError>();
        assert_sync::<ConvertError>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
