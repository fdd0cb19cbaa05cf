//! Pipeline configuration.
//!
//! Defaults reproduce the fixed file layout: read `stocks.csv`, write the
//! normalized copy to `stocks_converted.csv`, export one spreadsheet per
//! ranking. A TOML file may override any field.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use magicrank_core::MIN_AVG_DAILY_LIQUIDITY;

use crate::logging::LoggingConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("min_liquidity must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

/// Everything one pipeline run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Semicolon-delimited, locale-formatted source file.
    pub input: PathBuf,
    /// Intermediate comma-delimited file with normalized numbers.
    pub converted: PathBuf,
    /// Records must have average daily liquidity strictly above this.
    pub min_liquidity: f64,
    pub outputs: OutputPaths,
    pub logging: LoggingConfig,
}

/// One destination per ranking preset. The extension picks the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub pl_roe: PathBuf,
    pub ev_ebit_roic: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("stocks.csv"),
            converted: PathBuf::from("stocks_converted.csv"),
            min_liquidity: MIN_AVG_DAILY_LIQUIDITY,
            outputs: OutputPaths::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            pl_roe: PathBuf::from("magic_formula_results_pl_roe.xlsx"),
            ev_ebit_roic: PathBuf::from("magic_formula_results_ev_ebit_roic.xlsx"),
        }
    }
}

impl PipelineConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Output path for a ranking preset name, if one is configured.
    pub fn output_for(&self, ranking: &str) -> Option<&Path> {
        match ranking {
            "pl_roe" => Some(&self.outputs.pl_roe),
            "ev_ebit_roic" => Some(&self.outputs.ev_ebit_roic),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_liquidity.is_finite() || self.min_liquidity < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.min_liquidity));
        }
        Ok(())
    }
}
