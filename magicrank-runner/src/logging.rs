//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
///
/// The filter comes from `level` only; the environment is not consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Install a stderr subscriber. A second call leaves the first in place.
    pub fn init(&self) {
        let filter = self.filter();

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if let Err(e) = result {
            eprintln!("Warning: logging not initialized: {e}");
        }
    }

    /// Filter for `level`, falling back to `info` when the directive is invalid.
    fn filter(&self) -> EnvFilter {
        match EnvFilter::try_new(&self.level) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "Warning: invalid log level {:?} ({e}), using \"info\"",
                    self.level
                );
                EnvFilter::new("info")
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
