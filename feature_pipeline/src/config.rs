//! Tunable windows of the pipeline, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the standard feature set:
//!
//! ```toml
//! volatility_window = 252
//! annualization_periods = 252.0
//! ```
//!
//! The momentum lookback and skip are not configurable: the column name
//! carries them, and a zero skip would let the current month leak into the
//! signal. See [`MOMENTUM_LOOKBACK`](crate::pipeline::MOMENTUM_LOOKBACK).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Trailing rows of log returns per volatility sample.
    pub volatility_window: usize,
    /// Trading periods per year used to annualize volatility.
    pub annualization_periods: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            volatility_window: 252,
            annualization_periods: 252.0,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.volatility_window < 2 {
            return Err(ConfigError::Invalid {
                field: "volatility_window",
                reason: format!("must be at least 2, got {}", self.volatility_window),
            });
        }
        if !(self.annualization_periods.is_finite() && self.annualization_periods > 0.0) {
            return Err(ConfigError::Invalid {
                field: "annualization_periods",
                reason: format!("must be positive, got {}", self.annualization_periods),
            });
        }
        Ok(())
    }
}
