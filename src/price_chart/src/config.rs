//! Chart configuration: defaults, TOML loading, validation.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```toml
//! source_path = "data/prices.csv"
//! interval = "10h"
//! ema_period = 14
//! origin = "epoch"      # or "start_day"
//! ```

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use price_bars::{BucketOrigin, IntervalSpec, models::IntervalUnit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV: &str = "PRICE_CHART_CONFIG";

pub const DEFAULT_SOURCE_PATH: &str = "data/prices.csv";
pub const DEFAULT_EMA_PERIOD: u32 = 14;

const TEN: NonZeroU32 = match NonZeroU32::new(10) {
    Some(nz) => nz,
    None => unreachable!(),
};
pub const DEFAULT_INTERVAL: IntervalSpec = IntervalSpec::new(TEN, IntervalUnit::Hour);

/// Errors related to chart configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Inputs for one chart run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// CSV file with `TS` and `PRICE` columns.
    pub source_path: PathBuf,
    /// Candlestick bucket width.
    pub interval: IntervalSpec,
    /// EMA smoothing period.
    pub ema_period: u32,
    /// Where bucket boundaries are anchored.
    pub origin: BucketOrigin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            interval: DEFAULT_INTERVAL,
            ema_period: DEFAULT_EMA_PERIOD,
            origin: BucketOrigin::Epoch,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ema_period == 0 {
            return Err(ConfigError::Invalid(
                "ema_period must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
