use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generate::GenParams;

/// World dimensions and generation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    pub generation: GenParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 45,
            height: 27,
            generation: GenParams::default(),
        }
    }
}

/// Errors from loading a world configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("world dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("generation.{name} must be a finite number, got {value}")]
    NonFiniteParam { name: &'static str, value: f64 },
}

impl WorldConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let g = &self.generation;
        for (name, value) in [
            ("ground_ratio", g.ground_ratio),
            ("stone_threshold", g.stone_threshold),
            ("sky_ratio", g.sky_ratio),
            ("cloud_threshold", g.cloud_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParam { name, value });
            }
        }
        Ok(())
    }
}
