/*!
Configuration management for the rescode command-line tool.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub encoder: EncoderConfig,
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog construction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Smallest nominal value included in the catalog, in ohms
    pub min_ohms: f64,

    /// Largest nominal value included in the catalog, in ohms
    pub max_ohms: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            min_ohms: 0.1,
            max_ohms: 100_000_000.0,
        }
    }
}

/// Encoder defaults applied when flags are omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Band count used by `encode` when `--bands` is not given
    pub default_band_count: u8,

    /// Tolerance percentage used by `encode` when `--tolerance` is not given
    pub default_tolerance_percent: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_band_count: 4,
            default_tolerance_percent: 5.0,
        }
    }
}
