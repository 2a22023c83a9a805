use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tiles::{Columns, DEFAULT_COLUMNS, TilesError};

/// Top-level configuration, loaded from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tiles: TilesConfig,
    pub display: DisplayConfig,
}

/// Grid layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesConfig {
    /// Raw column count; validated when the layout is built
    pub columns: i64,
}

/// How totals and titles are presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Shown in place of a total when no entry had a value
    pub placeholder: String,
    /// Prefixed to fiat figures
    pub currency_symbol: String,
    /// Fractional digits kept in fiat figures; `None` keeps them all
    pub max_decimals: Option<u32>,
    /// Title used when no account is selected
    pub default_account_title: String,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS as i64,
        }
    }
}

impl TilesConfig {
    pub fn columns(&self) -> Result<Columns, TilesError> {
        Columns::new(self.columns)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".to_string(),
            currency_symbol: "$".to_string(),
            max_decimals: None,
            default_account_title: "Wallet Account".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }
}
