//! # Configuration
//!
//! Stored as `config.json` next to the listing data. Every field has a default,
//! so a missing file (or a missing key) is never an error.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage-key` | `cmp_listings_v1` | Name of the blob holding the listings |
//! | `currency` | `₹` | Symbol printed in front of prices |
//! | `default-sort` | `newest` | Sort used by `list` when none is given |

use crate::error::{MarketError, Result};
use crate::format::DEFAULT_CURRENCY_SYMBOL;
use crate::model::SortMode;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 3] = ["storage-key", "currency", "default-sort"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub default_sort: SortMode,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency_symbol: default_currency(),
            default_sort: SortMode::default(),
        }
    }
}

impl MarketConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MarketError::Io)?;
        let config: MarketConfig =
            serde_json::from_str(&content).map_err(MarketError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MarketError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MarketError::Serialization)?;
        fs::write(config_path, content).map_err(MarketError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "currency" => Some(self.currency_symbol.clone()),
            "default-sort" => Some(self.default_sort.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-key" => {
                if value.is_empty()
                    || !value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(MarketError::Config(format!(
                        "storage-key must be letters, digits, '_' or '-', got {:?}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "currency" => self.currency_symbol = value.to_string(),
            "default-sort" => {
                self.default_sort = value.parse().map_err(MarketError::Config)?;
            }
            other => {
                return Err(MarketError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
