use crate::core::dirs::{get_config_directory, get_data_directory};
use crate::core::error::NexbuyError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Price ceiling applied when filters are reset.
pub const DEFAULT_MAX_PRICE: u64 = 5000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub currency_symbol: String,
    pub default_max_price: u64,
    /// JSON catalog replacing the built-in sample.
    pub catalog_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            default_max_price: DEFAULT_MAX_PRICE,
            catalog_path: None,
            data_dir: None,
        }
    }
}

impl Settings {
    pub fn load_or_create() -> Result<Self, NexbuyError> {
        let config_dir = get_config_directory()?;
        Self::load_or_create_in(&config_dir)
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self, NexbuyError> {
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            log::debug!("Loading settings from {}", config_file.display());
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let settings = Self::default();
            settings.save_in(config_dir)?;
            Ok(settings)
        }
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<(), NexbuyError> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    /// Store directory: explicit override, then settings, then the platform default.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf, NexbuyError> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_data_directory(),
        }
    }
}
