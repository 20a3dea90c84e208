//! Persisted user preferences.
//!
//! Stored as pretty-printed JSON in `config.json` inside the directory
//! returned by [`get_config_directory`].

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitignoreError, Result};
use crate::core::organizer::SortMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Mode used by `sort` when `--mode` is not given
    pub default_mode: Option<SortMode>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the user config, falling back to defaults when none was saved
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| GitignoreError::read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| GitignoreError::config_parse_failed(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| GitignoreError::write_failed(path, e))?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }
}
