//! Configuration for the to-do store.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> StoreResult<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)
                .map_err(|e| StoreError::Config(e.to_string()))?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "todo-store")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Location of the tasks document: the configured override, or
    /// `tasks.json` in the platform data directory.
    pub fn tasks_path(&self) -> Option<PathBuf> {
        self.storage.tasks_file.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "todo-store")
                .map(|d| d.data_dir().join("tasks.json"))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the tasks document location.
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub show_completed: bool,
}

fn default_true() -> bool { true }
fn default_date_format() -> String { "%d.%m.%Y".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            show_completed: true,
        }
    }
}
