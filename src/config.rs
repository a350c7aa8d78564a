use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the store's state is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "theme-storage";

const STORAGE_APP_DIR: &str = "tesserae";

/// Settings for a [`ThemeStore`](crate::store::ThemeStore) and its storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeStoreConfig {
    pub storage_key: String,
    /// Directory for file storage. Defaults to `<config dir>/tesserae`.
    pub storage_dir: Option<PathBuf>,
}

impl Default for ThemeStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
        }
    }
}

impl ThemeStoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    pub fn resolve_storage_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(STORAGE_APP_DIR))
                .ok_or(ConfigError::MissingConfigDirectory),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    MissingConfigDirectory,
}
