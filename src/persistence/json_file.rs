use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    ConfigError, ThemeStoreConfig,
    persistence::{PersistedThemeState, StorageError, ThemeStorage},
};

/// Stores each key as a pretty-printed `<key>.json` file inside one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &ThemeStoreConfig) -> Result<Self, ConfigError> {
        config.resolve_storage_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ThemeStorage for JsonFileStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<PersistedThemeState>> {
        let path = self.path_for(key);

        let serialized = match fs::read_to_string(&path) {
            Ok(serialized) => serialized,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Read { path, source }.into()),
        };

        let state = serde_json::from_str(&serialized).map_err(|source| StorageError::Parse {
            key: key.to_string(),
            source,
        })?;

        Ok(Some(state))
    }

    fn save(&self, key: &str, state: &PersistedThemeState) -> anyhow::Result<()> {
        let path = self.path_for(key);

        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        let serialized = serde_json::to_string_pretty(state).map_err(StorageError::from)?;

        // Staged beside the target, then renamed over it.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, serialized).map_err(|source| StorageError::Write {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| StorageError::Write { path, source })?;

        Ok(())
    }
}
