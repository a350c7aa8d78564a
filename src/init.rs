use crate::{
    ConfigError, ThemeStoreConfig, persistence::JsonFileStorage, store::ThemeStore,
    surface::StyleSheet,
};

/// Builds a store backed by JSON files under the configured directory and
/// rehydrates it, applying the restored theme to a fresh [`StyleSheet`].
pub fn init(config: ThemeStoreConfig) -> Result<ThemeStore<StyleSheet, JsonFileStorage>, ConfigError> {
    let storage = JsonFileStorage::from_config(&config)?;
    tracing::debug!(dir = %storage.dir().display(), "initializing theme store");

    Ok(ThemeStore::rehydrate(config, StyleSheet::new(), storage))
}
