#![allow(dead_code)]

use std::sync::Once;

use tesserae_themes::{
    ThemeStoreConfig,
    persistence::{JsonFileStorage, ThemeStorage},
    store::ThemeStore,
    surface::StyleSheet,
};

/// Installs a tracing subscriber once, filtered by `RUST_LOG`.
pub fn init_tracing_from_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer();
        let _ = subscriber.try_init();
    });
}

pub fn file_config(dir: &std::path::Path) -> ThemeStoreConfig {
    ThemeStoreConfig::default().with_storage_dir(dir)
}

pub fn open<P: ThemeStorage>(config: &ThemeStoreConfig, storage: P) -> ThemeStore<StyleSheet, P> {
    ThemeStore::rehydrate(config.clone(), StyleSheet::new(), storage)
}

pub fn open_dir(dir: &std::path::Path) -> ThemeStore<StyleSheet, JsonFileStorage> {
    tesserae_themes::init(file_config(dir)).unwrap()
}
