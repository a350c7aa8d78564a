//! Durable storage for the theme store's state.
//!
//! State is stored under a key (`theme-storage` by default) as JSON shaped
//! `{ "currentTheme": Theme, "customThemes": [Theme] }`.

mod deserializers;

mod error;
pub use error::*;

mod json_file;
pub use json_file::*;

mod memory;
pub use memory::*;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use deserializers::{de_current_theme, de_custom_themes, default_current_theme};

/// Saved store state.
///
/// Loading is lenient per theme: an invalid current theme becomes the default
/// theme and invalid custom themes are dropped individually.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedThemeState {
    #[serde(
        default = "default_current_theme",
        deserialize_with = "de_current_theme"
    )]
    pub current_theme: Theme,
    #[serde(default, deserialize_with = "de_custom_themes")]
    pub custom_themes: Vec<Theme>,
}

impl Default for PersistedThemeState {
    fn default() -> Self {
        Self {
            current_theme: default_current_theme(),
            custom_themes: Vec::new(),
        }
    }
}

/// Key/value store for [`PersistedThemeState`].
///
/// `load` returns `Ok(None)` when nothing has been saved under `key` yet.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<PersistedThemeState>>;
    fn save(&self, key: &str, state: &PersistedThemeState) -> anyhow::Result<()>;
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for &T {
    fn load(&self, key: &str) -> anyhow::Result<Option<PersistedThemeState>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, state: &PersistedThemeState) -> anyhow::Result<()> {
        (**self).save(key, state)
    }
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for Box<T> {
    fn load(&self, key: &str) -> anyhow::Result<Option<PersistedThemeState>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, state: &PersistedThemeState) -> anyhow::Result<()> {
        (**self).save(key, state)
    }
}
