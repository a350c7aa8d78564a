use std::{cell::RefCell, collections::HashMap};

use crate::persistence::{PersistedThemeState, StorageError, ThemeStorage};

/// Serialized JSON strings keyed like a browser's local storage.
///
/// Not thread-safe; the store runs on a single thread.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&self, key: impl Into<String>, json: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), json.into());
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<PersistedThemeState>> {
        let entries = self.entries.borrow();
        let Some(serialized) = entries.get(key) else {
            return Ok(None);
        };

        let state = serde_json::from_str(serialized).map_err(|source| StorageError::Parse {
            key: key.to_string(),
            source,
        })?;

        Ok(Some(state))
    }

    fn save(&self, key: &str, state: &PersistedThemeState) -> anyhow::Result<()> {
        let serialized = serde_json::to_string(state).map_err(StorageError::from)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), serialized);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load("theme-storage").unwrap().is_none());

        let state = PersistedThemeState::default();
        storage.save("theme-storage", &state).unwrap();

        assert_eq!(storage.load("theme-storage").unwrap(), Some(state));
        assert!(storage.load("other").unwrap().is_none());
    }

    #[test]
    fn test_invalid_payload_is_an_error() {
        let storage = MemoryStorage::new();
        storage.insert_raw("theme-storage", r#"{"customThemes": 3}"#);

        assert!(storage.load("theme-storage").is_err());
    }
}
