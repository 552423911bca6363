//! `window.localStorage` behind the [`KeyValueStore`] seam.

use contracts::shared::persistence::{self, KeyValueStore, Persisted, PersistenceError};
use web_sys::window;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Result<web_sys::Storage, PersistenceError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PersistenceError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage().ok()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| PersistenceError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// Read a persisted state; missing or unreadable state falls back to the default
pub fn load_or_default<T: Persisted>() -> T {
    match persistence::load::<T>(&LocalStorage) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Discarding stored state {}: {}", T::STORAGE_KEY, e);
            T::default()
        }
    }
}

/// Write a persisted state; failures are logged and otherwise ignored
pub fn store<T: Persisted>(state: &T) {
    if let Err(e) = persistence::save(&LocalStorage, state) {
        log::error!("Failed to save {}: {}", T::STORAGE_KEY, e);
    }
}

