//! Keyed persistence of client-side store state.
//!
//! The stores themselves are plain serde values; where the bytes live is the
//! caller's business. The browser plugs in `window.localStorage`, tests use
//! [`MemoryStore`]. State is loaded once at startup and saved after every
//! mutation.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Version written into every blob
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage rejected key {key}: {message}")]
    Write { key: String, message: String },

    #[error("stored state under {key} is corrupt: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode state for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage (the shape of the Web Storage API)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove_item(&self, key: &str) -> Result<(), PersistenceError>;
}

/// A store state that lives under a fixed storage key
pub trait Persisted: Serialize + DeserializeOwned + Default {
    const STORAGE_KEY: &'static str;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    #[allow(dead_code)]
    version: u32,
}

/// Load a state, falling back to `T::default()` when nothing is stored yet
pub fn load<T: Persisted>(store: &impl KeyValueStore) -> Result<T, PersistenceError> {
    let Some(raw) = store.get_item(T::STORAGE_KEY) else {
        return Ok(T::default());
    };

    serde_json::from_str::<Envelope<T>>(&raw)
        .map(|envelope| envelope.state)
        .map_err(|source| PersistenceError::Decode {
            key: T::STORAGE_KEY.to_string(),
            source,
        })
}

/// Save a state under its key
pub fn save<T: Persisted>(store: &impl KeyValueStore, state: &T) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(&EnvelopeRef {
        state,
        version: STATE_VERSION,
    })
    .map_err(|source| PersistenceError::Encode {
        key: T::STORAGE_KEY.to_string(),
        source,
    })?;

    store.set_item(T::STORAGE_KEY, &raw)
}

/// Drop a state entirely
pub fn clear<T: Persisted>(store: &impl KeyValueStore) -> Result<(), PersistenceError> {
    store.remove_item(T::STORAGE_KEY)
}

/// In-process storage, used in tests and when the browser refuses storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    impl Persisted for Counter {
        const STORAGE_KEY: &'static str = "test-counter";
    }

    #[test]
    fn test_missing_state_loads_default() {
        let store = MemoryStore::new();
        let counter: Counter = load(&store).unwrap();
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_saved_state_is_enveloped() {
        let store = MemoryStore::new();
        save(&store, &Counter { value: 7 }).unwrap();

        let raw = store.get_item("test-counter").unwrap();
        assert_eq!(raw, r#"{"state":{"value":7},"version":0}"#);
        assert_eq!(load::<Counter>(&store).unwrap(), Counter { value: 7 });
    }

    #[test]
    fn test_corrupt_state_is_reported() {
        let store = MemoryStore::new();
        store.set_item("test-counter", "{not json").unwrap();

        let err = load::<Counter>(&store).unwrap_err();
        assert!(matches!(err, PersistenceError::Decode { ref key, .. } if key == "test-counter"));
    }

    #[test]
    fn test_clear_removes_state() {
        let store = MemoryStore::new();
        save(&store, &Counter { value: 1 }).unwrap();
        clear::<Counter>(&store).unwrap();
        assert!(store.get_item("test-counter").is_none());
    }
}
