//! JSON Persistence Helpers
//!
//! Reads fail closed: a missing key, an unreadable store or malformed JSON all
//! yield the empty/default value with a warning instead of an error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;
use crate::domain::MenuResult;

/// Load a JSON list, falling back to an empty list
pub fn load_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    load_value(store, key).unwrap_or_default()
}

/// Load a JSON value; `None` when absent or unreadable
pub fn load_value<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding malformed '{}' entry: {}", key, e);
            None
        }
    }
}

/// Serialize and overwrite a JSON list
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> MenuResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    save_value(store, key, &items)
}

pub fn save_value<T, S>(store: &S, key: &str, value: &T) -> MenuResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuError;
    use crate::repository::{MemoryStore, MockKeyValueStore};

    #[test]
    fn test_round_trip_collection() {
        let store = MemoryStore::new();
        save_collection(&store, "numbers", &[1, 2, 3]).unwrap();
        let loaded: Vec<i32> = load_collection(&store, "numbers");
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let loaded: Vec<i32> = load_collection(&MemoryStore::new(), "numbers");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let store = MemoryStore::new().with_entry("numbers", "[1, 2,");
        let loaded: Vec<i32> = load_collection(&store, "numbers");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        let store = MemoryStore::new().with_entry("numbers", r#"{"not": "a list"}"#);
        let loaded: Vec<i32> = load_collection(&store, "numbers");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_unreadable_store_is_empty() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(MenuError::Storage("denied".to_string())));
        let loaded: Vec<i32> = load_collection(&store, "numbers");
        assert!(loaded.is_empty());
    }
}
