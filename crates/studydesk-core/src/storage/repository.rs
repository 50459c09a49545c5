//! Typed repositories over the key-value store.
//!
//! Each feature area owns one named slot with a typed schema. Repositories
//! are handed a backend rather than reaching for storage ambiently, so
//! feature stores can be exercised against an in-memory backend in tests.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DatabaseError;

/// Raw string storage a [`Repository`] sits on.
pub trait KvBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, DatabaseError>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), DatabaseError>;
    fn delete_raw(&self, key: &str) -> Result<(), DatabaseError>;
}

/// In-memory backend for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw (possibly malformed) value under a key.
    pub fn seed_raw(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }
}

impl KvBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let map = self
            .map
            .lock()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), DatabaseError> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        map.remove(key);
        Ok(())
    }
}

/// One typed slot under a fixed persistence key.
pub struct Repository<'a, T> {
    backend: &'a dyn KvBackend,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T> Repository<'a, T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(backend: &'a dyn KvBackend, key: &'static str) -> Self {
        Self {
            backend,
            key,
            _marker: PhantomData,
        }
    }

    /// Read the slot. A missing or unparsable value is treated as absent
    /// and replaced by the default; parse failures are never fatal.
    pub fn get(&self) -> Result<T, DatabaseError> {
        match self.backend.get_raw(self.key)? {
            None => Ok(T::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::warn!(key = self.key, error = %e, "malformed persisted value, using default");
                    Ok(T::default())
                }
            },
        }
    }

    /// Serialize and write the slot immediately.
    pub fn put(&self, value: &T) -> Result<(), DatabaseError> {
        let raw = serde_json::to_string(value).map_err(|e| DatabaseError::SerializeFailed {
            key: self.key.to_string(),
            message: e.to_string(),
        })?;
        self.backend.set_raw(self.key, &raw)
    }

    /// Drop the slot entirely.
    pub fn clear(&self) -> Result<(), DatabaseError> {
        self.backend.delete_raw(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_yields_default() {
        let backend = MemoryBackend::new();
        let repo: Repository<Vec<String>> = Repository::new(&backend, "list");
        assert!(repo.get().unwrap().is_empty());
    }

    #[test]
    fn put_then_get_roundtrips() {
        let backend = MemoryBackend::new();
        let repo: Repository<Vec<String>> = Repository::new(&backend, "list");
        repo.put(&vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(repo.get().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn malformed_value_is_treated_as_absent() {
        let backend = MemoryBackend::new();
        backend.seed_raw("list", "{not json");
        let repo: Repository<Vec<String>> = Repository::new(&backend, "list");
        assert!(repo.get().unwrap().is_empty());
    }

    #[test]
    fn wrong_shape_is_treated_as_absent() {
        let backend = MemoryBackend::new();
        backend.seed_raw("list", "{\"an\": \"object\"}");
        let repo: Repository<Vec<String>> = Repository::new(&backend, "list");
        assert!(repo.get().unwrap().is_empty());
    }

    #[test]
    fn clear_drops_the_slot() {
        let backend = MemoryBackend::new();
        let repo: Repository<Vec<String>> = Repository::new(&backend, "list");
        repo.put(&vec!["a".to_string()]).unwrap();
        repo.clear().unwrap();
        assert!(repo.get().unwrap().is_empty());
    }
}
