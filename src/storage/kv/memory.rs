//! In-memory key-value store.

use crate::storage::traits::KeyValueStore;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Key-value store held entirely in memory.
///
/// Intended for tests. Writes can be made to fail with
/// [`MemoryStore::set_fail_writes`] to simulate a full or read-only store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.into(), value.into());
        }
        store
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns the number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|e| Error::OperationFailed {
            operation: "lock_memory_store".to_string(),
            cause: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::OperationFailed {
                operation: "write_memory_store".to_string(),
                cause: "quota exceeded".to_string(),
            });
        }

        let mut values = self.values.lock().map_err(|e| Error::OperationFailed {
            operation: "lock_memory_store".to_string(),
            cause: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_with_value() {
        let store = MemoryStore::with_value("k", "v");
        assert!(store.contains("k").unwrap());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_failing_writes_keep_old_value() {
        let store = MemoryStore::with_value("k", "old");
        store.set_fail_writes(true);

        assert!(store.set("k", "new").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("old"));

        store.set_fail_writes(false);
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }
}
