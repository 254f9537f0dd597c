//! Persistence of the saved fact list.
//!
//! The whole list is stored as one JSON array under a single key and is
//! rewritten in full on every save. Loading is best-effort: a missing blob
//! and an unreadable blob both yield an empty list.

use crate::models::Fact;
use crate::observability::{ErrorReporter, StorageFailure, StorageOperation, TracingReporter};
use crate::storage::traits::KeyValueStore;
use std::sync::Arc;

/// Reads and writes the fact list through a [`KeyValueStore`].
pub struct PersistenceStore<S: KeyValueStore> {
    store: S,
    key: String,
    reporter: Arc<dyn ErrorReporter>,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    /// Creates a persistence store that reports failures through `tracing`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self::with_reporter(store, key, Arc::new(TracingReporter))
    }

    /// Creates a persistence store with a custom failure sink.
    pub fn with_reporter(store: S, key: impl Into<String>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            store,
            key: key.into(),
            reporter,
        }
    }

    /// Loads the persisted list.
    ///
    /// Returns an empty list if nothing is stored. If the stored value
    /// cannot be read or parsed, the failure is reported and an empty list
    /// is returned; the stored value is left as it is.
    pub fn load(&self) -> Vec<Fact> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No saved facts");
                return Vec::new();
            },
            Err(e) => {
                self.report(StorageOperation::Load, e.to_string());
                return Vec::new();
            },
        };

        match serde_json::from_str::<Vec<Fact>>(&raw) {
            Ok(facts) => {
                tracing::debug!(key = %self.key, count = facts.len(), "Loaded saved facts");
                facts
            },
            Err(e) => {
                self.report(StorageOperation::Load, format!("invalid saved facts: {e}"));
                Vec::new()
            },
        }
    }

    /// Writes the full list, replacing whatever was stored.
    ///
    /// A failed write is reported and otherwise ignored; the persisted copy
    /// is then stale until the next successful save.
    pub fn save(&self, facts: &[Fact]) {
        let json = match serde_json::to_string(facts) {
            Ok(json) => json,
            Err(e) => {
                self.report(StorageOperation::Save, format!("serialize failed: {e}"));
                return;
            },
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = facts.len(), "Saved facts");
            },
            Err(e) => self.report(StorageOperation::Save, e.to_string()),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn report(&self, operation: StorageOperation, cause: String) {
        metrics::counter!("catfacts_storage_failures_total", "operation" => operation.as_str())
            .increment(1);
        self.reporter.report(&StorageFailure {
            operation,
            key: self.key.clone(),
            cause,
        });
    }
}
