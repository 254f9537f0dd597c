//! The saved fact collection.
//!
//! Holds the facts in memory, newest first, and writes the whole list back
//! to the [`PersistenceStore`] after every mutation. Each operation runs to
//! completion before the next one starts; mutation needs `&mut self`.

use crate::models::{Fact, FactCandidate, FactId, SaveOutcome};
use crate::storage::{KeyValueStore, PersistenceStore};

/// In-memory ordered list of saved facts.
pub struct FactCollection<S: KeyValueStore> {
    facts: Vec<Fact>,
    store: PersistenceStore<S>,
}

impl<S: KeyValueStore> FactCollection<S> {
    /// Opens the collection, populating it from storage.
    pub fn open(store: PersistenceStore<S>) -> Self {
        let facts = store.load();
        Self { facts, store }
    }

    /// Saves a candidate unless a fact with the same text already exists.
    ///
    /// Text comparison is exact and case-sensitive. A duplicate leaves the
    /// collection and storage untouched. A new fact gets a fresh ID and the
    /// current timestamp, goes to the front, and the list is persisted.
    pub fn add_if_absent(&mut self, candidate: FactCandidate) -> SaveOutcome {
        if self.contains_text(candidate.fact()) {
            tracing::debug!("Fact already saved");
            metrics::counter!("catfacts_facts_duplicate_total").increment(1);
            return SaveOutcome::Duplicate;
        }

        let fact = Fact::new(candidate.fact(), candidate.length());
        tracing::info!(id = %fact.id, "Saving fact");

        self.facts.insert(0, fact.clone());
        self.store.save(&self.facts);
        metrics::counter!("catfacts_facts_saved_total").increment(1);

        SaveOutcome::Saved(fact)
    }

    /// Removes the fact with the given ID, if any, then persists the list.
    ///
    /// The list is persisted even when nothing matched. Returns whether a
    /// fact was removed.
    pub fn remove_by_id(&mut self, id: &FactId) -> bool {
        let before = self.facts.len();
        self.facts.retain(|f| &f.id != id);
        let removed = self.facts.len() < before;

        self.store.save(&self.facts);

        if removed {
            tracing::info!(%id, "Removed fact");
            metrics::counter!("catfacts_facts_removed_total").increment(1);
        } else {
            tracing::debug!(%id, "No fact to remove");
        }
        removed
    }

    /// Replaces the in-memory list with what is currently in storage.
    pub fn reload(&mut self) {
        self.facts = self.store.load();
    }

    /// Returns the facts, newest first.
    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Looks up a fact by ID.
    #[must_use]
    pub fn get(&self, id: &FactId) -> Option<&Fact> {
        self.facts.iter().find(|f| &f.id == id)
    }

    /// Checks if a fact with exactly this text is saved.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.facts.iter().any(|f| f.fact == text)
    }

    /// Returns the number of saved facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Returns the persistence store.
    #[must_use]
    pub const fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }
}
