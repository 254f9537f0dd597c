//! Save request and outcome types.

use super::Fact;
use crate::{Error, Result};

/// A fact that has been fetched but not yet saved.
///
/// Construction guarantees the text is not blank, so saving a candidate
/// never has to validate it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCandidate {
    fact: String,
    length: Option<u32>,
}

impl FactCandidate {
    /// Creates a candidate from fact text and an optional length.
    ///
    /// A length of zero is treated as unknown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is empty or whitespace.
    pub fn new(fact: impl Into<String>, length: Option<u32>) -> Result<Self> {
        let fact = fact.into();
        if fact.trim().is_empty() {
            return Err(Error::InvalidInput("Fact text cannot be empty".to_string()));
        }

        Ok(Self {
            fact,
            length: length.filter(|&len| len > 0),
        })
    }

    /// Returns the fact text.
    #[must_use]
    pub fn fact(&self) -> &str {
        &self.fact
    }

    /// Returns the reported length, if known.
    #[must_use]
    pub const fn length(&self) -> Option<u32> {
        self.length
    }
}

/// Outcome of saving a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The fact was new and has been stored.
    Saved(Fact),
    /// A fact with identical text is already in the collection.
    Duplicate,
}

impl SaveOutcome {
    /// Returns `true` if the candidate was stored.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}
