//! # Catfacts
//!
//! Fetch random cat facts and keep the ones worth remembering.
//!
//! Saved facts live in a small ordered collection, newest first, that is
//! written back to a key-value store after every change.
//!
//! ## Example
//!
//! ```rust,ignore
//! use catfacts::{FactCandidate, FactCollection, SaveOutcome};
//! use catfacts::storage::{MemoryStore, PersistenceStore};
//!
//! let store = PersistenceStore::new(MemoryStore::new(), "catfacts");
//! let mut facts = FactCollection::open(store);
//!
//! let candidate = FactCandidate::new("Cats sleep 70% of their lives.", Some(29))?;
//! assert!(matches!(facts.add_if_absent(candidate), SaveOutcome::Saved(_)));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Transitive duplicates from reqwest/rustls.
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::CatfactsConfig;
pub use models::{Fact, FactCandidate, FactId, SaveOutcome};
pub use services::{CatFactClient, FactCollection, FactSource};
pub use storage::{FilesystemStore, KeyValueStore, MemoryStore, PersistenceStore};

/// Error type for catfacts operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Blank fact text, unsafe storage keys, bad command input |
/// | `OperationFailed` | I/O, serialization, configuration or logging setup fails |
/// | `FetchFailed` | The fact API is unreachable or returns something unusable |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// Fetching a fact from the remote API failed.
    ///
    /// Transport errors, non-success statuses and undecodable bodies all
    /// collapse into this variant.
    #[error("fetch failed: {cause}")]
    FetchFailed {
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for catfacts operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("blank fact".to_string());
        assert_eq!(err.to_string(), "invalid input: blank fact");

        let err = Error::OperationFailed {
            operation: "write_store_file".to_string(),
            cause: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'write_store_file' failed: disk full"
        );

        let err = Error::FetchFailed {
            cause: "status 503".to_string(),
        };
        assert_eq!(err.to_string(), "fetch failed: status 503");
    }
}
