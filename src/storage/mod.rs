//! Storage layer.
//!
//! Two levels:
//! - **Key-value store**: an opaque synchronous get/set service
//!   ([`FilesystemStore`] on disk, [`MemoryStore`] for tests)
//! - **Persistence store**: the saved fact list serialized as one JSON blob
//!   under a single fixed key ([`PersistenceStore`])

pub mod kv;
mod persistence_store;
pub mod traits;

pub use kv::{FilesystemStore, MemoryStore};
pub use persistence_store::PersistenceStore;
pub use traits::KeyValueStore;
