//! Key-value store trait.

use crate::Result;

/// Trait for synchronous key-value storage services.
///
/// Values are opaque strings; there are no transactions and no partial
/// writes. A `set` replaces whatever was stored under the key.
///
/// # Implementor Notes
///
/// - Methods take `&self`; use interior mutability for mutable state
/// - `get` returns `Ok(None)` for a key that was never written
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Checks if a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}
