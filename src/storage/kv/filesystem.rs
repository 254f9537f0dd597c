//! Filesystem-based key-value store.
//!
//! Each key is stored as `<key>.json` under a base directory.
//!
//! # Security
//!
//! - **Path traversal**: keys are validated to prevent directory escape
//! - **File size limits**: oversized files are refused on read

use crate::storage::traits::KeyValueStore;
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maximum file size for a stored value (1MB).
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Filesystem-based key-value store.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    /// Base directory for storage.
    base_path: PathBuf,
}

impl FilesystemStore {
    /// Creates a new filesystem store.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Creates a new filesystem store, creating the directory up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_create(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).map_err(|e| Error::OperationFailed {
            operation: "create_storage_dir".to_string(),
            cause: e.to_string(),
        })?;

        Ok(Self { base_path })
    }

    /// Returns the file path for a key.
    ///
    /// # Security
    ///
    /// Only ASCII letters, digits, dashes, and underscores are allowed.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !Self::is_safe_key(key) {
            return Err(Error::InvalidInput(format!(
                "Storage key contains invalid characters: {key}",
            )));
        }

        Ok(self.base_path.join(format!("{key}.json")))
    }

    /// Checks if a key is usable as a file name.
    fn is_safe_key(key: &str) -> bool {
        !key.is_empty()
            && key.len() <= 255
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl KeyValueStore for FilesystemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::OperationFailed {
                    operation: "read_file_metadata".to_string(),
                    cause: e.to_string(),
                });
            },
        };

        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::InvalidInput(format!(
                "Store file exceeds maximum size of {MAX_FILE_SIZE} bytes: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(&path).map_err(|e| Error::OperationFailed {
            operation: "read_store_file".to_string(),
            cause: e.to_string(),
        })?;

        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        fs::create_dir_all(&self.base_path).map_err(|e| Error::OperationFailed {
            operation: "create_storage_dir".to_string(),
            cause: e.to_string(),
        })?;

        fs::write(&path, value).map_err(|e| Error::OperationFailed {
            operation: "write_store_file".to_string(),
            cause: e.to_string(),
        })?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Wrote store file");
        Ok(())
    }
}
