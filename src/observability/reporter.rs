//! Failure reporting for best-effort operations.
//!
//! Storage failures never reach the caller of a collection operation. They
//! are handed to an [`ErrorReporter`] instead, chosen by whoever builds the
//! store.

use std::fmt;
use std::sync::Mutex;

/// Which storage operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    /// Reading or parsing the persisted list.
    Load,
    /// Serializing or writing the persisted list.
    Save,
}

impl StorageOperation {
    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A swallowed storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFailure {
    /// The operation that failed.
    pub operation: StorageOperation,
    /// The storage key involved.
    pub key: String,
    /// The underlying cause.
    pub cause: String,
}

/// Sink for failures that are reported rather than returned.
pub trait ErrorReporter: Send + Sync {
    /// Reports a storage failure.
    fn report(&self, failure: &StorageFailure);
}

/// Reports failures through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, failure: &StorageFailure) {
        tracing::error!(
            operation = %failure.operation,
            key = %failure.key,
            cause = %failure.cause,
            "Storage operation failed"
        );
    }
}

/// Collects reported failures in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<StorageFailure>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn failures(&self) -> Vec<StorageFailure> {
        self.failures
            .lock()
            .map(|failures| failures.clone())
            .unwrap_or_default()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, failure: &StorageFailure) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(failure.clone());
        }
    }
}
