//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Fetch a random fact, then save or discard it |
//! | `list` | Show saved facts, newest first |
//! | `delete` | Delete a saved fact after confirmation |
//! | `config` | Show the effective configuration |
//!
//! Commands write to any [`std::io::Write`] and read answers from any
//! [`std::io::BufRead`], so the binary passes stdout/stdin and tests pass
//! buffers.
//!
//! ```bash
//! catfacts fetch
//! catfacts fetch --save
//! catfacts list
//! catfacts delete lqu5m2o0x1y2z --yes
//! ```

mod config;
mod delete;
mod fetch;
mod list;

pub use config::ConfigCommand;
pub use delete::DeleteCommand;
pub use fetch::{FetchCommand, FetchDecision};
pub use list::{ListCommand, format_date, format_meta};

use crate::config::CatfactsConfig;
use crate::services::FactCollection;
use crate::storage::{FilesystemStore, PersistenceStore};
use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Opens the saved collection described by the configuration.
pub fn open_collection(config: &CatfactsConfig) -> FactCollection<FilesystemStore> {
    let store = FilesystemStore::new(&config.data_dir);
    FactCollection::open(PersistenceStore::new(store, config.storage_key.clone()))
}

/// Writes a prompt and reads one trimmed answer line.
///
/// Returns `None` at end of input.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{question} ").map_err(write_failed)?;
    out.flush().map_err(write_failed)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::OperationFailed {
            operation: "read_stdin".to_string(),
            cause: e.to_string(),
        })?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Maps an output error.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn write_failed(e: io::Error) -> Error {
    Error::OperationFailed {
        operation: "write_stdout".to_string(),
        cause: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut input = Cursor::new("  yes \n");
        let mut out = Vec::new();

        let answer = prompt(&mut input, &mut out, "Delete? [y/N]").unwrap();

        assert_eq!(answer.as_deref(), Some("yes"));
        assert_eq!(String::from_utf8(out).unwrap(), "Delete? [y/N] ");
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        assert!(prompt(&mut input, &mut out, "?").unwrap().is_none());
    }

    #[test]
    fn test_open_collection_uses_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("facts.json"),
            r#"[{"id":"a","fact":"Cats purr.","length":null,"createdAt":"2024-01-01T00:00:00.000Z"}]"#,
        )
        .unwrap();
        let config = CatfactsConfig::default()
            .with_data_dir(dir.path())
            .with_storage_key("facts");

        let collection = open_collection(&config);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.store().key(), "facts");
    }
}
