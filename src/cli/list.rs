//! List CLI command.

use super::write_failed;
use crate::Result;
use crate::models::Fact;
use crate::services::FactCollection;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Local};
use std::io::Write;

/// List command handler.
pub struct ListCommand;

impl ListCommand {
    /// Prints every saved fact, newest first.
    pub fn execute<S: KeyValueStore, W: Write>(
        collection: &FactCollection<S>,
        out: &mut W,
    ) -> Result<()> {
        if collection.is_empty() {
            writeln!(out, "No saved facts.").map_err(write_failed)?;
            return Ok(());
        }

        writeln!(out, "Saved facts ({}):", collection.len()).map_err(write_failed)?;
        for fact in collection.facts() {
            writeln!(out).map_err(write_failed)?;
            writeln!(out, "  {}", fact.fact).map_err(write_failed)?;
            writeln!(out, "  {}  [{}]", format_meta(fact), fact.id).map_err(write_failed)?;
        }
        Ok(())
    }
}

/// Formats a stored timestamp in local time.
///
/// Timestamps that do not parse are shown as stored.
#[must_use]
pub fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso).map_or_else(
        |_| iso.to_string(),
        |dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// Formats the date line of a fact, with ` · N characters` when the length
/// is known.
#[must_use]
pub fn format_meta(fact: &Fact) -> String {
    let date = format_date(&fact.created_at);
    match fact.length {
        Some(length) if length > 0 => format!("{date} \u{b7} {length} characters"),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FactId;
    use crate::storage::{MemoryStore, PersistenceStore};

    fn fact(length: Option<u32>, created_at: &str) -> Fact {
        Fact {
            id: FactId::new("a"),
            fact: "Cats purr.".to_string(),
            length,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_format_date_unparseable_kept() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_local() {
        let formatted = format_date("2024-01-01T00:00:00.000Z");
        assert_eq!(formatted.len(), "2024-01-01 00:00:00".len());
        assert!(formatted.starts_with("2023-12-31") || formatted.starts_with("2024-01-01"));
    }

    #[test]
    fn test_format_meta_with_length() {
        let meta = format_meta(&fact(Some(29), "not a date"));
        assert_eq!(meta, "not a date \u{b7} 29 characters");
    }

    #[test]
    fn test_format_meta_without_length() {
        assert_eq!(format_meta(&fact(None, "not a date")), "not a date");
        assert_eq!(format_meta(&fact(Some(0), "not a date")), "not a date");
    }

    #[test]
    fn test_list_empty() {
        let collection = FactCollection::open(PersistenceStore::new(MemoryStore::new(), "k"));
        let mut out = Vec::new();

        ListCommand::execute(&collection, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No saved facts.\n");
    }

    #[test]
    fn test_list_newest_first() {
        let blob = r#"[
            {"id":"new","fact":"Cats have 5 toes on front paws.","length":30,"createdAt":"2024-01-02T00:00:00.000Z"},
            {"id":"old","fact":"Cats sleep 70% of their lives.","length":29,"createdAt":"2024-01-01T00:00:00.000Z"}
        ]"#;
        let collection =
            FactCollection::open(PersistenceStore::new(MemoryStore::with_value("k", blob), "k"));
        let mut out = Vec::new();

        ListCommand::execute(&collection, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Saved facts (2):"));
        let toes = text.find("5 toes").unwrap();
        let sleep = text.find("70%").unwrap();
        assert!(toes < sleep);
        assert!(text.contains("[new]"));
        assert!(text.contains("30 characters"));
    }
}
