//! Delete CLI command.
//!
//! ```bash
//! # Ask before deleting
//! catfacts delete lqu5m2o0x1y2z
//!
//! # Skip confirmation
//! catfacts delete --yes lqu5m2o0x1y2z
//! ```

use super::{prompt, write_failed};
use crate::Result;
use crate::models::FactId;
use crate::services::FactCollection;
use crate::storage::KeyValueStore;
use std::io::{BufRead, Write};

/// Delete command handler.
pub struct DeleteCommand;

impl DeleteCommand {
    /// Deletes one fact, asking first unless `yes` is set.
    ///
    /// Returns whether the fact was deleted.
    pub fn execute<S, R, W>(
        collection: &mut FactCollection<S>,
        id: &FactId,
        yes: bool,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool>
    where
        S: KeyValueStore,
        R: BufRead,
        W: Write,
    {
        let Some(fact) = collection.get(id) else {
            writeln!(out, "Not found: {id}").map_err(write_failed)?;
            return Ok(false);
        };

        if !yes {
            writeln!(out, "  {}", fact.fact).map_err(write_failed)?;
            let answer = prompt(input, out, "Delete? [y/N]")?;
            let confirmed = answer.is_some_and(|a| {
                a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
            });
            if !confirmed {
                writeln!(out, "Cancelled.").map_err(write_failed)?;
                return Ok(false);
            }
        }

        let removed = collection.remove_by_id(id);
        writeln!(out, "Deleted.").map_err(write_failed)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PersistenceStore};
    use std::io::Cursor;
    use test_case::test_case;

    const SEED: &str = r#"[{"id":"a","fact":"Cats sleep 70% of their lives.","length":29,"createdAt":"2024-01-01T00:00:00.000Z"}]"#;

    fn seeded() -> FactCollection<MemoryStore> {
        FactCollection::open(PersistenceStore::new(
            MemoryStore::with_value("catfacts", SEED),
            "catfacts",
        ))
    }

    fn run(
        collection: &mut FactCollection<MemoryStore>,
        id: &str,
        yes: bool,
        answers: &str,
    ) -> (bool, String) {
        let mut input = Cursor::new(answers.to_string());
        let mut out = Vec::new();
        let deleted =
            DeleteCommand::execute(collection, &FactId::new(id), yes, &mut input, &mut out)
                .unwrap();
        (deleted, String::from_utf8(out).unwrap())
    }

    #[test_case("y\n" ; "short")]
    #[test_case("YES\n" ; "long uppercase")]
    fn test_confirmed(answer: &str) {
        let mut collection = seeded();

        let (deleted, out) = run(&mut collection, "a", false, answer);

        assert!(deleted);
        assert!(out.contains("Cats sleep 70% of their lives."));
        assert!(out.contains("Delete? [y/N]"));
        assert!(out.ends_with("Deleted.\n"));
        assert!(collection.is_empty());
        assert_eq!(
            collection.store().store().get("catfacts").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test_case("n\n" ; "no")]
    #[test_case("\n" ; "default")]
    #[test_case("" ; "end of input")]
    fn test_cancelled(answer: &str) {
        let mut collection = seeded();

        let (deleted, out) = run(&mut collection, "a", false, answer);

        assert!(!deleted);
        assert!(out.ends_with("Cancelled.\n"));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.store().store().write_count(), 0);
    }

    #[test]
    fn test_yes_skips_prompt() {
        let mut collection = seeded();

        let (deleted, out) = run(&mut collection, "a", true, "");

        assert!(deleted);
        assert_eq!(out, "Deleted.\n");
    }

    #[test]
    fn test_unknown_id() {
        let mut collection = seeded();

        let (deleted, out) = run(&mut collection, "zzz", true, "");

        assert!(!deleted);
        assert_eq!(out, "Not found: zzz\n");
        assert_eq!(collection.len(), 1);
    }
}
