//! Fetch CLI command.
//!
//! Fetches one fact, shows it, and either saves or discards it. Without a
//! decision flag the user is asked.

use super::{prompt, write_failed};
use crate::Result;
use crate::models::SaveOutcome;
use crate::services::{FactCollection, FactSource};
use crate::storage::KeyValueStore;
use std::io::{BufRead, Write};

/// What to do with a fetched fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchDecision {
    /// Ask the user.
    #[default]
    Prompt,
    /// Save without asking.
    Save,
    /// Discard without asking.
    Discard,
}

impl FetchDecision {
    /// Builds the decision from the `--save` / `--discard` flags.
    #[must_use]
    pub const fn from_flags(save: bool, discard: bool) -> Self {
        match (save, discard) {
            (true, _) => Self::Save,
            (false, true) => Self::Discard,
            (false, false) => Self::Prompt,
        }
    }
}

/// Fetch command handler.
pub struct FetchCommand;

impl FetchCommand {
    /// Runs the fetch command.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after telling the user the fetch failed, or
    /// an error if the terminal cannot be read or written.
    pub fn execute<S, F, R, W>(
        collection: &mut FactCollection<S>,
        source: &F,
        decision: FetchDecision,
        input: &mut R,
        out: &mut W,
    ) -> Result<()>
    where
        S: KeyValueStore,
        F: FactSource + ?Sized,
        R: BufRead,
        W: Write,
    {
        let candidate = match source.fetch() {
            Ok(candidate) => candidate,
            Err(e) => {
                writeln!(out, "Could not fetch a fact.").map_err(write_failed)?;
                return Err(e);
            },
        };

        writeln!(out, "\u{201c}{}\u{201d}", candidate.fact()).map_err(write_failed)?;
        if let Some(length) = candidate.length() {
            writeln!(out, "{length} characters").map_err(write_failed)?;
        }

        let save = match decision {
            FetchDecision::Save => true,
            FetchDecision::Discard => false,
            FetchDecision::Prompt => ask_save(input, out)?,
        };

        if !save {
            writeln!(out, "Discarded.").map_err(write_failed)?;
            return Ok(());
        }

        match collection.add_if_absent(candidate) {
            SaveOutcome::Saved(fact) => {
                writeln!(out, "Saved ({}).", fact.id).map_err(write_failed)?;
            },
            SaveOutcome::Duplicate => {
                writeln!(out, "Already saved.").map_err(write_failed)?;
            },
        }
        Ok(())
    }
}

/// Asks until the answer is save or discard. End of input discards.
fn ask_save<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        let Some(answer) = prompt(input, out, "[s]ave / [d]iscard?")? else {
            writeln!(out).map_err(write_failed)?;
            return Ok(false);
        };

        match answer.to_lowercase().as_str() {
            "s" | "save" => return Ok(true),
            "d" | "discard" => return Ok(false),
            _ => writeln!(out, "Please answer 's' or 'd'.").map_err(write_failed)?,
        }
    }
}
