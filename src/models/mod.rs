//! Data models for catfacts.
//!
//! This module contains the saved fact record, its identifier, and the
//! validated input used to save a new fact.

mod candidate;
mod fact;

pub use candidate::{FactCandidate, SaveOutcome};
pub use fact::{Fact, FactId, timestamp_now};
