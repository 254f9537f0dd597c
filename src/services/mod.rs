//! Business logic services.
//!
//! - [`FactCollection`]: the saved facts and their persistence contract
//! - [`FactSource`]: where new facts come from ([`CatFactClient`] over HTTP)

mod collection;
mod fact_source;

pub use collection::FactCollection;
pub use fact_source::{CatFactClient, FactSource, parse_fact_response};
