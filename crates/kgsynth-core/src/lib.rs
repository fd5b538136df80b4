//! Core contracts for kgsynth.
//!
//! This crate defines the fact and term model of the generated scholarly
//! graph, the ontology vocabulary, and the append-only fact store shared by
//! the generator, the evaluator and the CLI.

pub mod error;
pub mod store;
pub mod term;
pub mod vocab;

pub use error::{Error, Result};
pub use store::{FactPattern, FactStore};
pub use term::{Fact, Iri, Literal, LiteralTag, Term};
pub use vocab::WorkType;
