//! Synthetic scholarly knowledge-graph generator for kgsynth.
//!
//! This crate consumes a validated [`kgsynth_config::GeneratorConfig`] and
//! produces a deterministic (per seed) fact set describing a university: its
//! colleges, departments, faculty, publications, co-authorships, projects,
//! grants, equipment and events. Writers serialize the fact set as Turtle or
//! N-Triples.

pub mod builder;
pub mod coauthor;
pub mod content;
pub mod context;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod ids;
pub mod model;
pub mod output;
pub mod sampling;

#[cfg(test)]
mod fixtures;

pub use builder::GraphBuilder;
pub use content::{ContentSynthesizer, LocalizedText};
pub use context::{EntityPools, GenerationContext};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use ids::{EntityKind, IdentifierAllocator};
pub use model::{GenerateOptions, GenerationSummary};
pub use output::{OutputFormat, write_ntriples, write_turtle};
