//! Entity factory: one creation function per entity kind.
//!
//! Every function mints an identifier, asserts a type, emits labels and
//! relation facts into the context's store, and returns the new identifier.
//! [`crate::builder::GraphBuilder`] is the public face of these functions.

pub mod activity;
pub mod event;
pub mod org;
pub mod person;
pub mod temporal;
pub mod work;

use rand::Rng;

use kgsynth_core::vocab::{rdfs, vcard, vivo};
use kgsynth_core::{Iri, Literal};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::ids::EntityKind;
use crate::sampling::pick;

/// Probability that a person or work gets topical concept links at all.
const CONCEPT_GATE: f64 = 0.5;
/// Exclusive upper bound on concept links once the gate opens.
const MAX_CONCEPT_LINKS: u32 = 5;

/// 0 to 4 links to random concepts, behind a coin flip. Repeats are allowed.
pub(crate) fn attach_concepts(
    ctx: &mut GenerationContext,
    subject: &Iri,
    predicate: &str,
) -> Result<usize, GenerationError> {
    if !ctx.rng.random_bool(CONCEPT_GATE) {
        return Ok(0);
    }
    let links = ctx.rng.random_range(0..MAX_CONCEPT_LINKS);
    for _ in 0..links {
        let concept = pick(&ctx.pools.concepts, "concepts", &mut ctx.rng)?.clone();
        ctx.emit(subject, predicate, concept);
    }
    Ok(links as usize)
}

/// Ranked, labeled URL entry hung off a vcard.
pub(crate) fn vcard_url(
    ctx: &mut GenerationContext,
    card: &Iri,
    rank: i64,
    label: &str,
    url: &str,
) -> Result<Iri, GenerationError> {
    let entry = ctx.mint(EntityKind::VcardUrl)?;
    ctx.emit(card, vcard::HAS_URL, &entry);
    ctx.emit_type(&entry, vcard::URL);
    ctx.emit(&entry, vivo::RANK, Literal::integer(rank));
    let label = ctx.primary(label);
    ctx.emit(&entry, rdfs::LABEL, label);
    ctx.emit(&entry, vcard::URL_PROP, Literal::any_uri(url));
    Ok(entry)
}

/// Decimal string of a uniform integer in `[low, high]`.
pub(crate) fn digits(ctx: &mut GenerationContext, low: u32, high: u32) -> String {
    ctx.rng.random_range(low..=high).to_string()
}
