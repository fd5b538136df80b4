//! Post-hoc co-author wiring.
//!
//! Runs once per work after every person and work exists. Each work moves
//! from "no co-authors" to "co-authors assigned" exactly once; a second call
//! for the same work is a no-op.

use rand::seq::SliceRandom;
use tracing::debug;

use kgsynth_core::vocab::{vcard, vivo};
use kgsynth_core::{FactPattern, FactStore, Iri, Term};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::person::draw_name;
use crate::factory::work::authorship;
use crate::ids::EntityKind;
use crate::sampling::subset_excluding;

/// The faculty member holding the rank-1 authorship of `work`.
pub fn originating_author(store: &FactStore, work: &Iri) -> Result<Iri, GenerationError> {
    let relates = Iri::new(vivo::RELATES);
    let rank = Iri::new(vivo::RANK);
    let work_term = Term::Iri(work.clone());

    let linked = store.find(FactPattern::new(None, Some(&relates), Some(&work_term)))?;
    for candidate in linked.iter().filter_map(Term::as_iri) {
        if !store.has_type(candidate, vivo::AUTHORSHIP) {
            continue;
        }
        let first = store
            .find(FactPattern::new(Some(candidate), Some(&rank), None))?
            .iter()
            .filter_map(Term::as_literal)
            .any(|literal| literal.as_i64() == Some(1));
        if !first {
            continue;
        }

        let related = store.find(FactPattern::new(Some(candidate), Some(&relates), None))?;
        let author = related
            .iter()
            .filter_map(Term::as_iri)
            .find(|person| *person != work && store.has_type(person, vivo::FACULTY_MEMBER));
        if let Some(author) = author {
            return Ok(author.clone());
        }
    }

    Err(GenerationError::MissingAuthorship {
        work: work.to_string(),
    })
}

/// Name-only external collaborator: typed as a vcard kind, never as a person.
pub fn stub_author(ctx: &mut GenerationContext) -> Result<Iri, GenerationError> {
    let name = draw_name(ctx)?;
    let stub = ctx.mint(EntityKind::Stub)?;
    ctx.emit_type(&stub, vcard::KIND);
    let name_entry = ctx.mint(EntityKind::VcardName)?;
    ctx.emit(&stub, vcard::HAS_NAME, &name_entry);
    ctx.emit_type(&name_entry, vcard::NAME);
    let given = ctx.primary(name.given);
    ctx.emit(&name_entry, vcard::GIVEN_NAME, given);
    let family = ctx.primary(name.family);
    ctx.emit(&name_entry, vcard::FAMILY_NAME, family);
    Ok(stub)
}

/// Add ranks 2..N to `work`: one stub plus a Poisson-sized draw of
/// university authors other than the originating one, in shuffled order.
///
/// Returns the number of authorships added.
pub fn assign_coauthors(ctx: &mut GenerationContext, work: &Iri) -> Result<usize, GenerationError> {
    if !ctx.pools.mark_coauthored(work) {
        return Ok(0);
    }

    let stub = stub_author(ctx)?;
    let primary = originating_author(&ctx.store, work)?;

    let requested = ctx.coauthor_count.sample(&mut ctx.rng);
    let available = ctx.pools.authors().len() - usize::from(ctx.pools.is_author(&primary));
    let drawn = subset_excluding(
        ctx.pools.authors(),
        requested.min(available),
        std::slice::from_ref(&primary),
        "authors",
        &mut ctx.rng,
    )?;

    let mut authors = drawn;
    authors.push(stub);
    authors.shuffle(&mut ctx.rng);

    for (offset, author) in authors.iter().enumerate() {
        authorship(ctx, work, author, offset as i64 + 2)?;
    }
    debug!(
        event = "coauthors_added",
        work = %work,
        university_authors = authors.len() - 1,
        requested
    );
    Ok(authors.len())
}
