use tracing::debug;

use kgsynth_core::vocab::{bibo, obo, rdfs, skos, vivo};
use kgsynth_core::{Iri, Literal};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::digits;
use crate::ids::EntityKind;

pub fn concept(ctx: &mut GenerationContext, label: &str) -> Result<Iri, GenerationError> {
    let concept = ctx.mint(EntityKind::Concept)?;
    ctx.emit_type(&concept, skos::CONCEPT);
    let label = ctx.primary(label);
    ctx.emit(&concept, rdfs::LABEL, label);
    ctx.pools.concepts.push(concept.clone());
    Ok(concept)
}

/// Journal with a random ISSN-shaped literal.
pub fn journal(ctx: &mut GenerationContext, label: &str) -> Result<Iri, GenerationError> {
    let journal = ctx.mint(EntityKind::Journal)?;
    ctx.emit_type(&journal, bibo::JOURNAL);
    let label = ctx.primary(label);
    ctx.emit(&journal, rdfs::LABEL, label);
    let issn = format!("{}-{}", digits(ctx, 1000, 9999), digits(ctx, 1000, 9999));
    ctx.emit(&journal, bibo::ISSN, Literal::string(issn));
    ctx.pools.journals.push(journal.clone());
    Ok(journal)
}

pub fn university(ctx: &mut GenerationContext, name: &str) -> Result<Iri, GenerationError> {
    let university = ctx.mint(EntityKind::University)?;
    ctx.emit_type(&university, vivo::UNIVERSITY);
    ctx.emit_in_every_language(&university, rdfs::LABEL, name);
    debug!(event = "university_created", iri = %university);
    Ok(university)
}

/// College under `university`, named from the localized college list.
pub fn college(ctx: &mut GenerationContext, university: &Iri) -> Result<Iri, GenerationError> {
    let labels = ctx.localized_names(|config| &config.vocabulary.college_names, "college names")?;
    let college = ctx.mint(EntityKind::College)?;
    ctx.emit_type(&college, vivo::COLLEGE);
    for label in labels {
        ctx.emit(&college, rdfs::LABEL, label);
    }
    ctx.emit(&college, obo::PART_OF, university);
    ctx.pools.colleges.push(college.clone());
    debug!(event = "college_created", iri = %college);
    Ok(college)
}

pub fn department(ctx: &mut GenerationContext, college: &Iri) -> Result<Iri, GenerationError> {
    let labels = ctx.localized_names(
        |config| &config.vocabulary.department_names,
        "department names",
    )?;
    let department = ctx.mint(EntityKind::Department)?;
    ctx.emit_type(&department, vivo::ACADEMIC_DEPARTMENT);
    for label in labels {
        ctx.emit(&department, rdfs::LABEL, label);
    }
    ctx.emit(&department, obo::PART_OF, college);
    ctx.pools.departments.push(department.clone());
    debug!(event = "department_created", iri = %department);
    Ok(department)
}
