use tracing::debug;

use kgsynth_core::Iri;
use kgsynth_core::vocab::{obo, rdfs, vivo};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::temporal;
use crate::ids::EntityKind;

/// Label, open interval and description shared by projects and grants.
fn titled_activity(
    ctx: &mut GenerationContext,
    kind: EntityKind,
    class: &str,
) -> Result<Iri, GenerationError> {
    let activity = ctx.mint(kind)?;
    ctx.emit_type(&activity, class);
    let (title_length, description_length) = ctx.text_lengths();
    ctx.emit_localized(&activity, rdfs::LABEL, title_length);
    let running = temporal::open_interval_from_random_year(ctx)?;
    ctx.emit(&activity, vivo::DATE_TIME_INTERVAL_PROP, running);
    ctx.emit_localized(&activity, vivo::DESCRIPTION, description_length);
    Ok(activity)
}

pub fn project(
    ctx: &mut GenerationContext,
    participants: &[Iri],
    outputs: &[Iri],
) -> Result<Iri, GenerationError> {
    let project = titled_activity(ctx, EntityKind::Project, vivo::PROJECT)?;
    for participant in participants {
        ctx.emit(&project, obo::HAS_PARTICIPANT, participant);
    }
    for output in outputs {
        ctx.emit(&project, obo::HAS_OUTPUT, output);
    }
    ctx.pools.projects.push(project.clone());
    debug!(
        event = "project_created",
        iri = %project,
        participants = participants.len(),
        outputs = outputs.len()
    );
    Ok(project)
}

/// Grant administered by colleges, funding projects and supporting works.
pub fn grant(
    ctx: &mut GenerationContext,
    administrators: &[Iri],
    funded_projects: &[Iri],
    supported_works: &[Iri],
) -> Result<Iri, GenerationError> {
    let grant = titled_activity(ctx, EntityKind::Grant, vivo::GRANT)?;
    let abstract_length = ctx.config.content.description_length;
    ctx.emit_localized(&grant, vivo::ABSTRACT, abstract_length);
    for administrator in administrators {
        ctx.emit(&grant, vivo::RELATES, administrator);
    }
    for project in funded_projects {
        ctx.emit(&grant, vivo::FUNDING_VEHICLE_FOR, project);
    }
    for work in supported_works {
        ctx.emit(&grant, vivo::SUPPORTED_INFORMATION_RESOURCE, work);
    }
    ctx.pools.grants.push(grant.clone());
    debug!(event = "grant_created", iri = %grant);
    Ok(grant)
}

pub fn equipment(
    ctx: &mut GenerationContext,
    manufacturer: &Iri,
    equipped: &[Iri],
) -> Result<Iri, GenerationError> {
    let equipment = ctx.mint(EntityKind::Equipment)?;
    ctx.emit_type(&equipment, vivo::EQUIPMENT);
    let (title_length, description_length) = ctx.text_lengths();
    ctx.emit_localized(&equipment, rdfs::LABEL, title_length);
    ctx.emit_localized(&equipment, vivo::DESCRIPTION, description_length);
    ctx.emit(&equipment, obo::MANUFACTURER, manufacturer);
    for unit in equipped {
        ctx.emit(&equipment, vivo::EQUIPMENT_FOR, unit);
    }
    ctx.pools.equipment.push(equipment.clone());
    debug!(event = "equipment_created", iri = %equipment);
    Ok(equipment)
}
