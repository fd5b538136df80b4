use std::time::Instant;

use tracing::{debug, info};

use kgsynth_config::GeneratorConfig;
use kgsynth_core::vocab::{rdf, vivo};
use kgsynth_core::{FactStore, Iri};

use crate::builder::GraphBuilder;
use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationSummary};
use crate::sampling::{pick, subset, uniform_int};

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerationResult {
    pub store: FactStore,
    pub summary: GenerationSummary,
    /// Seed actually used; reproduces the run when fed back in.
    pub seed: u64,
}

/// Drives the four generation phases in order.
///
/// Reference pools come first, then the organizational hierarchy with its
/// people and works, then cross-cutting activities and events (which sample
/// from the finished people and works), and finally the co-author pass.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, config: &GeneratorConfig) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let seed = self
            .options
            .seed
            .or(config.seed)
            .unwrap_or_else(rand::random);
        let mut ctx = GenerationContext::new(config.clone(), seed)?;

        info!(
            event = "generation_started",
            seed,
            namespace = %config.site.namespace,
            languages = config.content.languages.len()
        );

        create_reference_pools(&mut ctx, config)?;
        info!(
            event = "reference_pools_created",
            concepts = ctx.pools.concepts.len(),
            journals = ctx.pools.journals.len()
        );

        create_hierarchy(&mut ctx, config)?;
        info!(
            event = "hierarchy_created",
            colleges = ctx.pools.colleges.len(),
            departments = ctx.pools.departments.len(),
            people = ctx.pools.people.len(),
            works = ctx.pools.works.len()
        );

        create_activities(&mut ctx, config)?;
        create_events(&mut ctx, config)?;
        info!(
            event = "activities_created",
            projects = ctx.pools.projects.len(),
            grants = ctx.pools.grants.len(),
            equipment = ctx.pools.equipment.len(),
            conferences = ctx.pools.conferences.len(),
            courses = ctx.pools.courses.len()
        );

        let coauthorships = assign_all_coauthors(&mut ctx)?;
        info!(
            event = "coauthors_assigned",
            works = ctx.pools.works.len(),
            authorships_added = coauthorships
        );

        let summary = summarize(&ctx, start);
        info!(
            event = "generation_completed",
            facts = summary.facts,
            duration_ms = summary.duration_ms
        );

        Ok(GenerationResult {
            store: ctx.into_store(),
            summary,
            seed,
        })
    }
}

fn create_reference_pools(
    ctx: &mut GenerationContext,
    config: &GeneratorConfig,
) -> Result<(), GenerationError> {
    for label in &config.vocabulary.concepts {
        ctx.add_concept(label)?;
    }
    for label in &config.vocabulary.journals {
        ctx.add_journal(label)?;
    }
    Ok(())
}

fn create_hierarchy(
    ctx: &mut GenerationContext,
    config: &GeneratorConfig,
) -> Result<(), GenerationError> {
    let shape = &config.shape;
    let university = ctx.add_university(&config.site.university_name)?;

    for _ in 0..ctx.draw(shape.colleges_per_university) {
        let college = ctx.add_college(&university)?;
        for _ in 0..ctx.draw(shape.departments_per_college) {
            let department = ctx.add_department(&college)?;
            for _ in 0..ctx.draw(shape.faculty_per_department) {
                let person = ctx.add_person(&department)?;
                for _ in 0..works_for_person(ctx, config) {
                    ctx.add_work(&person)?;
                }
            }
        }
    }
    Ok(())
}

/// Heavy-tailed productivity: a capped two-zeta sum `a` widens the uniform
/// range above the configured minimum to `[min, min + a - 1]`.
fn works_for_person(ctx: &mut GenerationContext, config: &GeneratorConfig) -> u32 {
    let range = config.shape.works_per_faculty;
    let spread = ctx.productivity.sample(range.max, &mut ctx.rng);
    if spread == 0 {
        return range.min;
    }
    uniform_int(range.min, range.min.saturating_add(spread - 1), &mut ctx.rng)
}

fn create_activities(
    ctx: &mut GenerationContext,
    config: &GeneratorConfig,
) -> Result<(), GenerationError> {
    let activities = &config.activities;

    for _ in 0..activities.projects.count {
        let participants = ctx.draw(activities.projects.participants) as usize;
        let outputs = ctx.draw(activities.projects.produced_works) as usize;
        let participants = subset(&ctx.pools.people, participants, "people", &mut ctx.rng)?;
        let outputs = subset(&ctx.pools.works, outputs, "works", &mut ctx.rng)?;
        ctx.add_project(&participants, &outputs)?;
    }

    for _ in 0..activities.grants.count {
        let administrators = ctx.draw(activities.grants.administering_colleges) as usize;
        let funded = ctx.draw(activities.grants.funded_projects) as usize;
        let supported = ctx.draw(activities.grants.supported_works) as usize;
        let administrators =
            subset(&ctx.pools.colleges, administrators, "colleges", &mut ctx.rng)?;
        let funded = subset(&ctx.pools.projects, funded, "projects", &mut ctx.rng)?;
        let supported = subset(&ctx.pools.works, supported, "works", &mut ctx.rng)?;
        ctx.add_grant(&administrators, &funded, &supported)?;
    }

    for _ in 0..activities.equipment.count {
        let equipped = ctx.draw(activities.equipment.equipped_colleges) as usize;
        let manufacturer = pick(&ctx.pools.colleges, "colleges", &mut ctx.rng)?.clone();
        let equipped = subset(&ctx.pools.colleges, equipped, "colleges", &mut ctx.rng)?;
        ctx.add_equipment(&manufacturer, &equipped)?;
    }
    Ok(())
}

fn create_events(
    ctx: &mut GenerationContext,
    config: &GeneratorConfig,
) -> Result<(), GenerationError> {
    let events = &config.events;

    for _ in 0..events.conferences {
        let mut sub_events = Vec::new();
        for _ in 0..events.invited_talks_per_conference {
            let participants = event_participants(ctx, config)?;
            sub_events.push(ctx.add_invited_talk(&participants)?);
        }
        for _ in 0..events.presentations_per_conference {
            let participants = event_participants(ctx, config)?;
            sub_events.push(ctx.add_presentation(&participants)?);
        }
        ctx.add_conference(&sub_events)?;
    }

    for _ in 0..events.courses {
        let participants = event_participants(ctx, config)?;
        ctx.add_course(&participants)?;
    }
    Ok(())
}

fn event_participants(
    ctx: &mut GenerationContext,
    config: &GeneratorConfig,
) -> Result<Vec<Iri>, GenerationError> {
    let count = ctx.draw(config.events.participants) as usize;
    subset(&ctx.pools.people, count, "people", &mut ctx.rng)
}

fn assign_all_coauthors(ctx: &mut GenerationContext) -> Result<usize, GenerationError> {
    let works = ctx.pools.works.clone();
    let mut added = 0;
    for (index, work) in works.iter().enumerate() {
        added += ctx.add_coauthors(work)?;
        if (index + 1) % 100 == 0 {
            debug!(event = "coauthor_progress", works_done = index + 1);
        }
    }
    Ok(added)
}

fn summarize(ctx: &GenerationContext, start: Instant) -> GenerationSummary {
    let pools = &ctx.pools;
    let store = ctx.store();
    let authorships = store
        .iter()
        .filter(|fact| {
            fact.predicate.as_str() == rdf::TYPE
                && fact
                    .object
                    .as_iri()
                    .is_some_and(|class| class.as_str() == vivo::AUTHORSHIP)
        })
        .count();

    GenerationSummary {
        authority: ctx.authority().to_string(),
        universities: 1,
        colleges: pools.colleges.len() as u64,
        departments: pools.departments.len() as u64,
        people: pools.people.len() as u64,
        works: pools.works.len() as u64,
        projects: pools.projects.len() as u64,
        grants: pools.grants.len() as u64,
        equipment: pools.equipment.len() as u64,
        conferences: pools.conferences.len() as u64,
        events: pools.events.len() as u64,
        courses: pools.courses.len() as u64,
        authorships: authorships as u64,
        facts: store.len() as u64,
        language: ctx.config().site.lang.clone(),
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
