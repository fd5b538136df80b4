use kgsynth_core::Iri;

use crate::coauthor;
use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::{activity, event, org, person, temporal, work};

/// Graph construction capabilities, one `add_*` operation per entity kind.
///
/// Every operation mints a fresh identifier, emits the entity's facts and
/// returns the identifier. Relation targets passed in must already exist.
pub trait GraphBuilder {
    fn add_concept(&mut self, label: &str) -> Result<Iri, GenerationError>;
    fn add_journal(&mut self, label: &str) -> Result<Iri, GenerationError>;
    fn add_university(&mut self, name: &str) -> Result<Iri, GenerationError>;
    fn add_college(&mut self, university: &Iri) -> Result<Iri, GenerationError>;
    fn add_department(&mut self, college: &Iri) -> Result<Iri, GenerationError>;
    fn add_person(&mut self, unit: &Iri) -> Result<Iri, GenerationError>;
    fn add_work(&mut self, author: &Iri) -> Result<Iri, GenerationError>;
    fn add_date(&mut self, year: u32) -> Result<Iri, GenerationError>;
    fn add_date_interval(
        &mut self,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Iri, GenerationError>;
    /// Co-author pass for one work; returns the number of authorships added.
    fn add_coauthors(&mut self, work: &Iri) -> Result<usize, GenerationError>;
    fn add_project(&mut self, participants: &[Iri], outputs: &[Iri]) -> Result<Iri, GenerationError>;
    fn add_grant(
        &mut self,
        administrators: &[Iri],
        funded_projects: &[Iri],
        supported_works: &[Iri],
    ) -> Result<Iri, GenerationError>;
    fn add_equipment(&mut self, manufacturer: &Iri, equipped: &[Iri])
    -> Result<Iri, GenerationError>;
    fn add_conference(&mut self, events: &[Iri]) -> Result<Iri, GenerationError>;
    fn add_invited_talk(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError>;
    fn add_presentation(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError>;
    fn add_course(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError>;
}

impl GraphBuilder for GenerationContext {
    fn add_concept(&mut self, label: &str) -> Result<Iri, GenerationError> {
        org::concept(self, label)
    }

    fn add_journal(&mut self, label: &str) -> Result<Iri, GenerationError> {
        org::journal(self, label)
    }

    fn add_university(&mut self, name: &str) -> Result<Iri, GenerationError> {
        org::university(self, name)
    }

    fn add_college(&mut self, university: &Iri) -> Result<Iri, GenerationError> {
        org::college(self, university)
    }

    fn add_department(&mut self, college: &Iri) -> Result<Iri, GenerationError> {
        org::department(self, college)
    }

    fn add_person(&mut self, unit: &Iri) -> Result<Iri, GenerationError> {
        person::person(self, unit)
    }

    fn add_work(&mut self, author: &Iri) -> Result<Iri, GenerationError> {
        work::work(self, author)
    }

    fn add_date(&mut self, year: u32) -> Result<Iri, GenerationError> {
        temporal::date(self, year)
    }

    fn add_date_interval(
        &mut self,
        start: Option<u32>,
        end: Option<u32>,
    ) -> Result<Iri, GenerationError> {
        temporal::interval(self, start, end)
    }

    fn add_coauthors(&mut self, work: &Iri) -> Result<usize, GenerationError> {
        coauthor::assign_coauthors(self, work)
    }

    fn add_project(&mut self, participants: &[Iri], outputs: &[Iri]) -> Result<Iri, GenerationError> {
        activity::project(self, participants, outputs)
    }

    fn add_grant(
        &mut self,
        administrators: &[Iri],
        funded_projects: &[Iri],
        supported_works: &[Iri],
    ) -> Result<Iri, GenerationError> {
        activity::grant(self, administrators, funded_projects, supported_works)
    }

    fn add_equipment(
        &mut self,
        manufacturer: &Iri,
        equipped: &[Iri],
    ) -> Result<Iri, GenerationError> {
        activity::equipment(self, manufacturer, equipped)
    }

    fn add_conference(&mut self, events: &[Iri]) -> Result<Iri, GenerationError> {
        event::conference(self, events)
    }

    fn add_invited_talk(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError> {
        event::invited_talk(self, participants)
    }

    fn add_presentation(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError> {
        event::presentation(self, participants)
    }

    fn add_course(&mut self, participants: &[Iri]) -> Result<Iri, GenerationError> {
        event::course(self, participants)
    }
}
