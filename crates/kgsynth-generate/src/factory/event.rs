use tracing::debug;

use kgsynth_core::Iri;
use kgsynth_core::vocab::{obo, rdfs, vivo};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::temporal;
use crate::ids::EntityKind;

/// Conference made of previously created sub-events.
///
/// Links both ways: the conference has each event as a part, and each event
/// is part of the conference.
pub fn conference(ctx: &mut GenerationContext, events: &[Iri]) -> Result<Iri, GenerationError> {
    let conference = ctx.mint(EntityKind::Conference)?;
    ctx.emit_type(&conference, vivo::CONFERENCE);
    let (title_length, description_length) = ctx.text_lengths();
    ctx.emit_localized(&conference, rdfs::LABEL, title_length);
    let running = temporal::open_interval_from_random_year(ctx)?;
    ctx.emit(&conference, vivo::DATE_TIME_INTERVAL_PROP, running);
    ctx.emit_localized(&conference, vivo::DESCRIPTION, description_length);
    for event in events {
        ctx.emit(&conference, obo::HAS_PART, event);
    }
    for event in events {
        ctx.emit(event, obo::PART_OF, &conference);
    }
    ctx.pools.conferences.push(conference.clone());
    debug!(event = "conference_created", iri = %conference, sub_events = events.len());
    Ok(conference)
}

pub fn invited_talk(
    ctx: &mut GenerationContext,
    participants: &[Iri],
) -> Result<Iri, GenerationError> {
    let talk = attended_event(ctx, EntityKind::InvitedTalk, vivo::INVITED_TALK, participants)?;
    ctx.pools.events.push(talk.clone());
    debug!(event = "invited_talk_created", iri = %talk);
    Ok(talk)
}

pub fn presentation(
    ctx: &mut GenerationContext,
    participants: &[Iri],
) -> Result<Iri, GenerationError> {
    let presentation =
        attended_event(ctx, EntityKind::Presentation, vivo::PRESENTATION, participants)?;
    ctx.pools.events.push(presentation.clone());
    debug!(event = "presentation_created", iri = %presentation);
    Ok(presentation)
}

pub fn course(ctx: &mut GenerationContext, participants: &[Iri]) -> Result<Iri, GenerationError> {
    let course = attended_event(ctx, EntityKind::Course, vivo::COURSE, participants)?;
    ctx.pools.courses.push(course.clone());
    debug!(event = "course_created", iri = %course);
    Ok(course)
}

fn attended_event(
    ctx: &mut GenerationContext,
    kind: EntityKind,
    class: &str,
    participants: &[Iri],
) -> Result<Iri, GenerationError> {
    let event = ctx.mint(kind)?;
    ctx.emit_type(&event, class);
    let (title_length, description_length) = ctx.text_lengths();
    ctx.emit_localized(&event, rdfs::LABEL, title_length);
    ctx.emit_localized(&event, vivo::DESCRIPTION, description_length);
    for participant in participants {
        ctx.emit(&event, obo::HAS_PARTICIPANT, participant);
    }
    Ok(event)
}

#[cfg(test)]
mod tests {
    use kgsynth_core::{FactPattern, Term};

    use super::*;
    use crate::fixtures::tiny_context;

    #[test]
    fn conference_and_sub_events_point_at_each_other() {
        let mut ctx = tiny_context(31);
        let speaker = Iri::new("http://vivo.example.edu/individual/person1234567");
        let talk = invited_talk(&mut ctx, &[speaker.clone()]).expect("talk");
        let slot = presentation(&mut ctx, &[speaker]).expect("presentation");
        let conference = conference(&mut ctx, &[talk.clone(), slot.clone()]).expect("conference");

        let has_part = Iri::new(obo::HAS_PART);
        let parts = ctx
            .store()
            .find(FactPattern::new(Some(&conference), Some(&has_part), None))
            .expect("parts");
        assert_eq!(parts, vec![Term::Iri(talk.clone()), Term::Iri(slot.clone())]);

        let part_of = Iri::new(obo::PART_OF);
        for event in [&talk, &slot] {
            let parents = ctx
                .store()
                .find(FactPattern::new(Some(event), Some(&part_of), None))
                .expect("parents");
            assert_eq!(parents, vec![Term::Iri(conference.clone())]);
        }
        assert!(ctx.store().has_type(&slot, vivo::PRESENTATION));
        assert!(!ctx.store().has_type(&slot, vivo::INVITED_TALK));
    }

    #[test]
    fn course_is_typed_as_course() {
        let mut ctx = tiny_context(31);
        let course = course(&mut ctx, &[]).expect("course");
        assert!(ctx.store().has_type(&course, vivo::COURSE));
        assert_eq!(ctx.pools().courses, vec![course]);
    }
}
