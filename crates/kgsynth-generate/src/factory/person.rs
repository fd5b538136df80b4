use rand::Rng;
use tracing::debug;

use kgsynth_core::vocab::{obo, owl, rdfs, vcard, vivo};
use kgsynth_core::{Iri, Literal};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::{attach_concepts, digits, temporal, vcard_url};
use crate::ids::EntityKind;
use crate::sampling::pick;

const PLACEHOLDER_PAGE: &str = "http://www.google.com";

/// Name parts drawn for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub given: String,
    /// Single capital initial followed by a period.
    pub additional: String,
    pub family: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {} {}", self.given, self.additional, self.family)
    }

    /// `initials + six digits @ authority`, lowercased.
    pub fn email(&self, number: u32, authority: &str) -> String {
        let initials: String = [&self.given, &self.additional, &self.family]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect();
        format!("{initials}{number}@{authority}").to_lowercase()
    }
}

pub(crate) fn draw_name(ctx: &mut GenerationContext) -> Result<PersonName, GenerationError> {
    let given = pick(&ctx.config.vocabulary.first_names, "first names", &mut ctx.rng)?.clone();
    let initial = char::from(b'A' + ctx.rng.random_range(0..26u8));
    let family = pick(&ctx.config.vocabulary.last_names, "last names", &mut ctx.rng)?.clone();
    Ok(PersonName {
        given,
        additional: format!("{initial}."),
        family,
    })
}

/// Faculty member affiliated with `unit`, with position, identifiers and vcard.
pub fn person(ctx: &mut GenerationContext, unit: &Iri) -> Result<Iri, GenerationError> {
    let name = draw_name(ctx)?;
    let title = pick(&ctx.config.vocabulary.titles, "titles", &mut ctx.rng)?.clone();
    let title = ctx.primary(title);

    let person = ctx.mint(EntityKind::Person)?;
    ctx.emit_type(&person, vivo::FACULTY_MEMBER);
    ctx.emit_in_every_language(&person, rdfs::LABEL, &name.full());
    let overview_length = ctx.config.content.description_length;
    ctx.emit_localized(&person, vivo::OVERVIEW, overview_length);

    for predicate in [vivo::RESEARCHER_ID, vivo::SCOPUS_ID, vivo::ERA_COMMONS_ID] {
        let id = digits(ctx, 1_000_000, 9_999_999);
        ctx.emit(&person, predicate, Literal::string(id));
    }

    let orcid = ctx.ids.mint_orcid(&mut ctx.rng);
    ctx.emit(&person, vivo::ORCID_ID, &orcid);
    ctx.emit_type(&orcid, owl::THING);

    attach_concepts(ctx, &person, vivo::HAS_RESEARCH_AREA)?;

    let position = ctx.mint(EntityKind::Position)?;
    ctx.emit_type(&position, vivo::FACULTY_POSITION);
    ctx.emit(&position, rdfs::LABEL, title.clone());
    ctx.emit(&position, vivo::RELATES, &person);
    ctx.emit(&position, vivo::RELATES, unit);
    let tenure = temporal::open_interval_from_random_year(ctx)?;
    ctx.emit(&position, vivo::DATE_TIME_INTERVAL_PROP, tenure);

    contact_card(ctx, &person, &name, title)?;

    ctx.pools.people.push(person.clone());
    debug!(event = "person_created", iri = %person, people = ctx.pools.people.len());
    Ok(person)
}

fn contact_card(
    ctx: &mut GenerationContext,
    person: &Iri,
    name: &PersonName,
    title: Literal,
) -> Result<(), GenerationError> {
    let card = ctx.mint(EntityKind::Vcard)?;
    ctx.emit(person, obo::HAS_CONTACT_INFO, &card);
    ctx.emit_type(&card, vcard::INDIVIDUAL);

    let name_entry = ctx.mint(EntityKind::VcardName)?;
    ctx.emit(&card, vcard::HAS_NAME, &name_entry);
    ctx.emit_type(&name_entry, vcard::NAME);
    for (predicate, part) in [
        (vcard::GIVEN_NAME, &name.given),
        (vcard::ADDITIONAL_NAME, &name.additional),
        (vcard::FAMILY_NAME, &name.family),
    ] {
        let part = ctx.primary(part.as_str());
        ctx.emit(&name_entry, predicate, part);
    }

    let title_entry = ctx.mint(EntityKind::VcardTitle)?;
    ctx.emit(&card, vcard::HAS_TITLE, &title_entry);
    ctx.emit_type(&title_entry, vcard::TITLE);
    ctx.emit(&title_entry, vcard::TITLE_PROP, title);

    vcard_url(ctx, &card, 1, "Home Page", PLACEHOLDER_PAGE)?;
    vcard_url(ctx, &card, 2, "Google Scholar", PLACEHOLDER_PAGE)?;

    let email_entry = ctx.mint(EntityKind::VcardEmail)?;
    ctx.emit(&card, vcard::HAS_EMAIL, &email_entry);
    ctx.emit_type(&email_entry, vcard::EMAIL);
    ctx.emit_type(&email_entry, vcard::WORK);
    let number = ctx.rng.random_range(100_000..=999_999);
    let email = name.email(number, &ctx.authority);
    ctx.emit(&email_entry, vcard::EMAIL_PROP, Literal::string(email));

    let phone_entry = ctx.mint(EntityKind::VcardTelephone)?;
    ctx.emit(&card, vcard::HAS_TELEPHONE, &phone_entry);
    ctx.emit_type(&phone_entry, vcard::TELEPHONE);
    let phone = format!(
        "+{} {}",
        digits(ctx, 1, 249),
        digits(ctx, 100_000_000, 999_999_999)
    );
    ctx.emit(&phone_entry, vcard::TELEPHONE_PROP, Literal::string(phone));
    Ok(())
}

#[cfg(test)]
mod tests {
    use kgsynth_core::{FactPattern, Term};

    use super::*;
    use crate::fixtures::tiny_context;

    fn objects(ctx: &GenerationContext, subject: &Iri, predicate: &str) -> Vec<Term> {
        let predicate = Iri::new(predicate);
        ctx.store()
            .find(FactPattern::new(Some(subject), Some(&predicate), None))
            .expect("find")
    }

    #[test]
    fn email_uses_initials_digits_and_authority() {
        let name = PersonName {
            given: "Ada".to_string(),
            additional: "B.".to_string(),
            family: "Lovelace".to_string(),
        };
        assert_eq!(name.full(), "Ada B. Lovelace");
        assert_eq!(
            name.email(123456, "vivo.example.edu"),
            "abl123456@vivo.example.edu"
        );
    }

    #[test]
    fn person_has_position_orcid_and_contact_card() {
        let mut ctx = tiny_context(21);
        let department = Iri::new("http://vivo.example.edu/individual/department1234567");
        let person = person(&mut ctx, &department).expect("person");

        assert!(ctx.store().has_type(&person, vivo::FACULTY_MEMBER));
        assert_eq!(objects(&ctx, &person, rdfs::LABEL).len(), 2);
        assert_eq!(objects(&ctx, &person, vivo::OVERVIEW).len(), 2);
        assert_eq!(objects(&ctx, &person, vivo::SCOPUS_ID).len(), 1);

        let orcid = objects(&ctx, &person, vivo::ORCID_ID);
        let orcid = orcid[0].as_iri().expect("orcid iri");
        assert!(orcid.as_str().starts_with("https://orcid.org/"));
        assert!(ctx.store().has_type(orcid, owl::THING));

        let relates = Iri::new(vivo::RELATES);
        let person_term = Term::Iri(person.clone());
        let positions = ctx
            .store()
            .find(FactPattern::new(None, Some(&relates), Some(&person_term)))
            .expect("positions");
        assert_eq!(positions.len(), 1);
        let position = positions[0].as_iri().expect("position");
        assert!(ctx.store().has_type(position, vivo::FACULTY_POSITION));
        assert!(objects(&ctx, position, vivo::RELATES).contains(&Term::Iri(department)));

        let cards = objects(&ctx, &person, obo::HAS_CONTACT_INFO);
        let card = cards[0].as_iri().expect("card");
        assert_eq!(objects(&ctx, card, vcard::HAS_URL).len(), 2);
        let emails = objects(&ctx, card, vcard::HAS_EMAIL);
        let email = objects(&ctx, emails[0].as_iri().expect("email"), vcard::EMAIL_PROP);
        let address = &email[0].as_literal().expect("literal").lexical;
        assert!(address.ends_with("@vivo.example.edu"));
        assert_eq!(address, &address.to_lowercase());
    }

    #[test]
    fn person_is_recorded_in_people_pool() {
        let mut ctx = tiny_context(1);
        let unit = Iri::new("http://vivo.example.edu/individual/department7654321");
        let first = person(&mut ctx, &unit).expect("person");
        let second = person(&mut ctx, &unit).expect("person");
        assert_eq!(ctx.pools().people, vec![first, second]);
        assert!(ctx.pools().authors().is_empty());
    }
}
