use tracing::debug;

use kgsynth_core::vocab::{bibo, obo, rdfs, vcard, vivo};
use kgsynth_core::{Iri, Literal};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::factory::{attach_concepts, digits, temporal, vcard_url};
use crate::ids::EntityKind;
use crate::sampling::pick;

const FULL_TEXT_URL: &str = "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC5937161/";

/// Work authored by `author`, with its rank-1 authorship.
pub fn work(ctx: &mut GenerationContext, author: &Iri) -> Result<Iri, GenerationError> {
    ctx.pools.record_author(author);

    let kind = *ctx.work_types.sample(&ctx.work_kinds, &mut ctx.rng)?;
    let work = ctx.mint(EntityKind::Work)?;
    ctx.emit_type(&work, kind.iri());

    let title_length = ctx.config.content.title_length;
    ctx.emit_localized(&work, rdfs::LABEL, title_length);

    let doi = format!(
        "https://doi.org/10.{}/{}",
        digits(ctx, 1000, 9999),
        digits(ctx, 100_000, 999_999)
    );
    ctx.emit(&work, bibo::DOI, Literal::any_uri(doi));

    let abstract_length = ctx.config.content.description_length;
    ctx.emit_localized(&work, bibo::ABSTRACT, abstract_length);

    let venue = pick(&ctx.pools.journals, "journals", &mut ctx.rng)?.clone();
    ctx.emit(&work, vivo::HAS_PUBLICATION_VENUE, venue);

    let year = ctx.year();
    let published = temporal::date(ctx, year)?;
    ctx.emit(&work, vivo::DATE_TIME_VALUE_PROP, published);

    let shape = &ctx.config.works;
    let (volume, issue, start_page, page_span) =
        (shape.volume, shape.issue, shape.start_page, shape.page_span);
    let volume = ctx.draw(volume);
    let issue = ctx.draw(issue);
    let start_page = ctx.draw(start_page);
    let end_page = start_page + ctx.draw(page_span);
    ctx.emit(&work, bibo::VOLUME, Literal::string(volume.to_string()));
    ctx.emit(&work, vivo::ISSUE, Literal::string(issue.to_string()));
    ctx.emit(&work, bibo::PAGE_START, Literal::string(start_page.to_string()));
    ctx.emit(&work, bibo::PAGE_END, Literal::string(end_page.to_string()));

    authorship(ctx, &work, author, 1)?;

    attach_concepts(ctx, &work, vivo::HAS_SUBJECT_AREA)?;

    let card = ctx.mint(EntityKind::Vcard)?;
    ctx.emit(&work, obo::HAS_CONTACT_INFO, &card);
    ctx.emit_type(&card, vcard::INDIVIDUAL);
    vcard_url(ctx, &card, 1, "Full Text", FULL_TEXT_URL)?;

    ctx.pools.works.push(work.clone());
    debug!(event = "work_created", iri = %work, kind = ?kind, works = ctx.pools.works.len());
    Ok(work)
}

/// Join entity placing `author` at `rank` on `work`.
pub fn authorship(
    ctx: &mut GenerationContext,
    work: &Iri,
    author: &Iri,
    rank: i64,
) -> Result<Iri, GenerationError> {
    let authorship = ctx.mint(EntityKind::Authorship)?;
    ctx.emit_type(&authorship, vivo::AUTHORSHIP);
    ctx.emit(&authorship, vivo::RELATES, author);
    ctx.emit(&authorship, vivo::RELATES, work);
    ctx.emit(&authorship, vivo::RANK, Literal::integer(rank));
    Ok(authorship)
}

#[cfg(test)]
mod tests {
    use kgsynth_core::{FactPattern, Term, WorkType};

    use super::*;
    use crate::factory::org;
    use crate::fixtures::tiny_context;

    fn object(ctx: &GenerationContext, subject: &Iri, predicate: &str) -> Term {
        let predicate = Iri::new(predicate);
        let mut found = ctx
            .store()
            .find(FactPattern::new(Some(subject), Some(&predicate), None))
            .expect("find");
        assert_eq!(found.len(), 1, "expected one {predicate}");
        found.remove(0)
    }

    #[test]
    fn work_has_bibliographic_facts_and_rank_one_authorship() {
        let mut ctx = tiny_context(13);
        org::journal(&mut ctx, "Annals").expect("journal");
        let author = Iri::new("http://vivo.example.edu/individual/person1234567");
        let work = work(&mut ctx, &author).expect("work");

        assert!(ctx.store().has_type(&work, WorkType::AcademicArticle.iri()));

        let doi = object(&ctx, &work, bibo::DOI);
        assert!(doi.as_literal().expect("doi").lexical.starts_with("https://doi.org/10."));

        let start: i64 = object(&ctx, &work, bibo::PAGE_START)
            .as_literal()
            .expect("start")
            .lexical
            .parse()
            .expect("number");
        let end: i64 = object(&ctx, &work, bibo::PAGE_END)
            .as_literal()
            .expect("end")
            .lexical
            .parse()
            .expect("number");
        assert!((1..=50).contains(&(end - start)));

        let relates = Iri::new(vivo::RELATES);
        let work_term = Term::Iri(work.clone());
        let authorships = ctx
            .store()
            .find(FactPattern::new(None, Some(&relates), Some(&work_term)))
            .expect("authorships");
        assert_eq!(authorships.len(), 1);
        let authorship = authorships[0].as_iri().expect("authorship");
        let rank = object(&ctx, authorship, vivo::RANK);
        assert_eq!(rank.as_literal().and_then(Literal::as_i64), Some(1));

        assert_eq!(ctx.pools().authors(), &[author]);
        assert_eq!(ctx.pools().works, vec![work]);
    }

    #[test]
    fn work_without_journals_is_an_empty_pool_error() {
        let mut ctx = tiny_context(13);
        let author = Iri::new("http://vivo.example.edu/individual/person1234567");
        let result = work(&mut ctx, &author);
        assert!(matches!(
            result,
            Err(GenerationError::EmptyPool { pool: "journals" })
        ));
    }
}
