use std::collections::{BTreeMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kgsynth_config::{CountRange, GeneratorConfig, site_authority, validate_config_semantics};
use kgsynth_core::vocab::rdf;
use kgsynth_core::{FactStore, Iri, Literal, Term, WorkType};

use crate::content::ContentSynthesizer;
use crate::errors::GenerationError;
use crate::ids::{EntityKind, IdentifierAllocator};
use crate::sampling::{CumulativeTable, HeavyTailedCount, PoissonCount, uniform_int};

/// Identifier pools accumulated while the graph is built.
///
/// Later phases draw their relation targets from these; nothing is removed.
#[derive(Debug, Default)]
pub struct EntityPools {
    pub concepts: Vec<Iri>,
    pub journals: Vec<Iri>,
    pub colleges: Vec<Iri>,
    pub departments: Vec<Iri>,
    pub people: Vec<Iri>,
    pub works: Vec<Iri>,
    pub projects: Vec<Iri>,
    pub grants: Vec<Iri>,
    pub equipment: Vec<Iri>,
    pub conferences: Vec<Iri>,
    pub events: Vec<Iri>,
    pub courses: Vec<Iri>,
    authors: Vec<Iri>,
    author_set: HashSet<Iri>,
    coauthored: HashSet<Iri>,
}

impl EntityPools {
    /// Remember a person who owns at least one work; first sighting wins the order.
    pub fn record_author(&mut self, person: &Iri) {
        if self.author_set.insert(person.clone()) {
            self.authors.push(person.clone());
        }
    }

    pub fn authors(&self) -> &[Iri] {
        &self.authors
    }

    pub fn is_author(&self, person: &Iri) -> bool {
        self.author_set.contains(person)
    }

    /// Flip `work` to the co-authored state; false when it already was.
    pub(crate) fn mark_coauthored(&mut self, work: &Iri) -> bool {
        self.coauthored.insert(work.clone())
    }
}

/// Everything a generation run reads and mutates.
///
/// Holds the configuration, the seeded random source, the lookup tables
/// derived from the configuration, the identifier pools and the fact store.
/// One context drives exactly one run.
#[derive(Debug)]
pub struct GenerationContext {
    pub(crate) config: GeneratorConfig,
    pub(crate) seed: u64,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) ids: IdentifierAllocator,
    pub(crate) content: ContentSynthesizer,
    pub(crate) work_types: CumulativeTable,
    pub(crate) work_kinds: Vec<WorkType>,
    pub(crate) productivity: HeavyTailedCount,
    pub(crate) coauthor_count: PoissonCount,
    pub(crate) authority: String,
    pub(crate) pools: EntityPools,
    pub(crate) store: FactStore,
}

impl GenerationContext {
    /// Build the lookup tables; every configuration problem surfaces here,
    /// before a single fact exists.
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self, GenerationError> {
        let report = validate_config_semantics(&config);
        if !report.is_ok() {
            let messages: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
            return Err(GenerationError::InvalidConfig(messages.join("; ")));
        }

        let authority = site_authority(&config.site.namespace).ok_or_else(|| {
            GenerationError::InvalidConfig(format!(
                "namespace '{}' has no host",
                config.site.namespace
            ))
        })?;

        let weights: Vec<f64> = config.works.types.iter().map(|entry| entry.weight).collect();
        let work_kinds = config.works.types.iter().map(|entry| entry.kind).collect();
        let work_types = CumulativeTable::from_weights(&weights)?;
        let productivity = HeavyTailedCount::new(
            config.shape.productivity.shape_a,
            config.shape.productivity.shape_b,
        )?;
        let coauthor_count = PoissonCount::new(config.coauthors.mean)?;
        let content = ContentSynthesizer::new(
            &config.content.languages,
            &config.content.corpus,
            config.content.legacy_first_char_drop,
        )?;
        let ids = IdentifierAllocator::new(config.site.namespace.clone());

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            ids,
            content,
            work_types,
            work_kinds,
            productivity,
            coauthor_count,
            authority,
            pools: EntityPools::default(),
            store: FactStore::new(),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Host part of the namespace, used for email addresses and the summary.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn pools(&self) -> &EntityPools {
        &self.pools
    }

    pub fn store(&self) -> &FactStore {
        &self.store
    }

    pub fn into_store(self) -> FactStore {
        self.store
    }

    pub(crate) fn mint(&mut self, kind: EntityKind) -> Result<Iri, GenerationError> {
        self.ids.mint(kind, &mut self.rng)
    }

    pub(crate) fn emit(&mut self, subject: &Iri, predicate: &str, object: impl Into<Term>) {
        self.store.append(subject.clone(), Iri::new(predicate), object);
    }

    pub(crate) fn emit_type(&mut self, subject: &Iri, class: &str) {
        self.emit(subject, rdf::TYPE, Iri::new(class));
    }

    /// One synthesized literal per content language, all cut from the same offset.
    pub(crate) fn emit_localized(&mut self, subject: &Iri, predicate: &str, length: CountRange) {
        let texts = self.content.synthesize(length.min, length.max, &mut self.rng);
        for text in texts {
            self.emit(subject, predicate, Literal::lang(text.text, text.language));
        }
    }

    /// The same text once per content language.
    pub(crate) fn emit_in_every_language(&mut self, subject: &Iri, predicate: &str, text: &str) {
        let languages = self.config.content.languages.clone();
        for language in languages {
            self.emit(subject, predicate, Literal::lang(text, language));
        }
    }

    /// Literal tagged with the primary language.
    pub(crate) fn primary(&self, text: impl Into<String>) -> Literal {
        Literal::lang(text, self.config.site.lang.clone())
    }

    /// Translations at one shared index of a localized name list.
    pub(crate) fn localized_names(
        &mut self,
        names: fn(&GeneratorConfig) -> &BTreeMap<String, Vec<String>>,
        pool: &'static str,
    ) -> Result<Vec<Literal>, GenerationError> {
        let primary_len = self
            .config
            .localized(names(&self.config), &self.config.site.lang)
            .map_or(0, <[String]>::len);
        if primary_len == 0 {
            return Err(GenerationError::EmptyPool { pool });
        }
        let index = uniform_int(0, primary_len as u32 - 1, &mut self.rng) as usize;

        let config = &self.config;
        config
            .content
            .languages
            .iter()
            .map(|language| {
                config
                    .localized(names(config), language)
                    .and_then(|list| list.get(index))
                    .map(|name| Literal::lang(name.clone(), language.clone()))
                    .ok_or(GenerationError::EmptyPool { pool })
            })
            .collect()
    }

    /// Configured title and description length ranges.
    pub(crate) fn text_lengths(&self) -> (CountRange, CountRange) {
        let content = &self.config.content;
        (content.title_length, content.description_length)
    }

    pub(crate) fn draw(&mut self, range: CountRange) -> u32 {
        uniform_int(range.min, range.max, &mut self.rng)
    }

    pub(crate) fn year(&mut self) -> u32 {
        let years = self.config.shape.years;
        self.draw(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::tiny_config;

    #[test]
    fn context_extracts_authority() {
        let ctx = GenerationContext::new(tiny_config(), 3).expect("context");
        assert_eq!(ctx.authority(), "vivo.example.edu");
        assert_eq!(ctx.seed(), 3);
        assert!(ctx.store().is_empty());
    }

    #[test]
    fn degenerate_distribution_fails_before_any_fact() {
        let mut config = tiny_config();
        config.works.types[0].weight = 0.0;
        let result = GenerationContext::new(config, 1);
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn localized_names_share_one_index() {
        let mut ctx = GenerationContext::new(tiny_config(), 11).expect("context");
        for _ in 0..50 {
            let labels = ctx
                .localized_names(|config| &config.vocabulary.college_names, "college names")
                .expect("labels");
            assert_eq!(labels.len(), 2);
            let pair = (labels[0].lexical.as_str(), labels[1].lexical.as_str());
            assert!(pair == ("Arts", "Kunst") || pair == ("Science", "Wissenschaft"));
        }
    }

    #[test]
    fn missing_translation_falls_back_to_primary_list() {
        let mut ctx = GenerationContext::new(tiny_config(), 5).expect("context");
        let labels = ctx
            .localized_names(|config| &config.vocabulary.department_names, "department names")
            .expect("labels");
        assert_eq!(labels[0].lexical, "Physics");
        assert_eq!(labels[1].lexical, "Physics");
        assert_eq!(labels[1].language(), Some("de"));
    }

    #[test]
    fn author_pool_keeps_first_sighting_order() {
        let mut pools = EntityPools::default();
        let a = Iri::new("http://x/a");
        let b = Iri::new("http://x/b");
        pools.record_author(&a);
        pools.record_author(&b);
        pools.record_author(&a);
        assert_eq!(pools.authors(), &[a.clone(), b]);
        assert!(pools.is_author(&a));
    }
}
