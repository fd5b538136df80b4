//! Small in-memory configurations shared by unit tests.

use std::collections::BTreeMap;

use kgsynth_config::{
    ContentConfig, CountRange, GeneratorConfig, ShapeConfig, SiteConfig, VocabularyConfig,
    WorkConfig, WorkTypeWeight,
};
use kgsynth_core::WorkType;

use crate::context::GenerationContext;
use crate::factory::org;

/// Two content languages, one of everything, no works.
pub(crate) fn tiny_config() -> GeneratorConfig {
    let languages = vec!["en".to_string(), "de".to_string()];
    let corpus = languages
        .iter()
        .map(|lang| (lang.clone(), "lorem ipsum dolor sit amet ".repeat(80)))
        .collect();
    GeneratorConfig {
        seed: Some(1),
        site: SiteConfig {
            namespace: "http://vivo.example.edu/individual/".to_string(),
            university_name: "Example University".to_string(),
            lang: "en".to_string(),
        },
        content: ContentConfig {
            languages,
            corpus,
            title_length: CountRange::new(10, 40),
            description_length: CountRange::new(50, 120),
            legacy_first_char_drop: false,
        },
        vocabulary: VocabularyConfig {
            first_names: vec!["Ada".to_string()],
            last_names: vec!["Lovelace".to_string()],
            titles: vec!["Professor".to_string()],
            concepts: vec!["Topology".to_string()],
            journals: vec!["Annals".to_string()],
            college_names: BTreeMap::from([
                ("en".to_string(), vec!["Arts".to_string(), "Science".to_string()]),
                ("de".to_string(), vec!["Kunst".to_string(), "Wissenschaft".to_string()]),
            ]),
            department_names: BTreeMap::from([(
                "en".to_string(),
                vec!["Physics".to_string()],
            )]),
        },
        shape: ShapeConfig {
            colleges_per_university: CountRange::exactly(1),
            departments_per_college: CountRange::exactly(1),
            faculty_per_department: CountRange::exactly(1),
            works_per_faculty: CountRange::exactly(0),
            productivity: Default::default(),
            years: CountRange::new(1979, 2018),
        },
        works: WorkConfig {
            types: vec![WorkTypeWeight {
                kind: WorkType::AcademicArticle,
                weight: 1.0,
            }],
            volume: CountRange::new(1, 400),
            issue: CountRange::new(1, 48),
            start_page: CountRange::new(1, 500),
            page_span: CountRange::new(1, 50),
        },
        coauthors: Default::default(),
        activities: Default::default(),
        events: Default::default(),
    }
}

/// Context over [`tiny_config`] with the given seed and its concept pool minted.
///
/// Journals stay unminted so tests can exercise the empty venue pool.
pub(crate) fn tiny_context(seed: u64) -> GenerationContext {
    let mut ctx = GenerationContext::new(tiny_config(), seed).expect("tiny config is valid");
    let concepts = ctx.config().vocabulary.concepts.clone();
    for label in &concepts {
        org::concept(&mut ctx, label).expect("concept");
    }
    ctx
}
