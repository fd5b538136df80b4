use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use kgsynth_core::vocab::{rdf, vivo};
use kgsynth_core::{FactStore, Term, WorkType};

/// Metrics contract version for graph evaluation.
pub const METRICS_VERSION: &str = "0.1";

/// Top-level metrics report for a generated fact set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMetrics {
    pub metrics_version: String,
    pub facts: usize,
    pub subjects: usize,
    pub counts: EntityCounts,
    /// Instances per asserted class IRI.
    pub types: BTreeMap<String, usize>,
    pub literals: LiteralCounts,
}

/// Instance counts for the classes the generator centres on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCounts {
    pub faculty: usize,
    pub works: usize,
    pub authorships: usize,
}

/// Literal objects split by tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiteralCounts {
    pub total: usize,
    /// Language-tagged literals per language.
    pub languages: BTreeMap<String, usize>,
    pub typed: usize,
}

/// Collect metrics for a fact set.
pub fn collect_graph_metrics(store: &FactStore) -> GraphMetrics {
    let mut subjects = HashSet::new();
    let mut types: BTreeMap<String, usize> = BTreeMap::new();
    let mut literals = LiteralCounts::default();

    for fact in store {
        subjects.insert(&fact.subject);
        match &fact.object {
            Term::Iri(class) if fact.predicate.as_str() == rdf::TYPE => {
                *types.entry(class.to_string()).or_default() += 1;
            }
            Term::Iri(_) => {}
            Term::Literal(literal) => {
                literals.total += 1;
                match literal.language() {
                    Some(language) => {
                        *literals.languages.entry(language.to_string()).or_default() += 1;
                    }
                    None => literals.typed += 1,
                }
            }
        }
    }

    let count = |class: &str| types.get(class).copied().unwrap_or(0);
    let counts = EntityCounts {
        faculty: count(vivo::FACULTY_MEMBER),
        works: WorkType::ALL.iter().map(|kind| count(kind.iri())).sum(),
        authorships: count(vivo::AUTHORSHIP),
    };

    GraphMetrics {
        metrics_version: METRICS_VERSION.to_string(),
        facts: store.len(),
        subjects: subjects.len(),
        counts,
        types,
        literals,
    }
}
