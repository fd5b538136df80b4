use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::term::{Fact, Iri, Term};

/// Triple pattern; `None` marks an unbound position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactPattern<'a> {
    pub subject: Option<&'a Iri>,
    pub predicate: Option<&'a Iri>,
    pub object: Option<&'a Term>,
}

impl<'a> FactPattern<'a> {
    pub fn new(
        subject: Option<&'a Iri>,
        predicate: Option<&'a Iri>,
        object: Option<&'a Term>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    fn unbound_count(&self) -> usize {
        [
            self.subject.is_none(),
            self.predicate.is_none(),
            self.object.is_none(),
        ]
        .into_iter()
        .filter(|unbound| *unbound)
        .count()
    }

    fn matches(&self, fact: &Fact) -> bool {
        self.subject.is_none_or(|subject| *subject == fact.subject)
            && self
                .predicate
                .is_none_or(|predicate| *predicate == fact.predicate)
            && self.object.is_none_or(|object| *object == fact.object)
    }
}

/// Append-only fact collection.
///
/// Facts keep insertion order so serialization is stable for a given seed.
/// Subject and IRI-object indexes back [`FactStore::find`]; nothing is ever
/// updated or removed.
#[derive(Debug, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
    by_subject: HashMap<Iri, Vec<usize>>,
    by_object: HashMap<Iri, Vec<usize>>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, subject: Iri, predicate: Iri, object: impl Into<Term>) {
        self.push(Fact::new(subject, predicate, object));
    }

    pub fn push(&mut self, fact: Fact) {
        let index = self.facts.len();
        self.by_subject
            .entry(fact.subject.clone())
            .or_default()
            .push(index);
        if let Term::Iri(object) = &fact.object {
            self.by_object.entry(object.clone()).or_default().push(index);
        }
        self.facts.push(fact);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Every fact matching `pattern`, in insertion order.
    pub fn matching<'s>(
        &'s self,
        pattern: FactPattern<'s>,
    ) -> Box<dyn Iterator<Item = &'s Fact> + 's> {
        let candidates = match (pattern.subject, pattern.object) {
            (Some(subject), _) => Some(self.by_subject.get(subject)),
            (None, Some(Term::Iri(object))) => Some(self.by_object.get(object)),
            _ => None,
        };

        match candidates {
            Some(indexes) => Box::new(
                indexes
                    .into_iter()
                    .flatten()
                    .map(|index| &self.facts[*index])
                    .filter(move |fact| pattern.matches(fact)),
            ),
            None => Box::new(self.facts.iter().filter(move |fact| pattern.matches(fact))),
        }
    }

    /// Bindings of the single unbound position of `pattern`.
    pub fn find(&self, pattern: FactPattern<'_>) -> Result<Vec<Term>> {
        if pattern.unbound_count() != 1 {
            return Err(Error::InvalidPattern(format!(
                "expected exactly one unbound position, found {}",
                pattern.unbound_count()
            )));
        }

        let bindings = self
            .matching(pattern)
            .map(|fact| {
                if pattern.subject.is_none() {
                    Term::Iri(fact.subject.clone())
                } else if pattern.predicate.is_none() {
                    Term::Iri(fact.predicate.clone())
                } else {
                    fact.object.clone()
                }
            })
            .collect();
        Ok(bindings)
    }

    /// True when `subject rdf:type class` is present.
    pub fn has_type(&self, subject: &Iri, class: &str) -> bool {
        let predicate = Iri::new(crate::vocab::rdf::TYPE);
        let object = Term::Iri(Iri::new(class));
        self.matching(FactPattern::new(Some(subject), Some(&predicate), Some(&object)))
            .next()
            .is_some()
    }
}

impl<'a> IntoIterator for &'a FactStore {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;
    use crate::vocab::{rdf, rdfs, vivo};

    fn iri(value: &str) -> Iri {
        Iri::new(value)
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let mut store = FactStore::new();
        let subject = iri("urn:a");
        store.append(subject.clone(), iri(rdfs::LABEL), Literal::lang("A", "en"));
        store.append(subject.clone(), iri(rdfs::LABEL), Literal::lang("A", "en"));
        store.append(subject, iri(rdf::TYPE), iri(vivo::COLLEGE));

        assert_eq!(store.len(), 3);
        assert_eq!(store.facts()[0], store.facts()[1]);
        assert_eq!(store.facts()[2].predicate.as_str(), rdf::TYPE);
    }

    #[test]
    fn find_binds_unbound_subject_through_object_index() {
        let mut store = FactStore::new();
        let work = iri("urn:work");
        store.append(iri("urn:a1"), iri(vivo::RELATES), work.clone());
        store.append(iri("urn:a2"), iri(vivo::RELATES), work.clone());
        store.append(iri("urn:a3"), iri(vivo::RELATES), iri("urn:other"));

        let predicate = iri(vivo::RELATES);
        let object = Term::Iri(work);
        let bindings = store
            .find(FactPattern::new(None, Some(&predicate), Some(&object)))
            .expect("valid pattern");

        assert_eq!(
            bindings,
            vec![Term::Iri(iri("urn:a1")), Term::Iri(iri("urn:a2"))]
        );
    }

    #[test]
    fn find_rejects_patterns_without_exactly_one_variable() {
        let store = FactStore::new();
        let result = store.find(FactPattern::default());
        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn has_type_checks_type_assertions() {
        let mut store = FactStore::new();
        let person = iri("urn:p");
        store.append(person.clone(), iri(rdf::TYPE), iri(vivo::FACULTY_MEMBER));
        assert!(store.has_type(&person, vivo::FACULTY_MEMBER));
        assert!(!store.has_type(&person, vivo::COLLEGE));
    }
}
