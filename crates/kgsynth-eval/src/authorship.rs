use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use kgsynth_core::vocab::{rdf, vivo};
use kgsynth_core::{FactStore, Iri, Term, WorkType};

use crate::errors::EvalError;

/// Kind of authorship invariant a work breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingFirstAuthor,
    DuplicateFirstAuthor,
    FirstAuthorNotFaculty,
    NonContiguousRanks,
    MissingRank,
}

/// A single authorship violation, anchored on a work or authorship IRI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorshipViolation {
    pub subject: String,
    pub kind: ViolationKind,
    pub detail: String,
}

/// Outcome of [`check_authorships`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorshipReport {
    pub works_checked: usize,
    pub authorships_checked: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<AuthorshipViolation>,
}

impl AuthorshipReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_result(self) -> Result<Self, EvalError> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(EvalError::Violations(self.violations.len() as u64))
        }
    }
}

#[derive(Default)]
struct AuthorshipFacts<'a> {
    rank: Option<i64>,
    relates: Vec<&'a Iri>,
}

/// Check every work for one faculty first author and contiguous ranks.
///
/// Works are subjects typed with a known document kind. Each must carry
/// exactly one rank-1 authorship whose other participant is a
/// `vivo:FacultyMember`, and its ranks must be exactly `1..=n`.
pub fn check_authorships(store: &FactStore) -> AuthorshipReport {
    let work_classes: HashSet<&str> = WorkType::ALL.iter().map(|kind| kind.iri()).collect();
    let mut works: Vec<&Iri> = Vec::new();
    let mut faculty: HashSet<&Iri> = HashSet::new();
    let mut typed_authorships: HashSet<&Iri> = HashSet::new();
    let mut authorships: BTreeMap<&Iri, AuthorshipFacts<'_>> = BTreeMap::new();

    for fact in store {
        let object = fact.object.as_iri();
        match fact.predicate.as_str() {
            rdf::TYPE => match object.map(Iri::as_str) {
                Some(vivo::AUTHORSHIP) => {
                    typed_authorships.insert(&fact.subject);
                }
                Some(vivo::FACULTY_MEMBER) => {
                    faculty.insert(&fact.subject);
                }
                Some(class) if work_classes.contains(class) => works.push(&fact.subject),
                _ => {}
            },
            vivo::RANK => {
                if let Term::Literal(literal) = &fact.object {
                    authorships.entry(&fact.subject).or_default().rank = literal.as_i64();
                }
            }
            vivo::RELATES => {
                if let Some(target) = object {
                    authorships
                        .entry(&fact.subject)
                        .or_default()
                        .relates
                        .push(target);
                }
            }
            _ => {}
        }
    }

    let work_set: HashSet<&Iri> = works.iter().copied().collect();
    let mut report = AuthorshipReport {
        works_checked: works.len(),
        ..AuthorshipReport::default()
    };
    let mut per_work: HashMap<&Iri, Vec<(i64, Option<&Iri>)>> = HashMap::new();

    for (authorship, facts) in &authorships {
        if !typed_authorships.contains(authorship) {
            continue;
        }
        let Some(work) = facts.relates.iter().copied().find(|iri| work_set.contains(iri)) else {
            continue;
        };
        report.authorships_checked += 1;
        let Some(rank) = facts.rank else {
            report.violations.push(violation(
                authorship,
                ViolationKind::MissingRank,
                format!("authorship of {work} has no integer rank"),
            ));
            continue;
        };
        let agent = facts.relates.iter().copied().find(|iri| *iri != work);
        per_work.entry(work).or_default().push((rank, agent));
    }

    for work in works {
        let mut entries = per_work.remove(work).unwrap_or_default();
        entries.sort_by_key(|(rank, _)| *rank);

        let first: Vec<Option<&Iri>> = entries
            .iter()
            .filter(|(rank, _)| *rank == 1)
            .map(|(_, agent)| *agent)
            .collect();
        match first.as_slice() {
            [] => report.violations.push(violation(
                work,
                ViolationKind::MissingFirstAuthor,
                "no rank-1 authorship".to_string(),
            )),
            [agent] => {
                if !agent.is_some_and(|agent| faculty.contains(agent)) {
                    report.violations.push(violation(
                        work,
                        ViolationKind::FirstAuthorNotFaculty,
                        "rank-1 authorship does not relate a faculty member".to_string(),
                    ));
                }
            }
            many => report.violations.push(violation(
                work,
                ViolationKind::DuplicateFirstAuthor,
                format!("{} rank-1 authorships", many.len()),
            )),
        }

        let ranks: Vec<i64> = entries.iter().map(|(rank, _)| *rank).collect();
        let contiguous = ranks
            .iter()
            .enumerate()
            .all(|(index, rank)| *rank == index as i64 + 1);
        if !contiguous {
            report.violations.push(violation(
                work,
                ViolationKind::NonContiguousRanks,
                format!("ranks {ranks:?}"),
            ));
        }
    }

    report
}

fn violation(subject: &Iri, kind: ViolationKind, detail: String) -> AuthorshipViolation {
    AuthorshipViolation {
        subject: subject.to_string(),
        kind,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use kgsynth_core::Literal;
    use kgsynth_core::vocab::vcard;

    use super::*;

    const BASE: &str = "http://vivo.example.edu/individual/";

    fn iri(local: &str) -> Iri {
        Iri::new(format!("{BASE}{local}"))
    }

    fn typed(store: &mut FactStore, subject: &Iri, class: &str) {
        store.append(subject.clone(), Iri::new(rdf::TYPE), Iri::new(class));
    }

    fn authorship(store: &mut FactStore, id: &str, work: &Iri, agent: &Iri, rank: i64) {
        let node = iri(id);
        typed(store, &node, vivo::AUTHORSHIP);
        store.append(node.clone(), Iri::new(vivo::RELATES), work.clone());
        store.append(node.clone(), Iri::new(vivo::RELATES), agent.clone());
        store.append(node, Iri::new(vivo::RANK), Literal::integer(rank));
    }

    fn base_store() -> (FactStore, Iri, Iri, Iri) {
        let mut store = FactStore::new();
        let person = iri("person1000001");
        let stub = iri("person1000002");
        let work = iri("work1000001");
        typed(&mut store, &person, vivo::FACULTY_MEMBER);
        typed(&mut store, &stub, vcard::KIND);
        typed(&mut store, &work, WorkType::Book.iri());
        (store, person, stub, work)
    }

    #[test]
    fn accepts_contiguous_ranks_with_faculty_first_author() {
        let (mut store, person, stub, work) = base_store();
        authorship(&mut store, "authorship1000001", &work, &person, 1);
        authorship(&mut store, "authorship1000002", &work, &stub, 2);

        let report = check_authorships(&store);
        assert!(report.is_clean(), "{:?}", report.violations);
        assert_eq!(report.works_checked, 1);
        assert_eq!(report.authorships_checked, 2);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn flags_gaps_and_missing_first_author() {
        let (mut store, _person, stub, work) = base_store();
        authorship(&mut store, "authorship1000002", &work, &stub, 2);

        let report = check_authorships(&store);
        let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::MissingFirstAuthor,
                ViolationKind::NonContiguousRanks
            ]
        );
        assert!(matches!(
            report.into_result(),
            Err(EvalError::Violations(2))
        ));
    }

    #[test]
    fn flags_non_faculty_and_duplicate_first_authors() {
        let (mut store, person, stub, work) = base_store();
        authorship(&mut store, "authorship1000001", &work, &stub, 1);
        let report = check_authorships(&store);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].kind, ViolationKind::FirstAuthorNotFaculty);

        authorship(&mut store, "authorship1000002", &work, &person, 1);
        let report = check_authorships(&store);
        let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
        assert!(kinds.contains(&ViolationKind::DuplicateFirstAuthor));
        assert!(kinds.contains(&ViolationKind::NonContiguousRanks));
    }

    #[test]
    fn work_without_authorships_is_reported() {
        let (store, _, _, work) = base_store();
        let report = check_authorships(&store);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].subject, work.to_string());
    }
}
