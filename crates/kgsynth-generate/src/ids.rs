use std::collections::{HashMap, HashSet};

use kgsynth_core::Iri;
use rand::Rng;

use crate::errors::GenerationError;

/// Lowest numeric suffix; every suffix has exactly seven digits.
pub const SUFFIX_MIN: u32 = 1_000_000;
/// Exclusive upper bound of the numeric suffix.
pub const SUFFIX_MAX: u32 = 10_000_000;

const ORCID_BASE: &str = "https://orcid.org/";

/// Category token embedded in minted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    University,
    College,
    Department,
    Person,
    Position,
    Vcard,
    VcardName,
    VcardTitle,
    VcardUrl,
    VcardEmail,
    VcardTelephone,
    Work,
    Authorship,
    Stub,
    Date,
    Interval,
    Concept,
    Journal,
    Project,
    Grant,
    Equipment,
    Conference,
    InvitedTalk,
    Presentation,
    Course,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::University => "university",
            EntityKind::College => "college",
            EntityKind::Department => "department",
            EntityKind::Person => "person",
            EntityKind::Position => "position",
            EntityKind::Vcard => "vcard",
            EntityKind::VcardName => "vcard-name",
            EntityKind::VcardTitle => "vcard-title",
            EntityKind::VcardUrl => "vcard-url",
            EntityKind::VcardEmail => "vcard-email",
            EntityKind::VcardTelephone => "vcard-telephone",
            EntityKind::Work => "work",
            EntityKind::Authorship => "authorship",
            EntityKind::Stub => "stub",
            EntityKind::Date => "date",
            EntityKind::Interval => "interval",
            EntityKind::Concept => "concept",
            EntityKind::Journal => "journal",
            EntityKind::Project => "project",
            EntityKind::Grant => "grant",
            EntityKind::Equipment => "equipment",
            EntityKind::Conference => "conference",
            EntityKind::InvitedTalk => "invited-talk",
            EntityKind::Presentation => "presentation",
            EntityKind::Course => "course",
        }
    }
}

/// Mints `namespace + kind + seven-digit suffix` identifiers.
///
/// Suffixes are random but collision-checked per kind, so identifiers are
/// unique within a run. A kind has 9,000,000 suffixes available.
#[derive(Debug)]
pub struct IdentifierAllocator {
    namespace: String,
    issued: HashMap<EntityKind, HashSet<u32>>,
    orcids: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            issued: HashMap::new(),
            orcids: HashSet::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn mint<R: Rng + ?Sized>(
        &mut self,
        kind: EntityKind,
        rng: &mut R,
    ) -> Result<Iri, GenerationError> {
        let issued = self.issued.entry(kind).or_default();
        if issued.len() >= (SUFFIX_MAX - SUFFIX_MIN) as usize {
            return Err(GenerationError::IdentifierSpaceExhausted {
                kind: kind.as_str(),
            });
        }

        let suffix = loop {
            let candidate = rng.random_range(SUFFIX_MIN..SUFFIX_MAX);
            if issued.insert(candidate) {
                break candidate;
            }
        };

        Ok(Iri::new(format!(
            "{}{}{}",
            self.namespace,
            kind.as_str(),
            suffix
        )))
    }

    /// ORCID-shaped identifier: four dash-separated groups of four digits.
    pub fn mint_orcid<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Iri {
        loop {
            let groups: Vec<String> = (0..4)
                .map(|_| rng.random_range(1000..10000).to_string())
                .collect();
            let orcid = format!("{ORCID_BASE}{}", groups.join("-"));
            if self.orcids.insert(orcid.clone()) {
                return Iri::new(orcid);
            }
        }
    }

    /// Number of identifiers issued for `kind`.
    pub fn issued(&self, kind: EntityKind) -> usize {
        self.issued.get(&kind).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const NS: &str = "http://vivo.example.edu/individual/";

    #[test]
    fn minted_identifier_has_kind_and_seven_digits() {
        let mut allocator = IdentifierAllocator::new(NS);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for kind in [EntityKind::Person, EntityKind::VcardUrl, EntityKind::InvitedTalk] {
            let iri = allocator.mint(kind, &mut rng).expect("mint");
            let local = iri.strip_namespace(NS).expect("namespace prefix");
            let digits = local.strip_prefix(kind.as_str()).expect("kind prefix");
            assert_eq!(digits.len(), 7);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert!(!digits.starts_with('0'));
        }
    }

    #[test]
    fn identifiers_do_not_repeat_within_a_kind() {
        let mut allocator = IdentifierAllocator::new(NS);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut seen = HashSet::new();
        for _ in 0..20_000 {
            let iri = allocator.mint(EntityKind::Work, &mut rng).expect("mint");
            assert!(seen.insert(iri));
        }
        assert_eq!(allocator.issued(EntityKind::Work), 20_000);
        assert_eq!(allocator.issued(EntityKind::Person), 0);
    }

    #[test]
    fn orcid_has_four_groups() {
        let mut allocator = IdentifierAllocator::new(NS);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let orcid = allocator.mint_orcid(&mut rng);
        let local = orcid.as_str().strip_prefix(ORCID_BASE).expect("orcid base");
        let groups: Vec<&str> = local.split('-').collect();
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|group| group.len() == 4));
    }
}
