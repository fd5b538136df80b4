//! Ontology terms used by the generated scholarly graph.
//!
//! Terms are exposed as `&'static str` IRIs grouped by namespace; use
//! [`crate::Iri::new`] to lift one into a fact.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const VIVO: &str = "http://vivoweb.org/ontology/core#";
pub const BIBO: &str = "http://purl.org/ontology/bibo/";
pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
pub const OBO: &str = "http://purl.obolibrary.org/obo/";

/// Prefix table used by serializers, in declaration order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("owl", OWL),
    ("skos", SKOS),
    ("vivo", VIVO),
    ("bibo", BIBO),
    ("vcard", VCARD),
    ("obo", OBO),
];

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

pub mod owl {
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
}

pub mod skos {
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
}

pub mod vivo {
    pub const UNIVERSITY: &str = "http://vivoweb.org/ontology/core#University";
    pub const COLLEGE: &str = "http://vivoweb.org/ontology/core#College";
    pub const ACADEMIC_DEPARTMENT: &str = "http://vivoweb.org/ontology/core#AcademicDepartment";
    pub const FACULTY_MEMBER: &str = "http://vivoweb.org/ontology/core#FacultyMember";
    pub const FACULTY_POSITION: &str = "http://vivoweb.org/ontology/core#FacultyPosition";
    pub const AUTHORSHIP: &str = "http://vivoweb.org/ontology/core#Authorship";
    pub const DATE_TIME_VALUE: &str = "http://vivoweb.org/ontology/core#DateTimeValue";
    pub const DATE_TIME_INTERVAL: &str = "http://vivoweb.org/ontology/core#DateTimeInterval";
    pub const YEAR_PRECISION: &str = "http://vivoweb.org/ontology/core#yearPrecision";
    pub const PROJECT: &str = "http://vivoweb.org/ontology/core#Project";
    pub const GRANT: &str = "http://vivoweb.org/ontology/core#Grant";
    pub const EQUIPMENT: &str = "http://vivoweb.org/ontology/core#Equipment";
    pub const CONFERENCE: &str = "http://vivoweb.org/ontology/core#Conference";
    pub const INVITED_TALK: &str = "http://vivoweb.org/ontology/core#InvitedTalk";
    pub const PRESENTATION: &str = "http://vivoweb.org/ontology/core#Presentation";
    pub const COURSE: &str = "http://vivoweb.org/ontology/core#Course";

    pub const OVERVIEW: &str = "http://vivoweb.org/ontology/core#overview";
    pub const DESCRIPTION: &str = "http://vivoweb.org/ontology/core#description";
    pub const ABSTRACT: &str = "http://vivoweb.org/ontology/core#abstract";
    pub const RESEARCHER_ID: &str = "http://vivoweb.org/ontology/core#researcherId";
    pub const SCOPUS_ID: &str = "http://vivoweb.org/ontology/core#scopusId";
    pub const ERA_COMMONS_ID: &str = "http://vivoweb.org/ontology/core#eraCommonsId";
    pub const ORCID_ID: &str = "http://vivoweb.org/ontology/core#orcidId";
    pub const HAS_RESEARCH_AREA: &str = "http://vivoweb.org/ontology/core#hasResearchArea";
    pub const HAS_SUBJECT_AREA: &str = "http://vivoweb.org/ontology/core#hasSubjectArea";
    pub const HAS_PUBLICATION_VENUE: &str =
        "http://vivoweb.org/ontology/core#hasPublicationVenue";
    pub const RELATES: &str = "http://vivoweb.org/ontology/core#relates";
    pub const RANK: &str = "http://vivoweb.org/ontology/core#rank";
    pub const DATE_TIME_INTERVAL_PROP: &str = "http://vivoweb.org/ontology/core#dateTimeInterval";
    pub const DATE_TIME_VALUE_PROP: &str = "http://vivoweb.org/ontology/core#dateTimeValue";
    pub const DATE_TIME_PRECISION: &str = "http://vivoweb.org/ontology/core#dateTimePrecision";
    pub const DATE_TIME: &str = "http://vivoweb.org/ontology/core#dateTime";
    pub const START: &str = "http://vivoweb.org/ontology/core#start";
    pub const END: &str = "http://vivoweb.org/ontology/core#end";
    pub const ISSUE: &str = "http://vivoweb.org/ontology/core#issue";
    pub const FUNDING_VEHICLE_FOR: &str = "http://vivoweb.org/ontology/core#fundingVehicleFor";
    pub const SUPPORTED_INFORMATION_RESOURCE: &str =
        "http://vivoweb.org/ontology/core#supportedInformationResource";
    pub const EQUIPMENT_FOR: &str = "http://vivoweb.org/ontology/core#equipmentFor";
}

pub mod bibo {
    pub const JOURNAL: &str = "http://purl.org/ontology/bibo/Journal";
    pub const DOI: &str = "http://purl.org/ontology/bibo/doi";
    pub const ABSTRACT: &str = "http://purl.org/ontology/bibo/abstract";
    pub const ISSN: &str = "http://purl.org/ontology/bibo/issn";
    pub const VOLUME: &str = "http://purl.org/ontology/bibo/volume";
    pub const PAGE_START: &str = "http://purl.org/ontology/bibo/pageStart";
    pub const PAGE_END: &str = "http://purl.org/ontology/bibo/pageEnd";
}

pub mod vcard {
    pub const INDIVIDUAL: &str = "http://www.w3.org/2006/vcard/ns#Individual";
    pub const KIND: &str = "http://www.w3.org/2006/vcard/ns#Kind";
    pub const NAME: &str = "http://www.w3.org/2006/vcard/ns#Name";
    pub const TITLE: &str = "http://www.w3.org/2006/vcard/ns#Title";
    pub const URL: &str = "http://www.w3.org/2006/vcard/ns#URL";
    pub const EMAIL: &str = "http://www.w3.org/2006/vcard/ns#Email";
    pub const WORK: &str = "http://www.w3.org/2006/vcard/ns#Work";
    pub const TELEPHONE: &str = "http://www.w3.org/2006/vcard/ns#Telephone";

    pub const HAS_NAME: &str = "http://www.w3.org/2006/vcard/ns#hasName";
    pub const HAS_TITLE: &str = "http://www.w3.org/2006/vcard/ns#hasTitle";
    pub const HAS_URL: &str = "http://www.w3.org/2006/vcard/ns#hasURL";
    pub const HAS_EMAIL: &str = "http://www.w3.org/2006/vcard/ns#hasEmail";
    pub const HAS_TELEPHONE: &str = "http://www.w3.org/2006/vcard/ns#hasTelephone";
    pub const GIVEN_NAME: &str = "http://www.w3.org/2006/vcard/ns#givenName";
    pub const ADDITIONAL_NAME: &str = "http://www.w3.org/2006/vcard/ns#additionalName";
    pub const FAMILY_NAME: &str = "http://www.w3.org/2006/vcard/ns#familyName";
    pub const TITLE_PROP: &str = "http://www.w3.org/2006/vcard/ns#title";
    pub const URL_PROP: &str = "http://www.w3.org/2006/vcard/ns#url";
    pub const EMAIL_PROP: &str = "http://www.w3.org/2006/vcard/ns#email";
    pub const TELEPHONE_PROP: &str = "http://www.w3.org/2006/vcard/ns#telephone";
}

pub mod obo {
    /// part of
    pub const PART_OF: &str = "http://purl.obolibrary.org/obo/BFO_0000050";
    /// has part
    pub const HAS_PART: &str = "http://purl.obolibrary.org/obo/BFO_0000051";
    /// has participant
    pub const HAS_PARTICIPANT: &str = "http://purl.obolibrary.org/obo/BFO_0000055";
    /// has output
    pub const HAS_OUTPUT: &str = "http://purl.obolibrary.org/obo/RO_0002234";
    /// has contact info
    pub const HAS_CONTACT_INFO: &str = "http://purl.obolibrary.org/obo/ARG_2000028";
    /// manufacturer
    pub const MANUFACTURER: &str = "http://purl.obolibrary.org/obo/OBI_0000304";
    /// software
    pub const SOFTWARE: &str = "http://purl.obolibrary.org/obo/ERO_0000071";
}

/// Document kinds a generated work can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WorkType {
    AcademicArticle,
    BlogPosting,
    Book,
    BookSection,
    CaseStudy,
    Chapter,
    ConferencePaper,
    ConferencePoster,
    Database,
    EditedBook,
    EditorialArticle,
    ExtensionDocument,
    Film,
    Letter,
    Newsletter,
    NewsRelease,
    Patent,
    Report,
    Review,
    Software,
    Speech,
    Thesis,
    Video,
    Webpage,
    Website,
}

impl WorkType {
    pub const ALL: [WorkType; 25] = [
        WorkType::AcademicArticle,
        WorkType::BlogPosting,
        WorkType::Book,
        WorkType::BookSection,
        WorkType::CaseStudy,
        WorkType::Chapter,
        WorkType::ConferencePaper,
        WorkType::ConferencePoster,
        WorkType::Database,
        WorkType::EditedBook,
        WorkType::EditorialArticle,
        WorkType::ExtensionDocument,
        WorkType::Film,
        WorkType::Letter,
        WorkType::Newsletter,
        WorkType::NewsRelease,
        WorkType::Patent,
        WorkType::Report,
        WorkType::Review,
        WorkType::Software,
        WorkType::Speech,
        WorkType::Thesis,
        WorkType::Video,
        WorkType::Webpage,
        WorkType::Website,
    ];

    /// Class IRI asserted for works of this kind.
    pub fn iri(self) -> &'static str {
        match self {
            WorkType::AcademicArticle => "http://purl.org/ontology/bibo/AcademicArticle",
            WorkType::BlogPosting => "http://vivoweb.org/ontology/core#BlogPosting",
            WorkType::Book => "http://purl.org/ontology/bibo/Book",
            WorkType::BookSection => "http://purl.org/ontology/bibo/BookSection",
            WorkType::CaseStudy => "http://vivoweb.org/ontology/core#CaseStudy",
            WorkType::Chapter => "http://purl.org/ontology/bibo/Chapter",
            WorkType::ConferencePaper => "http://vivoweb.org/ontology/core#ConferencePaper",
            WorkType::ConferencePoster => "http://vivoweb.org/ontology/core#ConferencePoster",
            WorkType::Database => "http://vivoweb.org/ontology/core#Database",
            WorkType::EditedBook => "http://purl.org/ontology/bibo/EditedBook",
            WorkType::EditorialArticle => "http://vivoweb.org/ontology/core#EditorialArticle",
            WorkType::ExtensionDocument => "http://vivoweb.org/ontology/core#ExtensionDocument",
            WorkType::Film => "http://purl.org/ontology/bibo/Film",
            WorkType::Letter => "http://purl.org/ontology/bibo/Letter",
            WorkType::Newsletter => "http://vivoweb.org/ontology/core#Newsletter",
            WorkType::NewsRelease => "http://vivoweb.org/ontology/core#NewsRelease",
            WorkType::Patent => "http://purl.org/ontology/bibo/Patent",
            WorkType::Report => "http://purl.org/ontology/bibo/Report",
            WorkType::Review => "http://vivoweb.org/ontology/core#Review",
            WorkType::Software => obo::SOFTWARE,
            WorkType::Speech => "http://vivoweb.org/ontology/core#Speech",
            WorkType::Thesis => "http://purl.org/ontology/bibo/Thesis",
            WorkType::Video => "http://vivoweb.org/ontology/core#Video",
            WorkType::Webpage => "http://purl.org/ontology/bibo/Webpage",
            WorkType::Website => "http://purl.org/ontology/bibo/Website",
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.iri() == iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_type_iris_are_distinct_and_reversible() {
        for kind in WorkType::ALL {
            assert_eq!(WorkType::from_iri(kind.iri()), Some(kind));
        }
        let mut iris: Vec<_> = WorkType::ALL.iter().map(|kind| kind.iri()).collect();
        iris.sort_unstable();
        iris.dedup();
        assert_eq!(iris.len(), WorkType::ALL.len());
    }

    #[test]
    fn prefixed_terms_share_their_namespace() {
        assert!(vivo::AUTHORSHIP.starts_with(VIVO));
        assert!(bibo::DOI.starts_with(BIBO));
        assert!(vcard::HAS_URL.starts_with(VCARD));
        assert!(obo::PART_OF.starts_with(OBO));
        assert!(rdf::TYPE.starts_with(RDF));
    }
}
