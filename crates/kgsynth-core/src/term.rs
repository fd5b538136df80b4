use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::xsd;

/// Absolute IRI naming a node or predicate in the generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into namespace and local name when `namespace` is a prefix.
    pub fn strip_namespace<'a>(&'a self, namespace: &str) -> Option<&'a str> {
        self.0.strip_prefix(namespace)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Literal annotation: either a language tag or a datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralTag {
    Language(String),
    Datatype(Iri),
}

/// Literal value with its lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub tag: LiteralTag,
}

impl Literal {
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            tag: LiteralTag::Language(language.into()),
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: &str) -> Self {
        Self {
            lexical: lexical.into(),
            tag: LiteralTag::Datatype(Iri::new(datatype)),
        }
    }

    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    pub fn any_uri(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::ANY_URI)
    }

    pub fn date_time(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::DATE_TIME)
    }

    pub fn language(&self) -> Option<&str> {
        match &self.tag {
            LiteralTag::Language(language) => Some(language.as_str()),
            LiteralTag::Datatype(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match &self.tag {
            LiteralTag::Datatype(datatype) if datatype.as_str() == xsd::INTEGER => {
                self.lexical.parse().ok()
            }
            _ => None,
        }
    }
}

/// Object position of a fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
}

impl Term {
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Iri(_) => None,
            Term::Literal(literal) => Some(literal),
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<&Iri> for Term {
    fn from(value: &Iri) -> Self {
        Term::Iri(value.clone())
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

/// A single (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl Fact {
    pub fn new(subject: Iri, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literal_roundtrips_through_as_i64() {
        let literal = Literal::integer(7);
        assert_eq!(literal.as_i64(), Some(7));
        assert_eq!(Literal::string("7").as_i64(), None);
    }

    #[test]
    fn strip_namespace_returns_local_name() {
        let iri = Iri::new("http://example.org/individual/person1234567");
        assert_eq!(
            iri.strip_namespace("http://example.org/individual/"),
            Some("person1234567")
        );
        assert_eq!(iri.strip_namespace("http://other.org/"), None);
    }
}
