//! Fact-set serializers.

pub mod ntriples;
pub mod turtle;

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sophia::api::source::StreamError;
use sophia::api::term::{LanguageTag, SimpleTerm};
use sophia::iri::IriRef;

use kgsynth_core::{FactStore, Iri, LiteralTag, Term};

pub use ntriples::write_ntriples;
pub use turtle::write_turtle;

/// Text format of the written fact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Turtle,
    NTriples,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Turtle => "ttl",
            OutputFormat::NTriples => "nt",
        }
    }

    /// Serialize `store` into `writer`; returns bytes written.
    pub fn write<W: Write>(self, store: &FactStore, writer: W) -> io::Result<u64> {
        match self {
            OutputFormat::Turtle => write_turtle(store, writer),
            OutputFormat::NTriples => write_ntriples(store, writer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            "ntriples" | "nt" => Ok(OutputFormat::NTriples),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

type Triple<'a> = [SimpleTerm<'a>; 3];

/// Borrowing view of the store in insertion order.
fn triples(store: &FactStore) -> Vec<Triple<'_>> {
    store
        .facts()
        .iter()
        .map(|fact| {
            [
                iri_term(&fact.subject),
                iri_term(&fact.predicate),
                object_term(&fact.object),
            ]
        })
        .collect()
}

fn iri_term(iri: &Iri) -> SimpleTerm<'_> {
    SimpleTerm::Iri(IriRef::new_unchecked(iri.as_str().into()))
}

fn object_term(term: &Term) -> SimpleTerm<'_> {
    match term {
        Term::Iri(iri) => iri_term(iri),
        Term::Literal(literal) => match &literal.tag {
            LiteralTag::Language(language) => SimpleTerm::LiteralLanguage(
                literal.lexical.as_str().into(),
                LanguageTag::new_unchecked(language.as_str().into()),
            ),
            LiteralTag::Datatype(datatype) => SimpleTerm::LiteralDatatype(
                literal.lexical.as_str().into(),
                IriRef::new_unchecked(datatype.as_str().into()),
            ),
        },
    }
}

fn counting<W: Write>(writer: W) -> BufWriter<CountingWriter<W>> {
    BufWriter::new(CountingWriter::new(writer))
}

/// Flush the sink and report the bytes that reached the inner writer.
fn finish<W: Write>(mut out: BufWriter<CountingWriter<W>>) -> io::Result<u64> {
    out.flush()?;
    let counting = out.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn stream_error<E>(err: StreamError<E, io::Error>) -> io::Error
where
    E: Error + Send + Sync + 'static,
{
    match err {
        StreamError::SourceError(err) => io::Error::other(err),
        StreamError::SinkError(err) => err,
    }
}

pub(crate) struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
