use std::io::{self, Write};

use sophia::api::serializer::TripleSerializer;
use sophia::turtle::serializer::nt::NtSerializer;

use kgsynth_core::FactStore;

use crate::output::{counting, finish, stream_error, triples};

/// One fact per line, full IRIs, insertion order.
pub fn write_ntriples<W: Write>(store: &FactStore, writer: W) -> io::Result<u64> {
    let graph = triples(store);
    let mut out = counting(writer);
    NtSerializer::new(&mut out)
        .serialize_graph(&graph)
        .map_err(stream_error)?;
    finish(out)
}

#[cfg(test)]
mod tests {
    use kgsynth_core::vocab::{rdf, rdfs, vivo};
    use kgsynth_core::{Iri, Literal};

    use super::*;

    #[test]
    fn writes_one_line_per_fact() {
        let mut store = FactStore::new();
        let subject = Iri::new("http://vivo.example.edu/individual/university1234567");
        store.append(subject.clone(), Iri::new(rdf::TYPE), Iri::new(vivo::UNIVERSITY));
        store.append(subject.clone(), Iri::new(rdfs::LABEL), Literal::lang("Uni", "en"));
        store.append(subject, Iri::new(vivo::RANK), Literal::integer(1));

        let mut buffer = Vec::new();
        let written = write_ntriples(&store, &mut buffer).expect("write");
        let text = String::from_utf8(buffer).expect("utf8");

        assert_eq!(written as usize, text.len());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("<http://vivo.example.edu/individual/university1234567> "));
        assert!(lines[1].ends_with("\"Uni\"@en ."));
        assert!(lines[2].ends_with("\"1\"^^<http://www.w3.org/2001/XMLSchema#integer> ."));
    }

    #[test]
    fn escapes_quotes_and_newlines_in_literals() {
        let mut store = FactStore::new();
        let subject = Iri::new("http://vivo.example.edu/individual/work1234567");
        store.append(
            subject,
            Iri::new(rdfs::LABEL),
            Literal::lang("Uni \"X\"\nline", "de"),
        );

        let mut buffer = Vec::new();
        write_ntriples(&store, &mut buffer).expect("write");
        let text = String::from_utf8(buffer).expect("utf8");

        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\\\"X\\\""));
        assert!(text.contains("\\n"));
    }
}
