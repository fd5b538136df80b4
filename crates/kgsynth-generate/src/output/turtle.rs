use std::io::{self, Write};

use sophia::api::prefix::{Prefix, PrefixMapPair};
use sophia::api::serializer::TripleSerializer;
use sophia::iri::Iri;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

use kgsynth_core::FactStore;
use kgsynth_core::vocab::PREFIXES;

use crate::output::{counting, finish, stream_error, triples};

/// Pretty Turtle, grouped by subject and compacted with the vocabulary prefixes.
pub fn write_turtle<W: Write>(store: &FactStore, writer: W) -> io::Result<u64> {
    let graph = triples(store);
    let config = TurtleConfig::new()
        .with_pretty(true)
        .with_own_prefix_map(prefix_map());
    let mut out = counting(writer);
    TurtleSerializer::new_with_config(&mut out, config)
        .serialize_graph(&graph)
        .map_err(stream_error)?;
    finish(out)
}

fn prefix_map() -> Vec<PrefixMapPair> {
    PREFIXES
        .iter()
        .map(|(prefix, namespace)| {
            (
                Prefix::new_unchecked(Box::from(*prefix)),
                Iri::new_unchecked(Box::from(*namespace)),
            )
        })
        .collect()
}
