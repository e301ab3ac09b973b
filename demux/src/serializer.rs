//! Per-graph Turtle buffers.
//!
//! A [`GraphBuffer`] accumulates prefix registrations and triples in
//! arrival order and serializes them on [`GraphBuffer::finish`]. Finishing
//! consumes the buffer, so a second finalization is unrepresentable.

use crate::term::GraphTerm;

/// Accumulates one graph's prefixes and triples, then serializes them.
#[derive(Debug, Clone, Default)]
pub struct GraphBuffer {
    prefixes: Vec<(String, String)>,
    triples: Vec<[GraphTerm; 3]>,
}

impl GraphBuffer {
    /// A fresh, empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `label` → `iri`, replacing an earlier registration of the
    /// same label. Registration order is emission order.
    pub fn add_prefix(&mut self, label: &str, iri: &str) {
        if let Some(entry) = self.prefixes.iter_mut().find(|(l, _)| l.as_str() == label) {
            entry.1 = iri.to_string();
        } else {
            self.prefixes.push((label.to_string(), iri.to_string()));
        }
    }

    /// Appends one triple. The graph component was dropped by the router;
    /// arrival order is preserved in the serialized output.
    pub fn add_triple(&mut self, subject: GraphTerm, predicate: GraphTerm, object: GraphTerm) {
        self.triples.push([subject, predicate, object]);
    }

    /// True when no triple has arrived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Serializes the buffer as Turtle: prefix header, blank line, then
    /// subject blocks. Consecutive triples sharing a subject join into one
    /// block with `;` continuations; blocks are separated by blank lines so
    /// each becomes its own fragment downstream.
    ///
    /// A buffer that received no triples finishes to an empty string, even
    /// if prefixes were routed to it.
    #[must_use]
    pub fn finish(self) -> String {
        if self.triples.is_empty() {
            return String::new();
        }
        let GraphBuffer { prefixes, triples } = self;

        let mut out = String::new();
        for (label, iri) in &prefixes {
            out.push_str(&format!("@prefix {label}: <{iri}> .\n"));
        }
        if !prefixes.is_empty() {
            out.push('\n');
        }

        let mut index = 0;
        while index < triples.len() {
            let subject = triples[index][0].clone();
            out.push_str(&subject.render(&prefixes));
            out.push(' ');
            let mut first = true;
            while index < triples.len() && triples[index][0] == subject {
                let [_, predicate, object] = &triples[index];
                if !first {
                    out.push_str(" ;\n    ");
                }
                first = false;
                out.push_str(&predicate.render_predicate(&prefixes));
                out.push(' ');
                out.push_str(&object.render(&prefixes));
                index += 1;
            }
            out.push_str(" .\n");
            if index < triples.len() {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(value: &str) -> GraphTerm {
        GraphTerm::Iri(value.to_string())
    }

    fn literal(value: &str) -> GraphTerm {
        GraphTerm::Literal {
            value: value.to_string(),
            language: None,
            datatype: None,
        }
    }

    #[test]
    fn empty_buffer_finishes_empty() {
        assert_eq!(GraphBuffer::new().finish(), "");
    }

    #[test]
    fn prefix_only_buffer_finishes_empty() {
        let mut buffer = GraphBuffer::new();
        buffer.add_prefix("hydra", "http://www.w3.org/ns/hydra/core#");
        assert!(buffer.is_empty());
        assert_eq!(buffer.finish(), "");
    }

    #[test]
    fn consecutive_subjects_group_into_blocks() {
        let mut buffer = GraphBuffer::new();
        buffer.add_prefix("sdo", "https://schema.org/");
        buffer.add_triple(
            GraphTerm::Blank("doc".to_string()),
            iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            iri("https://schema.org/Article"),
        );
        buffer.add_triple(
            GraphTerm::Blank("doc".to_string()),
            iri("https://schema.org/name"),
            literal("Home"),
        );
        assert_eq!(
            buffer.finish(),
            "@prefix sdo: <https://schema.org/> .\n\n\
             _:doc a sdo:Article ;\n    sdo:name \"Home\" .\n"
        );
    }

    #[test]
    fn interleaved_subjects_keep_arrival_order() {
        let mut buffer = GraphBuffer::new();
        buffer.add_triple(iri("http://e/b"), iri("http://e/p"), literal("1"));
        buffer.add_triple(iri("http://e/a"), iri("http://e/p"), literal("2"));
        buffer.add_triple(iri("http://e/b"), iri("http://e/p"), literal("3"));
        let out = buffer.finish();
        assert_eq!(
            out,
            "<http://e/b> <http://e/p> \"1\" .\n\n\
             <http://e/a> <http://e/p> \"2\" .\n\n\
             <http://e/b> <http://e/p> \"3\" .\n"
        );
    }

    #[test]
    fn redeclared_prefix_replaces_but_keeps_position() {
        let mut buffer = GraphBuffer::new();
        buffer.add_prefix("ex", "http://old.example/");
        buffer.add_prefix("sdo", "https://schema.org/");
        buffer.add_prefix("ex", "http://example.org/");
        buffer.add_triple(iri("http://example.org/x"), iri("http://e/p"), literal("v"));
        let out = buffer.finish();
        assert!(out.starts_with(
            "@prefix ex: <http://example.org/> .\n@prefix sdo: <https://schema.org/> .\n"
        ));
        assert!(out.contains("ex:x"));
    }
}
