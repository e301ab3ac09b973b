//! Owned term model and its Turtle rendering.
//!
//! Terms arrive borrowed from the parser and are converted to owned
//! [`GraphTerm`]s so the demuxer can buffer them past the parse. Rendering
//! compacts IRIs against the prefixes registered with the owning buffer
//! and writes `rdf:type` in predicate position as `a`.

use sophia_api::term::SimpleTerm;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// An owned RDF term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphTerm {
    /// A full IRI.
    Iri(String),
    /// A blank node label (without the `_:`).
    Blank(String),
    /// A literal with optional language tag or datatype.
    Literal {
        /// Lexical form.
        value: String,
        /// Language tag, mutually exclusive with `datatype`.
        language: Option<String>,
        /// Datatype IRI; `None` for plain strings.
        datatype: Option<String>,
    },
    /// An RDF-star quoted triple.
    Triple(Box<[GraphTerm; 3]>),
    /// A variable (never produced by TriG input, kept for completeness).
    Variable(String),
}

impl GraphTerm {
    /// Converts a borrowed parser term into an owned one.
    #[must_use]
    pub fn from_simple(term: &SimpleTerm<'_>) -> GraphTerm {
        match term {
            SimpleTerm::Iri(iri) => GraphTerm::Iri(iri.as_str().to_string()),
            SimpleTerm::BlankNode(id) => GraphTerm::Blank(id.as_str().to_string()),
            SimpleTerm::LiteralDatatype(value, datatype) => GraphTerm::Literal {
                value: value.to_string(),
                language: None,
                datatype: Some(datatype.as_str().to_string()),
            },
            SimpleTerm::LiteralLanguage(value, tag) => GraphTerm::Literal {
                value: value.to_string(),
                language: Some(tag.as_str().to_string()),
                datatype: None,
            },
            SimpleTerm::Triple(spo) => GraphTerm::Triple(Box::new([
                GraphTerm::from_simple(&spo[0]),
                GraphTerm::from_simple(&spo[1]),
                GraphTerm::from_simple(&spo[2]),
            ])),
            SimpleTerm::Variable(name) => GraphTerm::Variable(name.as_str().to_string()),
        }
    }

    /// Turtle form of the term, IRIs compacted against `prefixes`.
    #[must_use]
    pub fn render(&self, prefixes: &[(String, String)]) -> String {
        match self {
            GraphTerm::Iri(iri) => render_iri(iri, prefixes),
            GraphTerm::Blank(id) => format!("_:{id}"),
            GraphTerm::Literal {
                value,
                language,
                datatype,
            } => {
                let escaped = escape_literal(value);
                match (language, datatype) {
                    (Some(tag), _) => format!("\"{escaped}\"@{tag}"),
                    (None, Some(datatype)) if datatype != XSD_STRING => {
                        format!("\"{escaped}\"^^{}", render_iri(datatype, prefixes))
                    }
                    _ => format!("\"{escaped}\""),
                }
            }
            GraphTerm::Triple(spo) => format!(
                "<< {} {} {} >>",
                spo[0].render(prefixes),
                spo[1].render_predicate(prefixes),
                spo[2].render(prefixes)
            ),
            GraphTerm::Variable(name) => format!("?{name}"),
        }
    }

    /// Like [`GraphTerm::render`], but `rdf:type` becomes the `a` keyword.
    #[must_use]
    pub fn render_predicate(&self, prefixes: &[(String, String)]) -> String {
        if let GraphTerm::Iri(iri) = self {
            if iri == RDF_TYPE {
                return "a".to_string();
            }
        }
        self.render(prefixes)
    }
}

fn render_iri(iri: &str, prefixes: &[(String, String)]) -> String {
    match compact_iri(iri, prefixes) {
        Some(compact) => compact,
        None => format!("<{iri}>"),
    }
}

/// Compacts `iri` to `label:local` against the longest matching namespace
/// whose remainder is a simple local name.
fn compact_iri(iri: &str, prefixes: &[(String, String)]) -> Option<String> {
    let mut best: Option<(&str, &str)> = None;
    for (label, base) in prefixes {
        let Some(local) = iri.strip_prefix(base.as_str()) else {
            continue;
        };
        if !is_local_name(local) {
            continue;
        }
        let better = match best {
            Some((_, current)) => local.len() < current.len(),
            None => true,
        };
        if better {
            best = Some((label.as_str(), local));
        }
    }
    best.map(|(label, local)| format!("{label}:{local}"))
}

fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        }
        _ => false,
    }
}

fn escape_literal(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
