//! TriG quad parsing.
//!
//! Parsing is delegated to sophia's TriG parser; the borrowed terms it
//! yields are converted to owned [`GraphTerm`]s on the fly. The parser has
//! no prefix side-channel — prefix declarations are recovered from the
//! tokenizer by the router.

use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad;
use sophia_api::source::QuadSource;
use sophia_api::term::Term;
use sophia_turtle::parser::trig::TriGParser;

use crate::error::{DemuxError, Result};
use crate::term::GraphTerm;

/// One parsed quad with owned terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQuad {
    /// Subject term.
    pub subject: GraphTerm,
    /// Predicate term.
    pub predicate: GraphTerm,
    /// Object term.
    pub object: GraphTerm,
    /// Graph label; `None` for the default graph.
    pub graph: Option<GraphTerm>,
}

/// Parses a TriG document into owned quads, preserving stream order.
///
/// # Errors
///
/// Returns [`DemuxError::Parse`] when the document is not well-formed
/// TriG; the demux cycle aborts.
pub fn parse_quads(source: &str) -> Result<Vec<GraphQuad>> {
    let parser = TriGParser { base: None };
    let mut quads = Vec::new();
    parser
        .parse(source.as_bytes())
        .for_each_quad(|q| {
            let ([s, p, o], g) = q.spog();
            quads.push(GraphQuad {
                subject: GraphTerm::from_simple(&s.as_simple()),
                predicate: GraphTerm::from_simple(&p.as_simple()),
                object: GraphTerm::from_simple(&o.as_simple()),
                graph: g.map(|g| GraphTerm::from_simple(&g.as_simple())),
            });
        })
        .map_err(|e| DemuxError::Parse(e.to_string()))?;
    Ok(quads)
}
