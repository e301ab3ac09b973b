//! Graph routing: one quad stream in, three named-graph buffers out.

use tracing::debug;

use graphnav_syntax::TokenKind;

use crate::error::Result;
use crate::quads::{parse_quads, GraphQuad};
use crate::serializer::GraphBuffer;
use crate::term::GraphTerm;

/// Graph URN receiving navigation statements.
pub const NAVIGATION_GRAPH: &str = "urn:pwid:meg:nav";
/// Graph URN receiving entity data statements.
pub const DATA_GRAPH: &str = "urn:pwid:meg:data";
/// Graph URN receiving detail annotations.
pub const DETAILS_GRAPH: &str = "urn:pwid:meg:details";

/// Prefix label owned by the navigation vocabulary.
const NAVIGATION_PREFIX: &str = "hydra";
/// Prefix label owned by the detail annotations.
const DETAILS_PREFIX: &str = "eav";

/// The three per-graph serializations produced by one demux cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemuxOutput {
    /// Turtle text of the navigation graph.
    pub navigation: String,
    /// Turtle text of the data graph.
    pub data: String,
    /// Turtle text of the details graph.
    pub details: String,
}

/// Routes quads and prefix declarations into three per-graph buffers.
///
/// A quad lands in at most one buffer; everything outside the three routed
/// graph URNs — the default graph included — is dropped and counted.
/// Prefix declarations are routed by label: `hydra` belongs to navigation,
/// `eav` to details, and every other label to data and details.
#[derive(Debug, Default)]
pub struct GraphDemuxer {
    navigation: GraphBuffer,
    data: GraphBuffer,
    details: GraphBuffer,
    dropped: usize,
}

impl GraphDemuxer {
    /// A demuxer with three empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one quad by its graph label. The graph component is dropped
    /// at the buffer boundary; only subject, predicate, object are kept.
    pub fn route_quad(&mut self, quad: GraphQuad) {
        let GraphQuad {
            subject,
            predicate,
            object,
            graph,
        } = quad;
        let target = match &graph {
            Some(GraphTerm::Iri(iri)) if iri == NAVIGATION_GRAPH => Some(&mut self.navigation),
            Some(GraphTerm::Iri(iri)) if iri == DATA_GRAPH => Some(&mut self.data),
            Some(GraphTerm::Iri(iri)) if iri == DETAILS_GRAPH => Some(&mut self.details),
            _ => None,
        };
        match target {
            Some(buffer) => buffer.add_triple(subject, predicate, object),
            None => {
                self.dropped += 1;
                debug!(graph = ?graph, "dropping quad outside the routed graphs");
            }
        }
    }

    /// Routes one prefix declaration by label.
    pub fn route_prefix(&mut self, label: &str, iri: &str) {
        match label {
            NAVIGATION_PREFIX => self.navigation.add_prefix(label, iri),
            DETAILS_PREFIX => self.details.add_prefix(label, iri),
            _ => {
                self.details.add_prefix(label, iri);
                self.data.add_prefix(label, iri);
            }
        }
    }

    /// Number of quads dropped so far.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Finishes all three buffers. Consuming `self` makes a second
    /// finalization unrepresentable.
    #[must_use]
    pub fn finish(self) -> DemuxOutput {
        DemuxOutput {
            navigation: self.navigation.finish(),
            data: self.data.finish(),
            details: self.details.finish(),
        }
    }
}

/// Parses and demuxes a TriG document in one pass.
///
/// The tokenizer supplies the prefix-directive stream (the quad parser has
/// no prefix side-channel), sophia supplies the quads; both are routed and
/// the buffers finished.
///
/// # Errors
///
/// Returns [`crate::DemuxError`] when the document fails lexing or TriG
/// parsing; either is fatal for the cycle.
pub fn demux_document(source: &str) -> Result<DemuxOutput> {
    let stream = graphnav_syntax::tokenize(source)?;
    let quads = parse_quads(source)?;

    let mut demuxer = GraphDemuxer::new();
    for token in stream.significant() {
        if token.kind == TokenKind::PrefixDirective {
            if let Some((label, iri)) = parse_prefix_directive(&token.text) {
                demuxer.route_prefix(label, iri);
            }
        }
    }
    for quad in quads {
        demuxer.route_quad(quad);
    }
    if demuxer.dropped() > 0 {
        debug!(dropped = demuxer.dropped(), "demux cycle dropped quads");
    }
    Ok(demuxer.finish())
}

/// Splits a prefix-directive token (`@prefix label: <iri> .`) into its
/// label and IRI.
fn parse_prefix_directive(text: &str) -> Option<(&str, &str)> {
    let rest = text.get(7..)?.trim_start();
    let (label, rest) = rest.split_once(':')?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('<')?;
    let (iri, _) = rest.split_once('>')?;
    Some((label, iri))
}
