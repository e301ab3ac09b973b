//! Named-graph demultiplexing for TriG quad streams.
//!
//! The `graphnav-demux` crate splits one TriG document into three Turtle
//! serializations keyed by graph URN — navigation, data, and details —
//! preserving quad arrival order within each graph. Quads outside the three
//! routed graphs (the default graph included) are dropped and counted.
//! Prefix declarations travel on a side-channel: the tokenizer's
//! prefix-directive tokens, routed by label so each graph only sees the
//! namespaces it uses.
//!
//! # Entry Point
//!
//! ```
//! let trig = "@prefix hydra: <http://www.w3.org/ns/hydra/core#> .\n\
//!             <urn:pwid:meg:nav> { _:apiDocs a hydra:ApiDocumentation . }";
//! let output = graphnav_demux::demux_document(trig)?;
//! assert!(output.navigation.contains("hydra:ApiDocumentation"));
//! assert!(output.data.is_empty());
//! # Ok::<(), graphnav_demux::DemuxError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod quads;
pub mod router;
pub mod serializer;
pub mod term;

pub use error::{DemuxError, Result};
pub use quads::{parse_quads, GraphQuad};
pub use router::{
    demux_document, DemuxOutput, GraphDemuxer, DATA_GRAPH, DETAILS_GRAPH, NAVIGATION_GRAPH,
};
pub use serializer::GraphBuffer;
pub use term::GraphTerm;
