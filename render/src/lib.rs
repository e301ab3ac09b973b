//! HTML rendering for serialized graph documents.
//!
//! The `graphnav-render` crate turns Turtle/TriG text into region-targeted
//! HTML. A document is validated by the tokenizer, split into
//! blank-line-separated fragments, each fragment is classified by its first
//! line and rendered by the matching renderer, and every token of a
//! rendered line is classified into an anchor (or left verbatim) against a
//! [`PrefixTable`].
//!
//! # Entry Point
//!
//! ```
//! use graphnav_render::{render_document, PrefixTable, Region};
//!
//! let prefixes = PrefixTable::from_json(r#"{"sdo": {"url": "https://schema.org/"}}"#)?;
//! let doc = "<http://localhost:8080/api/entities/1> a sdo:Thing .";
//! let regions = render_document(doc, &prefixes)?;
//! assert!(regions.get(Region::Content).contains("class=\"internal\""));
//! # Ok::<(), graphnav_render::RenderError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod escape;
pub mod fragments;
pub mod links;
pub mod prefixes;
pub mod regions;

pub use error::{RenderError, Result};
pub use escape::{decode_char_refs, encode_char_refs, escape_html};
pub use fragments::{route_document, FragmentKind, RenderedFragment};
pub use links::{render_links, rewrite_internal_href};
pub use prefixes::{PrefixEntry, PrefixTable};
pub use regions::{render_document, Region, RegionMap};

// Classifier patterns are fixed literals; a failure to compile one is a
// defect caught by unit tests, not a runtime condition.
#[allow(clippy::expect_used)]
pub(crate) fn pattern(literal: &str) -> regex::Regex {
    regex::Regex::new(literal).expect("pattern literal")
}
