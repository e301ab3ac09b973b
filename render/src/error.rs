//! Render-pipeline error taxonomy.
//!
//! Every variant is fatal for the render cycle that raised it: the caller
//! gets no partially-filled regions.

use thiserror::Error;

/// Errors that abort a render cycle.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document failed lexing; nothing is rendered.
    #[error("graph source failed to lex: {0}")]
    Syntax(#[from] graphnav_syntax::SyntaxError),

    /// A line of a prefix fragment did not match the positional
    /// `@prefix label: <iri> .` pattern.
    #[error("malformed prefix line: {line:?}")]
    MalformedPrefixLine {
        /// The offending line, character references decoded.
        line: String,
    },

    /// The prefix-table JSON could not be deserialized.
    #[error("invalid prefix table: {0}")]
    PrefixTable(#[from] serde_json::Error),
}

/// Convenience alias for render results.
pub type Result<T> = std::result::Result<T, RenderError>;
