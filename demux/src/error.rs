//! Demux error taxonomy.

use thiserror::Error;

/// Errors that abort a demux cycle.
#[derive(Debug, Error)]
pub enum DemuxError {
    /// The quad stream could not be parsed as TriG.
    #[error("graph source could not be parsed: {0}")]
    Parse(String),

    /// The document failed lexing; the prefix side-channel is unavailable.
    #[error("graph source failed to lex: {0}")]
    Syntax(#[from] graphnav_syntax::SyntaxError),
}

/// Convenience alias for demux results.
pub type Result<T> = std::result::Result<T, DemuxError>;
