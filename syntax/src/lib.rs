//! Ordered-priority tokenizer for Turtle/TriG graph serializations.
//!
//! The `graphnav-syntax` crate lexes a serialized graph document into a
//! [`TokenStream`]: an arena of spanned tokens in which the significant
//! (non-whitespace) tokens form a doubly-linked sequence addressed by
//! integer handles. Patterns are tried in a fixed declaration order and the
//! first match at the cursor wins — there is no longest-match comparison,
//! so the order of [`patterns::TABLE`] is part of the grammar.
//!
//! # Entry Point
//!
//! ```
//! let stream = graphnav_syntax::tokenize("@prefix ex: <http://example.org/> .")?;
//! assert_eq!(stream.len(), 1);
//! # Ok::<(), graphnav_syntax::SyntaxError>(())
//! ```
//!
//! Lexing is all-or-nothing: input that no pattern claims raises a fatal
//! [`SyntaxError`] carrying the offending remainder, and the caller is
//! expected to abort its render cycle.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod lexer;
pub mod patterns;
pub mod token;

pub use lexer::{tokenize, SyntaxError};
pub use token::{Token, TokenKind, TokenStream};
