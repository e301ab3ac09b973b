//! Scan loop: ordered-priority matching over the pattern table.

use thiserror::Error;

use crate::patterns;
use crate::token::{Token, TokenStream};

/// Length cap for the remainder snippet carried by [`SyntaxError`].
const SNIPPET_LIMIT: usize = 40;

/// Fatal lexing failure: no pattern matched at `offset`.
///
/// The snippet is the head of the unmatched remainder, truncated to a
/// character boundary. Lexing is all-or-nothing, so a `SyntaxError` aborts
/// the render cycle that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no token pattern matches at byte {offset}: {snippet:?}")]
pub struct SyntaxError {
    /// Byte offset of the first unmatched character.
    pub offset: usize,
    /// Head of the unmatched remainder.
    pub snippet: String,
}

impl SyntaxError {
    fn at(offset: usize, rest: &str) -> Self {
        let mut end = rest.len().min(SNIPPET_LIMIT);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        SyntaxError {
            offset,
            snippet: rest[..end].to_string(),
        }
    }
}

/// Lexes `source` into a [`TokenStream`].
///
/// At each cursor position the patterns of [`patterns::TABLE`] are tried in
/// declaration order and the first match wins. Whitespace matches are kept
/// in the arena for span coverage but stay outside the significant linked
/// sequence.
///
/// # Errors
///
/// Returns a [`SyntaxError`] as soon as no pattern matches at the cursor;
/// the error carries the offset and the head of the unmatched remainder.
pub fn tokenize(source: &str) -> Result<TokenStream, SyntaxError> {
    let mut stream = TokenStream::default();
    let mut pos = 0;

    'scan: while pos < source.len() {
        let rest = &source[pos..];
        for (kind, pattern) in patterns::TABLE.iter() {
            let Some(found) = pattern.find(rest) else {
                continue;
            };
            let raw = found.as_str();
            let handle = stream.push(Token::new(*kind, raw, pos..pos + raw.len()));
            if !kind.is_whitespace() {
                stream.link(handle);
            }
            pos += raw.len();
            continue 'scan;
        }
        return Err(SyntaxError::at(pos, rest));
    }

    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn kinds(source: &str) -> Result<Vec<TokenKind>, SyntaxError> {
        Ok(tokenize(source)?.significant().map(|t| t.kind).collect())
    }

    #[test]
    fn empty_input_yields_empty_stream() -> Result<(), SyntaxError> {
        let stream = tokenize("")?;
        assert!(stream.is_empty());
        assert!(stream.all().is_empty());
        Ok(())
    }

    #[test]
    fn prefix_directive_is_one_token() -> Result<(), SyntaxError> {
        let stream = tokenize("@prefix ex: <http://example.org/> .")?;
        assert_eq!(stream.len(), 1);
        let first = stream.first();
        assert_eq!(first.map(|t| t.kind), Some(TokenKind::PrefixDirective));
        assert_eq!(
            first.map(|t| t.text.as_str()),
            Some("@prefix ex: <http://example.org/> .")
        );
        Ok(())
    }

    #[test]
    fn directive_keyword_is_case_insensitive() -> Result<(), SyntaxError> {
        assert_eq!(
            kinds("@PREFIX ex: <http://example.org/> .")?,
            vec![TokenKind::PrefixDirective]
        );
        assert_eq!(
            kinds("@Base <http://example.org/> .")?,
            vec![TokenKind::BaseDirective]
        );
        Ok(())
    }

    #[test]
    fn unmatched_input_is_fatal() {
        let result = tokenize("@prefix ex: <http://e/> . &rest");
        assert!(result.is_err());
        if let Err(err) = result {
            assert_eq!(err.offset, 26);
            assert!(err.snippet.starts_with('&'), "snippet: {}", err.snippet);
        }
    }

    #[test]
    fn statement_tokens_in_order() -> Result<(), SyntaxError> {
        let got = kinds("_:doc a <http://example.org/Doc> ;\n  ex:title \"Home\"@en .")?;
        assert_eq!(
            got,
            vec![
                TokenKind::BlankNode,
                TokenKind::KeywordA,
                TokenKind::Iri,
                TokenKind::StatementSeparator,
                TokenKind::PrefixedName,
                TokenKind::Literal,
                TokenKind::LanguageTag,
                TokenKind::StatementTerminator,
            ]
        );
        Ok(())
    }

    #[test]
    fn quoted_triple_wins_over_iri() -> Result<(), SyntaxError> {
        let got = kinds("<<<http://e/s> <http://e/p> <http://e/o>>> .")?;
        assert_eq!(
            got,
            vec![TokenKind::QuotedTriple, TokenKind::StatementTerminator]
        );
        Ok(())
    }

    #[test]
    fn keyword_a_only_without_colon() -> Result<(), SyntaxError> {
        assert_eq!(kinds("a")?, vec![TokenKind::KeywordA]);
        assert_eq!(kinds("ab:cd")?, vec![TokenKind::PrefixedName]);
        Ok(())
    }

    #[test]
    fn graph_braces_and_datatype() -> Result<(), SyntaxError> {
        let got = kinds("{ \"5\"^^xsd:integer . }")?;
        assert_eq!(
            got,
            vec![
                TokenKind::GraphOpen,
                TokenKind::Literal,
                TokenKind::DatatypeAnnotation,
                TokenKind::StatementTerminator,
                TokenKind::GraphClose,
            ]
        );
        Ok(())
    }

    #[test]
    fn comment_runs_to_end_of_line() -> Result<(), SyntaxError> {
        let stream = tokenize("# heading\na")?;
        let texts: Vec<_> = stream.significant().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["# heading", "a"]);
        Ok(())
    }

    #[test]
    fn spans_cover_every_byte() -> Result<(), SyntaxError> {
        let source = "@prefix ex: <http://e/> .\n\nex:a a ex:B .";
        let stream = tokenize(source)?;
        let mut covered = 0;
        for token in stream.all() {
            assert_eq!(token.span.start, covered);
            covered = token.span.end;
        }
        assert_eq!(covered, source.len());
        Ok(())
    }

    #[test]
    fn whitespace_stays_out_of_the_linked_chain() -> Result<(), SyntaxError> {
        let stream = tokenize("a   .")?;
        assert_eq!(stream.all().len(), 3);
        assert_eq!(stream.len(), 2);
        let first = stream.first();
        let next = first
            .and_then(|t| stream.next_of(t))
            .map(|t| t.text.as_str());
        assert_eq!(next, Some("."));
        Ok(())
    }

    #[test]
    fn bare_at_word_is_a_language_tag() -> Result<(), SyntaxError> {
        // A malformed directive (no IRI) falls through to the language-tag
        // pattern rather than erroring.
        assert_eq!(kinds("@prefix")?, vec![TokenKind::LanguageTag]);
        assert_eq!(kinds("@en-US")?, vec![TokenKind::LanguageTag]);
        Ok(())
    }
}
