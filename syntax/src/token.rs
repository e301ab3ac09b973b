//! Token model: kinds, spanned tokens, and the arena-backed stream.

use std::ops::Range;

/// Categories produced by the tokenizer.
///
/// The matching priority between kinds is fixed by the order of
/// [`crate::patterns::TABLE`], not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of whitespace. Stored for span coverage, excluded from the
    /// linked significant sequence.
    Whitespace,
    /// A complete `@prefix label: <iri> .` directive.
    PrefixDirective,
    /// A complete `@base <iri> .` directive.
    BaseDirective,
    /// A `#` comment running to the end of the line.
    Comment,
    /// An RDF-star quoted triple, `<< … >>`.
    QuotedTriple,
    /// A bracketed IRI, `<…>`.
    Iri,
    /// A blank-node label, `_:name`.
    BlankNode,
    /// A bracketed anonymous blank node, `[ … ]`.
    BlankNodeCollection,
    /// A quoted literal, `"…"`.
    Literal,
    /// A prefixed name, `label:Local`.
    PrefixedName,
    /// The `a` shorthand for `rdf:type`.
    KeywordA,
    /// A language tag, `@en` or `@en-US`.
    LanguageTag,
    /// A datatype annotation, `^^xsd:integer`.
    DatatypeAnnotation,
    /// The `;` statement separator.
    StatementSeparator,
    /// The `.` statement terminator.
    StatementTerminator,
    /// The `{` opening a named-graph block.
    GraphOpen,
    /// The `}` closing a named-graph block.
    GraphClose,
}

impl TokenKind {
    /// True for the whitespace kind, which never joins the linked sequence.
    #[must_use]
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }

    /// Stable lowercase label, used by diagnostic output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::PrefixDirective => "prefix-directive",
            TokenKind::BaseDirective => "base-directive",
            TokenKind::Comment => "comment",
            TokenKind::QuotedTriple => "quoted-triple",
            TokenKind::Iri => "iri",
            TokenKind::BlankNode => "blank-node",
            TokenKind::BlankNodeCollection => "blank-node-collection",
            TokenKind::Literal => "literal",
            TokenKind::PrefixedName => "prefixed-name",
            TokenKind::KeywordA => "keyword-a",
            TokenKind::LanguageTag => "language-tag",
            TokenKind::DatatypeAnnotation => "datatype-annotation",
            TokenKind::StatementSeparator => "statement-separator",
            TokenKind::StatementTerminator => "statement-terminator",
            TokenKind::GraphOpen => "graph-open",
            TokenKind::GraphClose => "graph-close",
        }
    }
}

/// A single lexed token.
///
/// `text` is the trimmed match; `span` is the byte range of the raw match in
/// the source, so the original document (whitespace runs included) can be
/// reconstructed from the arena plus the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The pattern category that claimed this token.
    pub kind: TokenKind,
    /// The matched text with surrounding whitespace trimmed.
    pub text: String,
    /// Byte range of the raw (untrimmed) match in the source.
    pub span: Range<usize>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, raw: &str, span: Range<usize>) -> Self {
        Token {
            kind,
            text: raw.trim().to_string(),
            span,
            prev: None,
            next: None,
        }
    }

    /// Handle of the previous significant token, if any.
    #[must_use]
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Handle of the next significant token, if any.
    #[must_use]
    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// Arena of all matched tokens in source order.
///
/// Whitespace tokens are stored (their spans keep the arena covering every
/// byte of the source) but only significant tokens are wired into the
/// prev/next sequence and counted by [`TokenStream::len`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    first: Option<usize>,
    last: Option<usize>,
    significant: usize,
}

impl TokenStream {
    pub(crate) fn push(&mut self, token: Token) -> usize {
        let handle = self.tokens.len();
        self.tokens.push(token);
        handle
    }

    pub(crate) fn link(&mut self, handle: usize) {
        if let Some(tail) = self.last {
            self.tokens[tail].next = Some(handle);
            self.tokens[handle].prev = Some(tail);
        } else {
            self.first = Some(handle);
        }
        self.last = Some(handle);
        self.significant += 1;
    }

    /// Every matched token in source order, whitespace included.
    #[must_use]
    pub fn all(&self) -> &[Token] {
        &self.tokens
    }

    /// Token behind `handle`, if the handle is in range.
    #[must_use]
    pub fn get(&self, handle: usize) -> Option<&Token> {
        self.tokens.get(handle)
    }

    /// First significant token, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Token> {
        self.first.and_then(|handle| self.tokens.get(handle))
    }

    /// Significant tokens in source order.
    pub fn significant(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|token| !token.kind.is_whitespace())
    }

    /// Number of significant tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.significant
    }

    /// True when the stream holds no significant token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.significant == 0
    }

    /// Significant successor of `token`, following the linked sequence.
    #[must_use]
    pub fn next_of(&self, token: &Token) -> Option<&Token> {
        token.next.and_then(|handle| self.tokens.get(handle))
    }

    /// Significant predecessor of `token`, following the linked sequence.
    #[must_use]
    pub fn prev_of(&self, token: &Token) -> Option<&Token> {
        token.prev.and_then(|handle| self.tokens.get(handle))
    }
}
