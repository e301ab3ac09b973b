//! Fragment routing: paragraph split, first-line classification, and the
//! per-kind renderers.
//!
//! A serialized graph document is split on blank lines; each fragment is
//! classified by inspecting only its first line and rendered by exactly one
//! renderer. Rendering a fragment never touches another fragment's output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RenderError, Result};
use crate::escape::decode_char_refs;
use crate::links::render_links;
use crate::prefixes::PrefixTable;

/// Where a fragment's HTML belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// `@prefix` header block, rendered as styled namespace lines.
    Prefix,
    /// Navigation block (hydra vocabulary in the first statement).
    Navigation,
    /// Everything else: entity content.
    Content,
}

/// A routed fragment with its rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment {
    /// The renderer that produced this fragment.
    pub kind: FragmentKind,
    /// Rendered HTML, ready for region injection.
    pub html: String,
}

/// Captures: 1 = leading text, 2 = the `@prefix` keyword, 3 = label,
/// 4 = namespace IRI.
static PREFIX_LINE: Lazy<Regex> =
    Lazy::new(|| crate::pattern(r"(.*)(@prefix)\s([a-z]+):\s<(.*)>\s"));

/// Splits a document into blank-line-separated fragments.
pub fn split_fragments(doc: &str) -> impl Iterator<Item = &str> {
    doc.split("\n\n")
}

/// Classifies a fragment by the space-separated words of its first line:
/// a first word containing `@prefix` makes a prefix fragment, a third word
/// containing `hydra` makes a navigation fragment, anything else is
/// content.
#[must_use]
pub fn classify_fragment(fragment: &str) -> FragmentKind {
    let first_line = fragment.lines().next().unwrap_or("");
    let mut words = first_line.split(' ');
    let first = words.next();
    let third = words.nth(1);
    if first.is_some_and(|w| w.contains("@prefix")) {
        FragmentKind::Prefix
    } else if third.is_some_and(|w| w.contains("hydra")) {
        FragmentKind::Navigation
    } else {
        FragmentKind::Content
    }
}

/// Renders a prefix fragment as styled namespace lines, wrapped in a
/// fragment container.
///
/// Each line is decoded and must match the positional
/// `@prefix label: <iri> .` pattern; the match is re-emitted as a
/// `<span class="ns">` line.
///
/// # Errors
///
/// Returns [`RenderError::MalformedPrefixLine`] for a line that does not
/// match the positional pattern; the render cycle aborts.
pub fn render_prefix_fragment(fragment: &str) -> Result<String> {
    let mut html = String::new();
    for raw in fragment.lines() {
        let line = decode_char_refs(raw);
        let caps =
            PREFIX_LINE
                .captures(&line)
                .ok_or_else(|| RenderError::MalformedPrefixLine {
                    line: line.to_string(),
                })?;
        html.push_str(&format!(
            "{leading}<span class=\"ns\">{keyword} {label}: &lt;{iri}&gt; .</span><br>",
            leading = &caps[1],
            keyword = &caps[2],
            label = &caps[3],
            iri = &caps[4],
        ));
    }
    Ok(format!("<div class='fragment'>{html}</div>"))
}

/// Renders a navigation fragment: links per line, `<br>`-joined, wrapped in
/// a fragment container.
#[must_use]
pub fn render_navigation_fragment(fragment: &str, prefixes: &PrefixTable) -> String {
    let lines: Vec<String> = fragment
        .lines()
        .map(|line| render_links(line, prefixes))
        .collect();
    format!("<div class='fragment'>{}</div>", lines.join("<br>"))
}

/// Renders a content fragment: links per line, lines whose rendering is
/// blank are suppressed.
#[must_use]
pub fn render_content_fragment(fragment: &str, prefixes: &PrefixTable) -> String {
    let lines: Vec<String> = fragment
        .lines()
        .map(|line| render_links(line, prefixes))
        .filter(|rendered| !rendered.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("<div class='fragment'>{}</div>", lines.join("\n"))
}

/// Routes a whole document.
///
/// The document is first validated by the tokenizer (lexing is
/// all-or-nothing), then split, classified, and rendered fragment by
/// fragment. Fragments that trim to nothing or render to nothing are
/// dropped.
///
/// # Errors
///
/// Propagates the tokenizer's [`SyntaxError`](graphnav_syntax::SyntaxError)
/// and the prefix renderer's [`RenderError::MalformedPrefixLine`]; either
/// aborts the cycle with nothing rendered.
pub fn route_document(doc: &str, prefixes: &PrefixTable) -> Result<Vec<RenderedFragment>> {
    graphnav_syntax::tokenize(doc)?;

    let mut rendered = Vec::new();
    for fragment in split_fragments(doc) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let kind = classify_fragment(fragment);
        let html = match kind {
            FragmentKind::Prefix => render_prefix_fragment(fragment)?,
            FragmentKind::Navigation => render_navigation_fragment(fragment, prefixes),
            FragmentKind::Content => render_content_fragment(fragment, prefixes),
        };
        if html.is_empty() {
            continue;
        }
        rendered.push(RenderedFragment { kind, html });
    }
    Ok(rendered)
}
