//! The link classifier: one graph token in, one HTML rendering out.
//!
//! [`render_links`] drives an ordered decision list over the
//! space-separated tokens of a line. The first matching rule wins:
//!
//! 1. empty token → a single space (separators survive one-for-one)
//! 2. bracketed absolute IRI → anchor or escaped text by path prefix
//! 3. prefixed name → definition or internal anchor by prefix table
//! 4. anything else → the token verbatim
//!
//! The classifier is pure: no state, same input, same output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::{decode_char_refs, escape_html};
use crate::prefixes::PrefixTable;

/// Path prefixes served by the entity API; these become in-place
/// navigation targets.
const API_PATHS: [&str; 2] = ["/api/entities", "/api/s/"];
/// Path prefix of the navigation views.
const NAV_PATH: &str = "/nav";
/// Path prefix of stored content objects.
const CONTENT_PATH: &str = "/content";
/// Path prefixes of bundled static resources (API console, OpenAPI docs).
const STATIC_PATHS: [&str; 2] = ["/webjars", "/v3"];

/// Captures: 1 = full IRI without brackets, 2 = scheme://host[:port],
/// 3 = /path, 4 = query without the `?`.
static BRACKETED_IRI: Lazy<Regex> = Lazy::new(|| {
    crate::pattern(r"^<((https?://[a-zA-Z0-9._-]+[:0-9]*)(/[a-zA-Z0-9._#/-]*)\??(.*))>")
});

/// Captures: 1 = prefix label (lowercase), 2 = local name.
static PREFIXED_NAME: Lazy<Regex> =
    Lazy::new(|| crate::pattern(r"^([a-z]+):([a-zA-Z][a-zA-Z0-9]+)"));

/// Renders one line of a serialized graph fragment as HTML.
///
/// The line is split on single spaces. Each piece is decoded with
/// [`decode_char_refs`] and classified independently; every rendered piece
/// is followed by a single space and empty pieces contribute one space, so
/// the token separators of the input survive one-for-one.
#[must_use]
pub fn render_links(line: &str, prefixes: &PrefixTable) -> String {
    let mut output = String::new();
    for piece in line.split(' ') {
        let token = decode_char_refs(piece);
        if token.is_empty() {
            output.push(' ');
            continue;
        }
        output.push_str(&classify(&token, prefixes));
        output.push(' ');
    }
    output
}

/// Rewrites a followed internal link target from the API namespace to the
/// navigation namespace: a leading `/api` becomes `/nav`.
///
/// `/api/entities/123` → `/nav/entities/123`. Targets outside the API
/// namespace pass through unchanged.
#[must_use]
pub fn rewrite_internal_href(href: &str) -> String {
    match href.strip_prefix("/api") {
        Some(rest) => format!("/nav{rest}"),
        None => href.to_string(),
    }
}

fn classify(token: &str, prefixes: &PrefixTable) -> String {
    if let Some(caps) = BRACKETED_IRI.captures(token) {
        return render_iri(&caps);
    }
    if let Some(caps) = PREFIXED_NAME.captures(token) {
        return render_prefixed(token, &caps, prefixes);
    }
    token.to_string()
}

fn render_iri(caps: &Captures<'_>) -> String {
    let full = &caps[1];
    let path = &caps[3];
    let query = &caps[4];

    if API_PATHS.iter().any(|api| path.starts_with(api)) {
        let href = join_query(path, query);
        // Without a query the display keeps the angle brackets, escaped;
        // with one it drops them.
        let display = if query.is_empty() {
            format!("&lt;{full}&gt;")
        } else {
            full.to_string()
        };
        return format!(r#"<a class="internal" rel="next" href="{href}">{display}</a>"#);
    }
    if path.starts_with(NAV_PATH) {
        let href = join_query(path, query);
        return format!(r#"<a class="internal" rel="next" href="{href}">{full}</a>"#);
    }
    if path.starts_with(CONTENT_PATH) {
        return format!(r#"<a class="content" rel="next" href="{path}">{full}</a>"#);
    }
    if STATIC_PATHS.iter().any(|stat| path.starts_with(stat)) {
        return format!(
            r#"<a class="external" target="_blank" rel="external" href="{full}">{full}</a>"#
        );
    }
    format!("&lt;{}&gt;", escape_html(full))
}

fn render_prefixed(token: &str, caps: &Captures<'_>, prefixes: &PrefixTable) -> String {
    let label = &caps[1];
    let local = &caps[2];
    match prefixes.get(label) {
        Some(entry) if entry.external => {
            let url = entry.url.as_str();
            format!(
                r#"<a class="definition" target="_blank" rel="external" href="{url}{local}">{token}</a>"#
            )
        }
        _ => format!(r#"<a class="internal" rel="next" href="{token}">{token}</a>"#),
    }
}

fn join_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
