//! Character-reference and HTML escaping helpers.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CHAR_REF: Lazy<Regex> = Lazy::new(|| crate::pattern(r"&#(\d+);"));

/// Decodes numeric character references (`&#NN;`) back to their characters.
///
/// References that do not name a valid scalar value are left untouched.
#[must_use]
pub fn decode_char_refs(text: &str) -> Cow<'_, str> {
    CHAR_REF.replace_all(text, |caps: &Captures<'_>| {
        let decoded = caps[1].parse::<u32>().ok().and_then(char::from_u32);
        match decoded {
            Some(ch) => ch.to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Escapes markup-significant characters and the U+00A0..=U+9999 range as
/// numeric character references.
///
/// The counterpart of [`decode_char_refs`], applied by producers that embed
/// a serialized graph inside an HTML document.
#[must_use]
pub fn encode_char_refs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if matches!(ch, '<' | '>' | '&') || (0xA0..=0x9999).contains(&code) {
            out.push_str(&format!("&#{code};"));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Escapes text for inclusion in HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
