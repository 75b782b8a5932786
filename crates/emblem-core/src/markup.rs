//! Helpers for producing and post-processing SVG markup text.

use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

/// Matches either a complete tag or a run of whitespace.
static TAG_OR_WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Collapses whitespace between tags into single spaces.
///
/// Any complete `<...>` tag is copied through unchanged, so whitespace inside
/// attribute values survives. Every other run of whitespace becomes one space.
/// Attribute values that themselves contain `<` or `>` are not handled.
///
/// # Examples
///
/// ```
/// # use emblem_core::markup::minimize;
/// let svg = "<svg>\n    <text x=\"1\"   y=\"2\">A   B</text>\n</svg>";
/// assert_eq!(
///     minimize(svg),
///     "<svg> <text x=\"1\"   y=\"2\">A B</text> </svg>"
/// );
/// ```
pub fn minimize(markup: &str) -> String {
    let pattern = TAG_OR_WHITESPACE
        .get_or_init(|| Regex::new(r"(<.*?>)|\s+").expect("pattern is a valid regex"));

    pattern
        .replace_all(markup, |caps: &Captures| match caps.get(1) {
            Some(tag) => tag.as_str().to_string(),
            None => " ".to_string(),
        })
        .into_owned()
}

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

/// Escapes a string for use as element text content.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

fn escape(value: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
