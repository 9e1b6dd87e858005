//! `${Field.Name}` placeholder scanning.
//!
//! A token starts at the literal marker `${` and runs to the next `}`. The
//! returned token text always includes both delimiters.

use std::ops::Range;

pub const OPEN_MARKER: &str = "${";
pub const CLOSE_MARKER: char = '}';

/// Byte ranges of every recognized token, left to right.
///
/// An unterminated `${` ends the scan; everything after it is literal text.
pub fn spans(template: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = template[from..].find(OPEN_MARKER) {
        let start = from + rel;
        let body_start = start + OPEN_MARKER.len();
        let Some(close) = template[body_start..].find(CLOSE_MARKER) else {
            break;
        };
        let end = body_start + close + 1;
        out.push(start..end);
        from = end;
    }
    out
}

/// Token strings in order of appearance, duplicates preserved.
pub fn tokens(template: &str) -> Vec<&str> {
    spans(template)
        .into_iter()
        .map(|r| &template[r])
        .collect()
}

/// True when every `${` is closed by a `}` before another `${` opens, and no
/// token is empty.
///
/// A stray `}` outside any token is not rejected here; see
/// [`crate::validate::validate`] for the marker-count check.
pub fn is_valid(template: &str) -> bool {
    let mut rest = template;
    while let Some(open) = rest.find(OPEN_MARKER) {
        let after = &rest[open + OPEN_MARKER.len()..];
        let Some(close) = after.find(CLOSE_MARKER) else {
            return false;
        };
        let name = &after[..close];
        if name.is_empty() || name.contains(OPEN_MARKER) {
            return false;
        }
        rest = &after[close + 1..];
    }
    true
}

/// Field name referenced by a token, with the delimiters stripped.
pub fn field_name(token: &str) -> &str {
    let inner = token.strip_prefix(OPEN_MARKER).unwrap_or(token);
    inner.strip_suffix(CLOSE_MARKER).unwrap_or(inner)
}

pub fn count_open_markers(template: &str) -> usize {
    template.matches(OPEN_MARKER).count()
}

pub fn count_close_markers(template: &str) -> usize {
    template.matches(CLOSE_MARKER).count()
}
