//! Field substitution into template segments.

use crate::naming::merge_missing;
use crate::template::TemplateParts;
use crate::tokenizer;
use crate::work_item::FieldMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    /// Field names referenced by the segment but absent from the field map,
    /// in order of first reference.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParts {
    pub prefix: String,
    pub body: String,
    pub missing: Vec<String>,
}

/// Replaces every token in `segment` with its field value.
///
/// The output is built in one pass over the source text, so a field value
/// that itself looks like a token is copied verbatim and never re-expanded.
/// Fields absent from `fields` resolve to an empty string.
pub fn resolve(segment: &str, fields: &FieldMap) -> Resolved {
    let mut text = String::with_capacity(segment.len());
    let mut missing: Vec<String> = Vec::new();
    let mut last = 0;
    for span in tokenizer::spans(segment) {
        text.push_str(&segment[last..span.start]);
        let name = tokenizer::field_name(&segment[span.clone()]);
        match fields.get(name) {
            Some(value) => text.push_str(value),
            None => {
                if !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        }
        last = span.end;
    }
    text.push_str(&segment[last..]);
    Resolved { text, missing }
}

/// Resolves prefix and body independently.
pub fn resolve_parts(parts: TemplateParts<'_>, fields: &FieldMap) -> ResolvedParts {
    let prefix = resolve(parts.prefix, fields);
    let body = resolve(parts.body, fields);
    let mut missing = prefix.missing;
    merge_missing(&mut missing, body.missing);
    ResolvedParts {
        prefix: prefix.text,
        body: body.text,
        missing,
    }
}
