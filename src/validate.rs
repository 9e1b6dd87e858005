//! Template validation against a known set of work-item fields.

use serde::Serialize;

use crate::tokenizer;

pub const INVALID_TEMPLATE: &str = "The template is invalid.";
pub const MISMATCHED_MARKERS: &str =
    "The number of opening '${' and closing '}' tokens should be equal.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub error_messages: Vec<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error_messages: Vec::new(),
        }
    }

    fn failed(error_messages: Vec<String>) -> Self {
        Self {
            is_valid: false,
            error_messages,
        }
    }
}

pub fn unknown_field_message(name: &str) -> String {
    format!("WorkItem field '{name}' does not exists.")
}

/// Well-formedness and marker-count checks, without looking at field names.
///
/// Returns the first failing message, or `None` when the template is usable.
pub fn structure_error(template: &str) -> Option<&'static str> {
    if !tokenizer::is_valid(template) {
        return Some(INVALID_TEMPLATE);
    }
    let tokens = tokenizer::spans(template).len();
    let opens = tokenizer::count_open_markers(template);
    let closes = tokenizer::count_close_markers(template);
    if tokens != opens || opens != closes {
        return Some(MISMATCHED_MARKERS);
    }
    None
}

/// Checks structure first, then marker counts, then field names.
///
/// Stops at the first failing check. The field check reports every unknown
/// field, once each, in order of first reference.
pub fn validate<S: AsRef<str>>(template: &str, known_field_names: &[S]) -> Validation {
    if let Some(msg) = structure_error(template) {
        return Validation::failed(vec![msg.to_string()]);
    }

    let mut unknown: Vec<&str> = Vec::new();
    for token in tokenizer::tokens(template) {
        let name = tokenizer::field_name(token);
        let known = known_field_names.iter().any(|k| k.as_ref() == name);
        if !known && !unknown.contains(&name) {
            unknown.push(name);
        }
    }
    if !unknown.is_empty() {
        return Validation::failed(unknown.into_iter().map(unknown_field_message).collect());
    }

    Validation::ok()
}
