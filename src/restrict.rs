//! Branch-name restrictions: character replacement, casing and length cap.

use crate::settings::SettingsDocument;

/// Kept as-is alongside ASCII alphanumerics.
pub const PATH_SEPARATORS: &[char] = &['/', '-'];

/// Normalizes a branch body.
///
/// Runs in a fixed order: replace disallowed characters, lowercase when
/// configured, then truncate to `branch_name_max_length` characters. The
/// result is stable under a second application.
pub fn enforce(body: &str, settings: &SettingsDocument) -> String {
    let replacement = settings.non_alphanumeric_characters_replacement;
    let mut out: String = body
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == replacement || PATH_SEPARATORS.contains(&ch) {
                ch
            } else {
                replacement
            }
        })
        .collect();

    if settings.lowercase_branch_name {
        out = out.to_lowercase();
    }

    if let Some(max) = settings.branch_name_max_length {
        if let Some((cut, _)) = out.char_indices().nth(max) {
            out.truncate(cut);
        }
    }
    out
}
