//! Template selection and prefix/body splitting.

use crate::settings::SettingsDocument;

/// Splits an immutable prefix from the editable body.
pub const PREFIX_DELIMITER: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateParts<'a> {
    pub prefix: &'a str,
    pub body: &'a str,
}

/// Splits a raw template at its first `|`.
///
/// Without a delimiter the whole template is body and the prefix is empty.
/// Splitting happens before substitution, so a field value containing `|`
/// never moves the boundary.
pub fn split_template(template: &str) -> TemplateParts<'_> {
    match template.split_once(PREFIX_DELIMITER) {
        Some((prefix, body)) => TemplateParts { prefix, body },
        None => TemplateParts {
            prefix: "",
            body: template,
        },
    }
}

/// Active per-type override if there is one, else the default branch template.
pub fn branch_template<'a>(type_name: &str, settings: &'a SettingsDocument) -> &'a str {
    settings
        .override_template(type_name)
        .unwrap_or(&settings.default_branch_name_template)
}

pub fn pull_request_template(settings: &SettingsDocument) -> &str {
    &settings.default_pull_request_name_template
}
