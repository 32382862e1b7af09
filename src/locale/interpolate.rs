//! `{{placeholder}}` substitution for translated strings.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Replace `{{name}}` occurrences with the matching parameter value.
///
/// Whitespace inside the braces is ignored. Placeholders without a
/// parameter are left untouched so the gap stays visible.
pub fn interpolate<'t>(template: &'t str, params: &[(&str, &str)]) -> Cow<'t, str> {
    if params.is_empty() {
        return Cow::Borrowed(template);
    }

    placeholder_regex().replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// Names of all placeholders used in `template`.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
