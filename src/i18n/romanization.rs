//! Romanization classification.
//!
//! Membership is keyed on the display name, so historical aliases that share
//! a name ("iw"/"he" → "Hebrew") always classify the same way.

use crate::i18n::LanguageDescriptor;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Display names of languages written in non-Latin scripts that benefit
/// from a romanized rendering next to the translation.
pub const ROMANIZATION_CLASS: &[&str] = &[
    "Japanese",
    "Chinese (Simplified)",
    "Chinese (Traditional)",
    "Korean",
    "Thai",
    "Vietnamese",
    "Hindi",
    "Bengali",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Arabic",
    "Persian",
    "Urdu",
    "Hebrew",
    "Russian",
    "Ukrainian",
    "Belarusian",
    "Bulgarian",
    "Georgian",
    "Armenian",
    "Mongolian",
    "Myanmar (Burmese)",
    "Khmer",
    "Lao",
    "Tibetan",
    "Nepali",
    "Sinhala",
    "Gujarati",
    "Punjabi (Gurmukhi)",
    "Punjabi (Shahmukhi)",
    "Marathi",
    "Sanskrit",
    "Odia (Oriya)",
    "Greek",
];

/// Returns true iff `descriptor.display_name` is in [`ROMANIZATION_CLASS`].
///
/// Exact, case-sensitive match. Unknown names yield `false`.
pub fn needs_romanization(descriptor: &LanguageDescriptor) -> bool {
    romanization_set().contains(descriptor.display_name)
}

static ROMANIZATION_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn romanization_set() -> &'static HashSet<&'static str> {
    ROMANIZATION_SET.get_or_init(|| ROMANIZATION_CLASS.iter().copied().collect())
}
