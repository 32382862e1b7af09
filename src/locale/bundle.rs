use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Load state of one locale's bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleState {
    Unrequested,
    Loading,
    Loaded,
    Failed,
}

impl BundleState {
    /// Loaded or Failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, BundleState::Loaded | BundleState::Failed)
    }
}

impl fmt::Display for BundleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BundleState::Unrequested => "unrequested",
            BundleState::Loading => "loading",
            BundleState::Loaded => "loaded",
            BundleState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A loaded translation bundle: key → localized string for one locale.
///
/// Bundles are immutable once installed; the loader replaces the whole
/// bundle on reload, so readers never see a half-populated map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    locale: String,
    entries: HashMap<String, String>,
}

impl LocaleBundle {
    /// Wrap the entries fetched for `locale`.
    pub fn new(locale: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    /// Locale tag this bundle belongs to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Localized string for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check if `key` has an entry (empty values included).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All key/value pairs.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Number of keys in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bundle has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
