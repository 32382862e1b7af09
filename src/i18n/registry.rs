//! Language registry: the catalog of translation source/target languages.
//!
//! The built-in registry is a process-wide singleton initialised once with
//! `OnceLock`. Lookups by api key go through an index built at construction,
//! so selector renders never scan the catalog.

use crate::i18n::catalog::{AUTOMATIC_API_KEY, LANGUAGES};
use crate::i18n::{romanization, LanguageDescriptor};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown language api key: '{api_key}'")]
    NotFound { api_key: String },
}

/// Ordered, immutable language catalog with an api-key index.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Cow<'static, [LanguageDescriptor]>,
    by_api_key: HashMap<&'static str, usize>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry over the built-in catalog.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::build(Cow::Borrowed(LANGUAGES)))
    }

    /// Build an isolated registry over a custom catalog.
    ///
    /// Order is preserved. If an api key repeats, the index keeps the first
    /// occurrence; every row still appears in [`all_languages`](Self::all_languages).
    pub fn from_descriptors(languages: Vec<LanguageDescriptor>) -> Self {
        Self::build(Cow::Owned(languages))
    }

    fn build(languages: Cow<'static, [LanguageDescriptor]>) -> Self {
        let mut by_api_key = HashMap::with_capacity(languages.len());
        for (position, language) in languages.iter().enumerate() {
            if by_api_key.contains_key(language.api_key) {
                warn!(
                    "Duplicate api key '{}' at position {}; keeping the first entry",
                    language.api_key, position
                );
                continue;
            }
            by_api_key.insert(language.api_key, position);
        }

        Self {
            languages,
            by_api_key,
        }
    }

    /// The full catalog, in display order.
    pub fn all_languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    /// Exact, case-sensitive lookup by api key.
    ///
    /// # Returns
    /// * `Ok(&LanguageDescriptor)` whose `api_key` equals `api_key`
    /// * `Err(RegistryError::NotFound)` if no entry has that key
    pub fn find_by_api_key(&self, api_key: &str) -> Result<&LanguageDescriptor, RegistryError> {
        self.by_api_key
            .get(api_key)
            .and_then(|&position| self.languages.get(position))
            .ok_or_else(|| RegistryError::NotFound {
                api_key: api_key.to_string(),
            })
    }

    /// Whether a descriptor belongs to the romanization class.
    pub fn needs_romanization(&self, descriptor: &LanguageDescriptor) -> bool {
        romanization::needs_romanization(descriptor)
    }

    /// The "Automatic" entry, if this catalog has one.
    pub fn automatic(&self) -> Option<&LanguageDescriptor> {
        self.find_by_api_key(AUTOMATIC_API_KEY).ok()
    }

    /// All entries with exactly this display name, aliases included.
    pub fn find_by_display_name(&self, display_name: &str) -> Vec<&LanguageDescriptor> {
        self.languages
            .iter()
            .filter(|language| language.display_name == display_name)
            .collect()
    }

    /// Case-insensitive substring search on display names.
    ///
    /// An empty (or whitespace-only) query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&LanguageDescriptor> {
        let needle = query.trim().to_lowercase();
        self.languages
            .iter()
            .filter(|language| language.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every entry usable as a translation target (all but "Automatic").
    pub fn translation_targets(&self) -> Vec<&LanguageDescriptor> {
        self.languages
            .iter()
            .filter(|language| language.api_key != AUTOMATIC_API_KEY)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Singleton Tests ====================

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    // ==================== Catalog Tests ====================

    #[test]
    fn test_automatic_is_first() {
        let registry = LanguageRegistry::get();
        let first = registry.all_languages().first().expect("catalog is not empty");

        assert_eq!(first.api_key, "Automatic");
        assert_eq!(registry.automatic(), Some(first));
    }

    #[test]
    fn test_catalog_size() {
        let registry = LanguageRegistry::get();
        assert!(registry.len() > 200);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_every_builtin_entry_has_iso_code() {
        let registry = LanguageRegistry::get();
        assert!(registry.all_languages().iter().all(|l| l.iso_code.is_some()));
    }

    #[test]
    fn test_builtin_api_keys_are_unique() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.by_api_key.len(), registry.len());
    }

    // ==================== find_by_api_key Tests ====================

    #[test]
    fn test_find_by_api_key_every_entry() {
        let registry = LanguageRegistry::get();
        for language in registry.all_languages() {
            let found = registry.find_by_api_key(language.api_key).unwrap();
            assert_eq!(found.api_key, language.api_key);
        }
    }

    #[test]
    fn test_find_by_api_key_not_found() {
        let registry = LanguageRegistry::get();
        let error = registry.find_by_api_key("nope").unwrap_err();

        assert_eq!(
            error,
            RegistryError::NotFound {
                api_key: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_find_by_api_key_is_case_sensitive() {
        let registry = LanguageRegistry::get();
        assert!(registry.find_by_api_key("EN").is_err());
        assert!(registry.find_by_api_key("en").is_ok());
    }

    // ==================== Alias Tests ====================

    #[test]
    fn test_hebrew_aliases() {
        let registry = LanguageRegistry::get();
        let he = registry.find_by_api_key("he").unwrap();
        let iw = registry.find_by_api_key("iw").unwrap();

        assert_eq!(he.display_name, "Hebrew");
        assert_eq!(iw.display_name, "Hebrew");
        assert!(registry.needs_romanization(he));
        assert!(registry.needs_romanization(iw));
    }

    #[test]
    fn test_aliases_are_not_deduplicated() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.find_by_display_name("Hebrew").len(), 2);
        assert_eq!(registry.find_by_display_name("Indonesian").len(), 2);
        assert_eq!(registry.find_by_display_name("Yiddish").len(), 2);
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_search_case_insensitive_substring() {
        let registry = LanguageRegistry::get();
        let results = registry.search("german");

        assert!(results.len() >= 6);
        assert!(results.iter().all(|l| l.display_name.starts_with("German")));
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let registry = LanguageRegistry::get();
        let results: Vec<_> = registry.search("chinese").iter().map(|l| l.api_key).collect();

        assert_eq!(results, vec!["zh", "zh_cn", "zh_tw"]);
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.search("  ").len(), registry.len());
    }

    #[test]
    fn test_translation_targets_exclude_automatic() {
        let registry = LanguageRegistry::get();
        let targets = registry.translation_targets();

        assert_eq!(targets.len(), registry.len() - 1);
        assert!(targets.iter().all(|l| l.api_key != "Automatic"));
    }

    // ==================== Custom Registry Tests ====================

    #[test]
    fn test_from_descriptors_duplicate_keeps_first() {
        let registry = LanguageRegistry::from_descriptors(vec![
            LanguageDescriptor::new("xx", "First", None),
            LanguageDescriptor::new("xx", "Second", None),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_api_key("xx").unwrap().display_name, "First");
        assert!(registry.automatic().is_none());
    }

    #[test]
    fn test_from_descriptors_empty() {
        let registry = LanguageRegistry::from_descriptors(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.find_by_api_key("en").is_err());
    }
}
