//! Language types: catalog rows and validated handles into the registry.
//!
//! `LanguageDescriptor` is one row of the catalog. `Language` is a `Copy`
//! handle that can only be constructed for an api key the registry knows.

use crate::i18n::catalog::{AUTOMATIC, AUTOMATIC_API_KEY};
use crate::i18n::{romanization, LanguageRegistry, RegistryError};

/// One entry of the language catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageDescriptor {
    /// Identifier sent to the translation service (e.g., "ja", "zh_tw")
    pub api_key: &'static str,

    /// Native or commonly used name (e.g., "Japanese", "Chinese (Traditional)")
    pub display_name: &'static str,

    /// Best-effort ISO 639-1/639-2 code or locale tag
    pub iso_code: Option<&'static str>,
}

impl LanguageDescriptor {
    /// Create a descriptor. Usable in `const` context for static catalogs.
    pub const fn new(
        api_key: &'static str,
        display_name: &'static str,
        iso_code: Option<&'static str>,
    ) -> Self {
        Self {
            api_key,
            display_name,
            iso_code,
        }
    }

    /// Whether this language's display name is in the romanization class.
    pub fn needs_romanization(&self) -> bool {
        romanization::needs_romanization(self)
    }
}

/// A language validated against the global registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    descriptor: &'static LanguageDescriptor,
}

impl Language {
    /// Create a Language from an api key.
    ///
    /// # Returns
    /// * `Ok(Language)` if the key is in the built-in catalog
    /// * `Err(RegistryError::NotFound)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let japanese = Language::from_api_key("ja")?;
    /// assert!(japanese.needs_romanization());
    /// ```
    pub fn from_api_key(api_key: &str) -> Result<Language, RegistryError> {
        LanguageRegistry::get()
            .find_by_api_key(api_key)
            .map(|descriptor| Language { descriptor })
    }

    /// The "Automatic" entry (source-language detection).
    pub fn automatic() -> Language {
        Language {
            descriptor: &AUTOMATIC,
        }
    }

    pub fn api_key(&self) -> &'static str {
        self.descriptor.api_key
    }

    pub fn display_name(&self) -> &'static str {
        self.descriptor.display_name
    }

    pub fn iso_code(&self) -> Option<&'static str> {
        self.descriptor.iso_code
    }

    /// Get the full catalog row.
    pub fn descriptor(&self) -> &'static LanguageDescriptor {
        self.descriptor
    }

    /// Check if this is the "Automatic" pseudo-language.
    pub fn is_automatic(&self) -> bool {
        self.descriptor.api_key == AUTOMATIC_API_KEY
    }

    pub fn needs_romanization(&self) -> bool {
        self.descriptor.needs_romanization()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_api_key Tests ====================

    #[test]
    fn test_from_api_key_japanese() {
        let language = Language::from_api_key("ja").expect("Should succeed");
        assert_eq!(language.api_key(), "ja");
        assert_eq!(language.display_name(), "Japanese");
        assert_eq!(language.iso_code(), Some("ja"));
    }

    #[test]
    fn test_from_api_key_regional_variant() {
        let language = Language::from_api_key("zh_tw").expect("Should succeed");
        assert_eq!(language.display_name(), "Chinese (Traditional)");
        assert_eq!(language.iso_code(), Some("zh-TW"));
    }

    #[test]
    fn test_from_api_key_invalid() {
        let result = Language::from_api_key("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("xx"));
    }

    #[test]
    fn test_from_api_key_is_case_sensitive() {
        assert!(Language::from_api_key("JA").is_err());
        assert!(Language::from_api_key("automatic").is_err());
    }

    #[test]
    fn test_from_api_key_empty() {
        assert!(Language::from_api_key("").is_err());
    }

    // ==================== Automatic Tests ====================

    #[test]
    fn test_automatic() {
        let auto = Language::automatic();
        assert_eq!(auto.api_key(), "Automatic");
        assert!(auto.is_automatic());
        assert!(!Language::from_api_key("en").unwrap().is_automatic());
    }

    // ==================== Alias Tests ====================

    #[test]
    fn test_aliases_are_distinct_languages() {
        let he = Language::from_api_key("he").unwrap();
        let iw = Language::from_api_key("iw").unwrap();

        assert_ne!(he, iw);
        assert_eq!(he.display_name(), iw.display_name());
        assert_eq!(he.needs_romanization(), iw.needs_romanization());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_copy_and_equality() {
        let lang1 = Language::from_api_key("fr").unwrap();
        let lang2 = lang1;
        assert_eq!(lang1, lang2);
        assert_eq!(lang1, Language::from_api_key("fr").unwrap());
    }

    #[test]
    fn test_descriptor_const_new() {
        const KLINGON: LanguageDescriptor =
            LanguageDescriptor::new("klingon", "Klingon", Some("tlh"));
        assert_eq!(KLINGON.api_key, "klingon");
        assert!(!KLINGON.needs_romanization());
    }
}
