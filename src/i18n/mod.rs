//! Language catalog for translation source and target selection.
//!
//! This module holds the static list of natural languages the translation
//! service accepts, with key lookup and the romanization classification.
//! It is independent from the UI locale loader in [`crate::locale`]: a UI
//! locale tag ("pt") and a translation api key ("pt_br") live in different
//! identifier spaces.
//!
//! # Architecture
//!
//! - `catalog`: the built-in rows, in display order
//! - `registry`: indexed, immutable access to a catalog
//! - `language`: descriptor rows and the validated `Language` handle
//! - `romanization`: name-keyed classification of non-Latin scripts
//!
//! # Example
//!
//! ```rust,ignore
//! use polyglot_i18n::i18n::{Language, LanguageRegistry};
//!
//! let registry = LanguageRegistry::get();
//! let hebrew = registry.find_by_api_key("iw")?;
//! assert!(registry.needs_romanization(hebrew));
//!
//! let japanese = Language::from_api_key("ja")?;
//! assert!(japanese.needs_romanization());
//! ```

mod catalog;
mod language;
mod registry;
mod romanization;

pub use catalog::AUTOMATIC_API_KEY;
pub use language::{Language, LanguageDescriptor};
pub use registry::{LanguageRegistry, RegistryError};
pub use romanization::{needs_romanization, ROMANIZATION_CLASS};

/// The full built-in catalog, in display order.
pub fn all_languages() -> &'static [LanguageDescriptor] {
    LanguageRegistry::get().all_languages()
}

/// Look up a built-in catalog entry by api key.
pub fn find_by_api_key(api_key: &str) -> Result<&'static LanguageDescriptor, RegistryError> {
    LanguageRegistry::get().find_by_api_key(api_key)
}
