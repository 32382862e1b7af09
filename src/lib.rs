//! Language catalog and lazily loaded UI translation bundles.
//!
//! - [`i18n`]: the natural languages offered for translation
//! - [`locale`]: per-locale UI string bundles with fallback

pub mod config;
pub mod i18n;
pub mod locale;
pub mod retry;
