//! UI locale bundles: lazy loading, fallback resolution and change events.
//!
//! A [`LocaleLoader`] keeps one bundle per locale tag, fetched on first use
//! from a [`BundleSource`]. Lookups never block and never fail: a key is
//! resolved against the active locale, then the fallback locale, and
//! finally returned unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use polyglot_i18n::locale::{FileBundleSource, LoaderConfig, LocaleLoader};
//!
//! let loader = LocaleLoader::new(
//!     LoaderConfig::default(),
//!     FileBundleSource::new("translations", "common"),
//! );
//!
//! loader.set_active_locale("de").await;
//! loader.ready().await;
//! println!("{}", loader.translate("common.translate"));
//! ```

mod bundle;
mod error;
pub mod interpolate;
mod loader;
mod metrics;
mod source;
mod subscription;
mod validator;

pub use bundle::{BundleState, LocaleBundle};
pub use error::BundleLoadError;
pub use loader::{
    LoadTicket, LoaderConfig, LocaleLoader, DEFAULT_FALLBACK_LOCALE, SUPPORTED_LOCALES,
};
pub use metrics::{LoaderMetrics, MetricsReport};
pub use source::{
    parse_bundle, BundleEntries, BundleSource, FileBundleSource, HttpBundleSource,
    StaticBundleSource,
};
pub use subscription::{ActiveLocaleHandler, LoadingStateHandler, Subscription};
pub use validator::{BundleValidator, ValidationReport};
