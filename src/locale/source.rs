//! Bundle sources: where a locale's key/value data comes from.
//!
//! The loader only sees the [`BundleSource`] trait. Three implementations
//! ship with the crate: an in-memory map, a directory of JSON files and an
//! HTTP endpoint serving the same JSON layout.

use crate::locale::BundleLoadError;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Flat key → localized string map as produced by a source.
pub type BundleEntries = HashMap<String, String>;

/// Asynchronous provider of bundle data for a locale.
pub trait BundleSource: Send + Sync + 'static {
    /// Fetch and parse the bundle for `locale`.
    fn fetch<'a>(
        &'a self,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<BundleEntries, BundleLoadError>>;
}

// ==================== In-memory ====================

/// Bundles held in memory, e.g. embedded at compile time.
#[derive(Debug, Clone, Default)]
pub struct StaticBundleSource {
    bundles: HashMap<String, BundleEntries>,
}

impl StaticBundleSource {
    /// Create a source with no bundles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the bundle for `locale`.
    pub fn with_bundle<K, V, I>(mut self, locale: &str, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.bundles.insert(locale.to_string(), entries);
        self
    }

    /// Add a bundle from a JSON document (nested objects flatten to dotted keys).
    pub fn with_json(
        mut self,
        locale: &str,
        namespace: &str,
        json: &str,
    ) -> Result<Self, BundleLoadError> {
        let entries = parse_bundle(locale, namespace, json)?;
        self.bundles.insert(locale.to_string(), entries);
        Ok(self)
    }
}

impl BundleSource for StaticBundleSource {
    fn fetch<'a>(
        &'a self,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<BundleEntries, BundleLoadError>> {
        let result = self
            .bundles
            .get(locale)
            .cloned()
            .ok_or_else(|| BundleLoadError::NotFound {
                locale: locale.to_string(),
            });
        futures::future::ready(result).boxed()
    }
}

// ==================== Filesystem ====================

/// Reads `<root>/<locale>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FileBundleSource {
    root: PathBuf,
    namespace: String,
}

impl FileBundleSource {
    /// Read bundles named `<namespace>.json` under `root`.
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
        }
    }

    fn path_for(&self, locale: &str) -> PathBuf {
        self.root
            .join(locale)
            .join(format!("{}.json", self.namespace))
    }
}

impl BundleSource for FileBundleSource {
    fn fetch<'a>(
        &'a self,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<BundleEntries, BundleLoadError>> {
        async move {
            ensure_safe_tag(locale)?;
            let path = self.path_for(locale);
            debug!("Reading bundle from {}", path.display());

            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => BundleLoadError::NotFound {
                        locale: locale.to_string(),
                    },
                    _ => BundleLoadError::Io {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    },
                })?;

            parse_bundle(locale, &self.namespace, &text)
        }
        .boxed()
    }
}

// ==================== HTTP ====================

/// GETs `<base_url>/<locale>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct HttpBundleSource {
    client: reqwest::Client,
    base_url: String,
    namespace: String,
}

impl HttpBundleSource {
    /// Fetch bundles named `<namespace>.json` under `base_url`.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            namespace: namespace.into(),
        }
    }

    fn url_for(&self, locale: &str) -> String {
        format!(
            "{}/{}/{}.json",
            self.base_url.trim_end_matches('/'),
            locale,
            self.namespace
        )
    }
}

impl BundleSource for HttpBundleSource {
    fn fetch<'a>(
        &'a self,
        locale: &'a str,
    ) -> BoxFuture<'a, Result<BundleEntries, BundleLoadError>> {
        async move {
            ensure_safe_tag(locale)?;
            let url = self.url_for(locale);
            debug!("Fetching bundle from {}", url);

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| BundleLoadError::Network {
                    locale: locale.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(BundleLoadError::NotFound {
                    locale: locale.to_string(),
                });
            }
            if !status.is_success() {
                return Err(BundleLoadError::Http {
                    locale: locale.to_string(),
                    status: status.as_u16(),
                });
            }

            let text = response.text().await.map_err(|e| BundleLoadError::Network {
                locale: locale.to_string(),
                message: e.to_string(),
            })?;

            parse_bundle(locale, &self.namespace, &text)
        }
        .boxed()
    }
}

// ==================== Parsing ====================

/// Parse a JSON bundle document into flat, namespace-prefixed keys.
///
/// `{"nav": {"home": "Home"}}` under namespace `common` becomes
/// `common.nav.home → Home`. An empty namespace adds no prefix. Numbers and
/// booleans are kept as their JSON text; arrays and nulls are rejected.
pub fn parse_bundle(
    locale: &str,
    namespace: &str,
    text: &str,
) -> Result<BundleEntries, BundleLoadError> {
    let document: Value = serde_json::from_str(text).map_err(|e| BundleLoadError::Parse {
        locale: locale.to_string(),
        message: e.to_string(),
    })?;

    let Value::Object(map) = document else {
        return Err(BundleLoadError::Parse {
            locale: locale.to_string(),
            message: "top-level value must be an object".to_string(),
        });
    };

    let mut entries = BundleEntries::new();
    for (key, value) in map {
        flatten_into(locale, &join_key(namespace, &key), value, &mut entries)?;
    }
    Ok(entries)
}

fn flatten_into(
    locale: &str,
    key: &str,
    value: Value,
    entries: &mut BundleEntries,
) -> Result<(), BundleLoadError> {
    match value {
        Value::String(text) => {
            entries.insert(key.to_string(), text);
        }
        Value::Number(number) => {
            entries.insert(key.to_string(), number.to_string());
        }
        Value::Bool(flag) => {
            entries.insert(key.to_string(), flag.to_string());
        }
        Value::Object(children) => {
            for (child, value) in children {
                flatten_into(locale, &join_key(key, &child), value, entries)?;
            }
        }
        Value::Array(_) | Value::Null => {
            return Err(BundleLoadError::Malformed {
                locale: locale.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Locale tags end up in paths and URLs; only allow plain tag characters.
fn ensure_safe_tag(locale: &str) -> Result<(), BundleLoadError> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BundleLoadError::UnsupportedLocale {
            locale: locale.to_string(),
        })
    }
}
