use crate::locale::{LoaderConfig, DEFAULT_FALLBACK_LOCALE, SUPPORTED_LOCALES};
use crate::retry::RetryConfig;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Locales
    pub fallback_locale: String,
    pub default_locale: String,
    pub locales: Vec<String>,

    // Bundle source
    pub namespace: String,
    pub bundle_dir: String,
    pub bundle_url: Option<String>,

    // Fetching
    pub fetch_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let fallback_locale = normalize_tag(
            &std::env::var("I18N_FALLBACK_LOCALE")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_LOCALE.to_string()),
        );
        if fallback_locale.is_empty() {
            bail!("I18N_FALLBACK_LOCALE must not be empty");
        }

        let default_locale = std::env::var("I18N_DEFAULT_LOCALE")
            .map(|v| normalize_tag(&v))
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| fallback_locale.clone());

        let locales = match std::env::var("I18N_LOCALES") {
            Ok(list) => parse_locale_list(&list),
            Err(_) => SUPPORTED_LOCALES.iter().map(|tag| tag.to_string()).collect(),
        };

        let fetch_attempts = match std::env::var("I18N_FETCH_ATTEMPTS") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("I18N_FETCH_ATTEMPTS is not a number: '{}'", value))?,
            Err(_) => 3,
        };

        Ok(Self {
            fallback_locale,
            default_locale,
            locales,

            namespace: std::env::var("I18N_NAMESPACE").unwrap_or_else(|_| "common".to_string()),
            bundle_dir: std::env::var("I18N_BUNDLE_DIR")
                .unwrap_or_else(|_| "translations".to_string()),
            bundle_url: std::env::var("I18N_BUNDLE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),

            fetch_attempts,
        })
    }

    /// Loader settings derived from this configuration.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(&self.fallback_locale)
            .with_locales(self.locales.iter().cloned())
            .with_retry(RetryConfig::bundle_fetch().with_max_attempts(self.fetch_attempts))
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

fn parse_locale_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}
