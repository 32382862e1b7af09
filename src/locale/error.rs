use thiserror::Error;

/// Why a locale bundle could not be loaded.
///
/// Cloneable: one failed fetch is handed to every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleLoadError {
    #[error("Locale '{locale}' is not in the configured locale list")]
    UnsupportedLocale { locale: String },

    #[error("No bundle found for locale '{locale}'")]
    NotFound { locale: String },

    #[error("Failed to read bundle {path}: {message}")]
    Io { path: String, message: String },

    #[error("Bundle request for '{locale}' failed with HTTP {status}")]
    Http { locale: String, status: u16 },

    #[error("Network error while fetching bundle for '{locale}': {message}")]
    Network { locale: String, message: String },

    #[error("Failed to parse bundle for '{locale}': {message}")]
    Parse { locale: String, message: String },

    #[error("Bundle for '{locale}' has a non-string value at '{key}'")]
    Malformed { locale: String, key: String },

    #[error("Bundle source error for '{locale}': {message}")]
    Source { locale: String, message: String },
}

impl BundleLoadError {
    /// Whether retrying the same fetch could plausibly succeed.
    ///
    /// Network failures, HTTP 429/5xx and opaque source errors are transient.
    /// Missing, unsupported or malformed bundles are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            BundleLoadError::Network { .. } | BundleLoadError::Source { .. } => true,
            BundleLoadError::Http { status, .. } => *status == 429 || *status >= 500,
            BundleLoadError::UnsupportedLocale { .. }
            | BundleLoadError::NotFound { .. }
            | BundleLoadError::Io { .. }
            | BundleLoadError::Parse { .. }
            | BundleLoadError::Malformed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let network = BundleLoadError::Network {
            locale: "de".to_string(),
            message: "connection reset".to_string(),
        };
        let rate_limited = BundleLoadError::Http {
            locale: "de".to_string(),
            status: 429,
        };
        let server = BundleLoadError::Http {
            locale: "de".to_string(),
            status: 503,
        };
        let client = BundleLoadError::Http {
            locale: "de".to_string(),
            status: 404,
        };
        let parse = BundleLoadError::Parse {
            locale: "de".to_string(),
            message: "expected value".to_string(),
        };

        assert!(network.is_retryable());
        assert!(rate_limited.is_retryable());
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
        assert!(!parse.is_retryable());
    }

    #[test]
    fn test_display_mentions_locale() {
        let error = BundleLoadError::UnsupportedLocale {
            locale: "xx".to_string(),
        };
        assert!(error.to_string().contains("'xx'"));
    }
}
