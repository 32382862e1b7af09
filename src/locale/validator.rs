//! Bundle consistency checks against the fallback bundle.
//!
//! A translated bundle should use the same placeholders as the fallback for
//! each key; otherwise interpolated parameters silently disappear. These
//! checks are advisory: the loader logs the report and installs the bundle
//! regardless.

use crate::locale::interpolate::placeholders;
use crate::locale::LocaleBundle;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Entries that will render badly (e.g., empty strings)
    pub errors: Vec<String>,

    /// Differences from the reference bundle
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator comparing a bundle with a reference (fallback) bundle.
pub struct BundleValidator;

impl BundleValidator {
    /// Check `bundle` against `reference`.
    ///
    /// - empty values are errors
    /// - placeholder sets differing from the reference entry are warnings
    /// - keys present in the reference but absent from `bundle` are reported
    ///   as a single warning with a count
    pub fn validate(bundle: &LocaleBundle, reference: &LocaleBundle) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut keys: Vec<&String> = bundle.entries().keys().collect();
        keys.sort();

        for key in keys {
            let Some(value) = bundle.get(key) else {
                continue;
            };

            if value.trim().is_empty() {
                report.errors.push(format!("Empty value for '{}'", key));
                continue;
            }

            if let Some(reference_value) = reference.get(key) {
                let expected = placeholders(reference_value);
                let actual = placeholders(value);
                if expected != actual {
                    report.warnings.push(format!(
                        "Placeholder mismatch for '{}': {} has {:?}, {} has {:?}",
                        key,
                        reference.locale(),
                        expected,
                        bundle.locale(),
                        actual
                    ));
                }
            }
        }

        let missing = reference
            .entries()
            .keys()
            .filter(|key| !bundle.contains_key(key))
            .count();
        if missing > 0 {
            report.warnings.push(format!(
                "{} keys from {} are missing in {}",
                missing,
                reference.locale(),
                bundle.locale()
            ));
        }

        report
    }
}
