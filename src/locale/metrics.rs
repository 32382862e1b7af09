//! Loader metrics and observability.
//!
//! Counters are per loader instance so that isolated loaders (tests,
//! multiple windows) do not share numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for bundle loads and key resolution.
#[derive(Debug, Default)]
pub struct LoaderMetrics {
    /// Number of bundle fetches started (coalesced requests count once)
    bundle_loads: AtomicUsize,

    /// Number of bundle fetches that ended in `Failed`
    load_failures: AtomicUsize,

    /// Number of keys resolved from the fallback bundle
    fallback_hits: AtomicUsize,

    /// Number of keys found in neither bundle
    missing_keys: AtomicUsize,
}

impl LoaderMetrics {
    /// Create a set of counters starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a bundle fetch started.
    pub fn record_bundle_load(&self) {
        self.bundle_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that a bundle fetch ended in `Failed`.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key answered by the fallback bundle.
    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key found in neither bundle.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of fetches started.
    pub fn bundle_loads(&self) -> usize {
        self.bundle_loads.load(Ordering::Relaxed)
    }

    /// Get the number of failed fetches.
    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Get the number of fallback resolutions.
    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    /// Get the number of unresolved keys.
    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let loads = self.bundle_loads();
        let failures = self.load_failures();
        let load_success_rate = if loads > 0 {
            (loads.saturating_sub(failures) as f64 / loads as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            bundle_loads: loads,
            load_failures: failures,
            load_success_rate,
            fallback_hits: self.fallback_hits(),
            missing_keys: self.missing_keys(),
        }
    }
}

/// Snapshot of loader statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub bundle_loads: usize,

    pub load_failures: usize,

    /// Successful loads as a percentage (0-100)
    pub load_success_rate: f64,

    pub fallback_hits: usize,

    pub missing_keys: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoaderMetrics::new();

        assert_eq!(metrics.bundle_loads(), 0);
        assert_eq!(metrics.load_failures(), 0);
        assert_eq!(metrics.fallback_hits(), 0);
        assert_eq!(metrics.missing_keys(), 0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = LoaderMetrics::new();

        metrics.record_bundle_load();
        metrics.record_bundle_load();
        metrics.record_load_failure();
        metrics.record_fallback_hit();
        metrics.record_missing_key();
        metrics.record_missing_key();

        assert_eq!(metrics.bundle_loads(), 2);
        assert_eq!(metrics.load_failures(), 1);
        assert_eq!(metrics.fallback_hits(), 1);
        assert_eq!(metrics.missing_keys(), 2);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = LoaderMetrics::new().report();

        assert_eq!(report.bundle_loads, 0);
        assert_eq!(report.load_success_rate, 0.0);
    }

    #[test]
    fn test_report_success_rate() {
        let metrics = LoaderMetrics::new();

        // 4 loads, 1 failure = 75% success rate
        for _ in 0..4 {
            metrics.record_bundle_load();
        }
        metrics.record_load_failure();

        let report = metrics.report();
        assert_eq!(report.load_success_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LoaderMetrics::new();
        metrics.record_missing_key();

        let json = serde_json::to_value(metrics.report()).expect("serialize");
        assert_eq!(json["missing_keys"], 1);
        assert_eq!(json["bundle_loads"], 0);
    }
}
