//! Lazy, per-locale bundle loader with fallback resolution.
//!
//! A [`LocaleLoader`] owns every bundle it has loaded. Loads run as tokio
//! tasks; at most one fetch per locale is in flight, and later requests for
//! the same locale join it through a shared future. Loads never change the
//! active locale: readers always resolve against the locale selected last.

use crate::locale::interpolate::interpolate;
use crate::locale::subscription::{ActiveLocaleHandler, LoadingStateHandler, Observers};
use crate::locale::validator::BundleValidator;
use crate::locale::{
    BundleEntries, BundleLoadError, BundleSource, BundleState, LoaderMetrics, LocaleBundle,
    Subscription,
};
use crate::retry::{with_retry_if, RetryConfig};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::collections::HashMap;
use std::fmt;
use std::future::IntoFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, warn};

/// Locale used when nothing else is configured.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// UI locales the application ships bundles for.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "ar", "da", "de", "en", "es", "fi", "fr", "hi", "it", "ja", "ko", "nl", "no", "pt", "ru",
    "sv", "th", "tr", "vi", "zh",
];

type LoadFuture = Shared<BoxFuture<'static, BundleState>>;

// ==================== Configuration ====================

/// Settings for a [`LocaleLoader`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    fallback_locale: String,
    initial_locale: Option<String>,
    locales: Vec<String>,
    retry: RetryConfig,
    validate: bool,
}

impl LoaderConfig {
    /// Accept any locale tag, starting on (and falling back to) `fallback_locale`.
    pub fn new(fallback_locale: &str) -> Self {
        Self {
            fallback_locale: normalize_locale(fallback_locale),
            initial_locale: None,
            locales: Vec::new(),
            retry: RetryConfig::bundle_fetch(),
            validate: true,
        }
    }

    /// Restrict requests to these tags. An empty list accepts every tag.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locales = locales
            .into_iter()
            .map(|tag| normalize_locale(tag.as_ref()))
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Active locale before the first `set_active_locale` call.
    pub fn with_initial_locale(mut self, locale: &str) -> Self {
        self.initial_locale = Some(normalize_locale(locale));
        self
    }

    /// Set the retry policy for bundle fetches.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Compare installed bundles with the fallback bundle and log differences.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Locale consulted when the active bundle lacks a key.
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Accepted locale tags (empty accepts every tag).
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Retry policy for bundle fetches.
    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    fn accepts(&self, locale: &str) -> bool {
        !locale.is_empty() && (self.locales.is_empty() || self.locales.iter().any(|l| l == locale))
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_LOCALE).with_locales(SUPPORTED_LOCALES)
    }
}

// ==================== Tickets ====================

/// Completion signal for a bundle request.
///
/// Dropping a ticket does not cancel the load. Await it (or call
/// [`completed`](LoadTicket::completed)) to get the state the bundle settled in.
pub struct LoadTicket {
    locale: String,
    inner: TicketInner,
}

enum TicketInner {
    Ready(BundleState),
    Pending(LoadFuture),
}

impl LoadTicket {
    fn ready(locale: &str, state: BundleState) -> Self {
        Self {
            locale: locale.to_string(),
            inner: TicketInner::Ready(state),
        }
    }

    fn pending(locale: &str, future: LoadFuture) -> Self {
        Self {
            locale: locale.to_string(),
            inner: TicketInner::Pending(future),
        }
    }

    /// Locale tag the request was made for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether the request was already settled when the ticket was issued.
    pub fn is_settled(&self) -> bool {
        matches!(self.inner, TicketInner::Ready(_))
    }

    /// Wait for the load to finish; resolves to `Loaded` or `Failed`.
    pub async fn completed(self) -> BundleState {
        match self.inner {
            TicketInner::Ready(state) => state,
            TicketInner::Pending(future) => future.await,
        }
    }
}

impl IntoFuture for LoadTicket {
    type Output = BundleState;
    type IntoFuture = BoxFuture<'static, BundleState>;

    fn into_future(self) -> Self::IntoFuture {
        self.completed().boxed()
    }
}

impl fmt::Debug for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.inner {
            TicketInner::Ready(state) => *state,
            TicketInner::Pending(_) => BundleState::Loading,
        };
        f.debug_struct("LoadTicket")
            .field("locale", &self.locale)
            .field("state", &state)
            .finish()
    }
}

// ==================== State ====================

enum Slot {
    Loading {
        generation: u64,
        future: LoadFuture,
        stale: Option<Arc<LocaleBundle>>,
    },
    Loaded(Arc<LocaleBundle>),
    Failed {
        error: BundleLoadError,
        stale: Option<Arc<LocaleBundle>>,
    },
}

impl Slot {
    fn state(&self) -> BundleState {
        match self {
            Slot::Loading { .. } => BundleState::Loading,
            Slot::Loaded(_) => BundleState::Loaded,
            Slot::Failed { .. } => BundleState::Failed,
        }
    }

    /// The bundle answering lookups: the loaded one, or the previous one
    /// while a reload is pending or after it failed.
    fn serving(&self) -> Option<&Arc<LocaleBundle>> {
        match self {
            Slot::Loaded(bundle) => Some(bundle),
            Slot::Loading { stale, .. } | Slot::Failed { stale, .. } => stale.as_ref(),
        }
    }

    fn into_serving(self) -> Option<Arc<LocaleBundle>> {
        match self {
            Slot::Loaded(bundle) => Some(bundle),
            Slot::Loading { stale, .. } | Slot::Failed { stale, .. } => stale,
        }
    }
}

struct LoaderState {
    active_locale: String,
    slots: HashMap<String, Slot>,
    next_generation: u64,
}

/// When a request should start a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestMode {
    /// Only if never requested.
    Ensure,
    /// If never requested or failed.
    Retry,
    /// Unless already loading.
    Reload,
}

struct Inner {
    config: LoaderConfig,
    source: Arc<dyn BundleSource>,
    state: Mutex<LoaderState>,
    active_observers: Arc<Observers<ActiveLocaleHandler>>,
    loading_observers: Arc<Observers<LoadingStateHandler>>,
    metrics: LoaderMetrics,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_loading(&self, locale: &str, state: BundleState) {
        for handler in self.loading_observers.snapshot() {
            handler(locale, state);
        }
    }

    fn notify_active(&self, locale: &str) {
        for handler in self.active_observers.snapshot() {
            handler(locale);
        }
    }

    /// Install the outcome of load `generation` for `locale`.
    fn finish_load(
        &self,
        locale: &str,
        generation: u64,
        result: Result<BundleEntries, BundleLoadError>,
    ) -> BundleState {
        let (settled, installed, reference) = {
            let mut state = self.lock();

            let current = matches!(
                state.slots.get(locale),
                Some(Slot::Loading { generation: g, .. }) if *g == generation
            );
            if !current {
                debug!("Discarding superseded load {} for '{}'", generation, locale);
                return state
                    .slots
                    .get(locale)
                    .map(Slot::state)
                    .unwrap_or(BundleState::Unrequested);
            }

            let previous = state.slots.remove(locale).and_then(Slot::into_serving);
            match result {
                Ok(entries) => {
                    let bundle = Arc::new(LocaleBundle::new(locale, entries));
                    info!("Loaded '{}' bundle ({} keys)", locale, bundle.len());
                    state
                        .slots
                        .insert(locale.to_string(), Slot::Loaded(Arc::clone(&bundle)));

                    let validate =
                        self.config.validate && locale != self.config.fallback_locale;
                    let reference = if validate {
                        match state.slots.get(&self.config.fallback_locale) {
                            Some(Slot::Loaded(fallback)) => Some(Arc::clone(fallback)),
                            _ => None,
                        }
                    } else {
                        None
                    };
                    (BundleState::Loaded, Some(bundle), reference)
                }
                Err(error) => {
                    self.metrics.record_load_failure();
                    warn!("Failed to load '{}' bundle: {}", locale, error);
                    state.slots.insert(
                        locale.to_string(),
                        Slot::Failed {
                            error,
                            stale: previous,
                        },
                    );
                    (BundleState::Failed, None, None)
                }
            }
        };

        if let (Some(bundle), Some(reference)) = (installed, reference) {
            let report = BundleValidator::validate(&bundle, &reference);
            if report.has_errors() {
                warn!("Bundle '{}' has errors: {:?}", locale, report.errors);
            }
            if report.has_warnings() {
                warn!(
                    "Bundle '{}' differs from '{}': {:?}",
                    locale,
                    reference.locale(),
                    report.warnings
                );
            }
        }

        self.notify_loading(locale, settled);
        settled
    }
}

// ==================== Loader ====================

/// Per-locale translation bundle cache with an active-locale selector.
///
/// Cloning is cheap and yields a handle to the same loader.
#[derive(Clone)]
pub struct LocaleLoader {
    inner: Arc<Inner>,
}

impl LocaleLoader {
    /// Create a loader that owns `source`.
    pub fn new<S: BundleSource>(config: LoaderConfig, source: S) -> Self {
        Self::with_shared_source(config, Arc::new(source))
    }

    /// Create a loader over a source shared with other owners.
    pub fn with_shared_source(config: LoaderConfig, source: Arc<dyn BundleSource>) -> Self {
        let active_locale = config
            .initial_locale
            .clone()
            .unwrap_or_else(|| config.fallback_locale.clone());

        Self {
            inner: Arc::new(Inner {
                config,
                source,
                state: Mutex::new(LoaderState {
                    active_locale,
                    slots: HashMap::new(),
                    next_generation: 0,
                }),
                active_observers: Observers::new(),
                loading_observers: Observers::new(),
                metrics: LoaderMetrics::new(),
            }),
        }
    }

    // ==================== Locale selection ====================

    /// Select `locale` and start loading its bundle unless already loaded.
    ///
    /// Returns immediately. A failed load shows up in
    /// [`bundle_state`](Self::bundle_state), never as an error here.
    pub fn set_active_locale(&self, locale: &str) -> LoadTicket {
        let locale = normalize_locale(locale);

        let changed = {
            let mut state = self.inner.lock();
            if state.active_locale == locale {
                false
            } else {
                state.active_locale = locale.clone();
                true
            }
        };

        if changed {
            info!("Active locale changed to '{}'", locale);
            self.inner.notify_active(&locale);
        }

        self.request(&locale, RequestMode::Retry)
    }

    /// The locale selected last.
    pub fn active_locale(&self) -> String {
        self.inner.lock().active_locale.clone()
    }

    /// The configured fallback locale.
    pub fn fallback_locale(&self) -> &str {
        &self.inner.config.fallback_locale
    }

    /// Configured UI locale tags (empty when any tag is accepted).
    pub fn locales(&self) -> &[String] {
        &self.inner.config.locales
    }

    /// Load a bundle without selecting it.
    pub fn prefetch(&self, locale: &str) -> LoadTicket {
        self.request(&normalize_locale(locale), RequestMode::Retry)
    }

    /// Fetch a bundle again even if it is loaded. Joins a load in flight.
    ///
    /// The current entries keep answering lookups until the new bundle is
    /// installed, and remain in use if the reload fails.
    pub fn reload(&self, locale: &str) -> LoadTicket {
        self.request(&normalize_locale(locale), RequestMode::Reload)
    }

    /// Wait until the active and fallback bundles have settled.
    ///
    /// Unrequested bundles are requested; failed ones are not retried.
    pub async fn ready(&self) {
        let active = self.active_locale();
        let fallback = self.inner.config.fallback_locale.clone();

        let mut tickets = vec![self.request(&active, RequestMode::Ensure)];
        if fallback != active {
            tickets.push(self.request(&fallback, RequestMode::Ensure));
        }

        futures::future::join_all(tickets.into_iter().map(LoadTicket::completed)).await;
    }

    // ==================== Lookup ====================

    /// Resolve `key` for the active locale.
    ///
    /// Falls back to the fallback locale, then to `key` itself. A lookup
    /// that reaches the fallback starts its load when it was never
    /// requested or has failed, provided a tokio runtime is running.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Resolve `key` and substitute `{{name}}` placeholders from `params`.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let fallback = &self.inner.config.fallback_locale;

        let (value, load_fallback) = {
            let state = self.inner.lock();
            let lookup = |locale: &str| {
                state
                    .slots
                    .get(locale)
                    .and_then(Slot::serving)
                    .and_then(|bundle| bundle.get(key))
                    .filter(|value| !value.is_empty())
                    .map(|value| interpolate(value, params).into_owned())
            };

            match lookup(state.active_locale.as_str()) {
                Some(value) => (Some(value), false),
                None => {
                    let value = lookup(fallback.as_str());
                    if value.is_some() {
                        self.inner.metrics.record_fallback_hit();
                    }
                    let retry = matches!(
                        state.slots.get(fallback.as_str()),
                        None | Some(Slot::Failed { .. })
                    );
                    (value, retry)
                }
            }
        };

        if load_fallback {
            if tokio::runtime::Handle::try_current().is_ok() {
                debug!("Loading fallback bundle '{}' for lookup of '{}'", fallback, key);
                self.request(fallback, RequestMode::Retry);
            } else {
                debug!("No tokio runtime; not loading fallback '{}' from a lookup", fallback);
            }
        }

        value.unwrap_or_else(|| {
            self.inner.metrics.record_missing_key();
            debug!("Missing translation for '{}'", key);
            key.to_string()
        })
    }

    /// True while the active locale's bundle is loading.
    pub fn is_loading(&self) -> bool {
        let state = self.inner.lock();
        matches!(
            state.slots.get(&state.active_locale),
            Some(Slot::Loading { .. })
        )
    }

    /// Current load state of `locale`'s bundle.
    pub fn bundle_state(&self, locale: &str) -> BundleState {
        self.inner
            .lock()
            .slots
            .get(&normalize_locale(locale))
            .map(Slot::state)
            .unwrap_or(BundleState::Unrequested)
    }

    /// The bundle currently answering lookups for `locale`, if any.
    pub fn bundle(&self, locale: &str) -> Option<Arc<LocaleBundle>> {
        self.inner
            .lock()
            .slots
            .get(&normalize_locale(locale))
            .and_then(Slot::serving)
            .cloned()
    }

    /// Error of the last load, if the bundle is `Failed`.
    pub fn last_error(&self, locale: &str) -> Option<BundleLoadError> {
        match self.inner.lock().slots.get(&normalize_locale(locale)) {
            Some(Slot::Failed { error, .. }) => Some(error.clone()),
            _ => None,
        }
    }

    /// Counters for this loader instance.
    pub fn metrics(&self) -> &LoaderMetrics {
        &self.inner.metrics
    }

    // ==================== Observers ====================

    /// Call `handler` with the new locale whenever the active locale changes.
    pub fn on_active_locale_changed<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.inner.active_observers.subscribe(Arc::new(handler))
    }

    /// Call `handler` whenever any bundle enters `Loading`, `Loaded` or `Failed`.
    pub fn on_loading_state_changed<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&str, BundleState) + Send + Sync + 'static,
    {
        self.inner.loading_observers.subscribe(Arc::new(handler))
    }

    // ==================== Loading ====================

    fn request(&self, locale: &str, mode: RequestMode) -> LoadTicket {
        let (ticket, started) = {
            let mut state = self.inner.lock();

            match (state.slots.get(locale), mode) {
                (Some(Slot::Loading { future, .. }), _) => {
                    return LoadTicket::pending(locale, future.clone());
                }
                (Some(Slot::Loaded(_)), RequestMode::Ensure | RequestMode::Retry) => {
                    return LoadTicket::ready(locale, BundleState::Loaded);
                }
                (Some(Slot::Failed { .. }), RequestMode::Ensure) => {
                    return LoadTicket::ready(locale, BundleState::Failed);
                }
                _ => {}
            }

            let previous = state.slots.remove(locale).and_then(Slot::into_serving);

            if !self.inner.config.accepts(locale) {
                let error = BundleLoadError::UnsupportedLocale {
                    locale: locale.to_string(),
                };
                warn!("Refusing to load bundle: {}", error);
                state.slots.insert(
                    locale.to_string(),
                    Slot::Failed {
                        error,
                        stale: previous,
                    },
                );
                (LoadTicket::ready(locale, BundleState::Failed), None)
            } else {
                let generation = state.next_generation;
                state.next_generation += 1;

                let future = self.load(locale.to_string(), generation).boxed().shared();
                state.slots.insert(
                    locale.to_string(),
                    Slot::Loading {
                        generation,
                        future: future.clone(),
                        stale: previous,
                    },
                );
                self.inner.metrics.record_bundle_load();
                debug!("Started load {} for '{}'", generation, locale);

                (LoadTicket::pending(locale, future.clone()), Some(future))
            }
        };

        match started {
            Some(future) => {
                self.inner.notify_loading(locale, BundleState::Loading);
                match tokio::runtime::Handle::try_current() {
                    Ok(handle) => {
                        handle.spawn(future);
                    }
                    Err(_) => debug!(
                        "No tokio runtime; load for '{}' runs when its ticket is awaited",
                        locale
                    ),
                }
            }
            None => self.inner.notify_loading(locale, BundleState::Failed),
        }

        ticket
    }

    fn load(
        &self,
        locale: String,
        generation: u64,
    ) -> impl std::future::Future<Output = BundleState> + Send + 'static {
        let source = Arc::clone(&self.inner.source);
        let retry = self.inner.config.retry.clone();
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);

        async move {
            let operation_name = format!("Bundle fetch for '{}'", locale);
            let result = with_retry_if(
                &retry,
                &operation_name,
                || source.fetch(&locale),
                BundleLoadError::is_retryable,
            )
            .await;

            match inner.upgrade() {
                Some(inner) => inner.finish_load(&locale, generation, result),
                None => match result {
                    Ok(_) => BundleState::Loaded,
                    Err(_) => BundleState::Failed,
                },
            }
        }
    }
}

impl fmt::Debug for LocaleLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        let mut bundles: Vec<(&str, BundleState)> = state
            .slots
            .iter()
            .map(|(locale, slot)| (locale.as_str(), slot.state()))
            .collect();
        bundles.sort_unstable_by_key(|(locale, _)| *locale);

        f.debug_struct("LocaleLoader")
            .field("active_locale", &state.active_locale)
            .field("fallback_locale", &self.inner.config.fallback_locale)
            .field("bundles", &bundles)
            .finish()
    }
}

fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase()
}
