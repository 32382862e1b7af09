//! Observer lists with unsubscribe handles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::locale::BundleState;

/// Called with the new active locale.
pub type ActiveLocaleHandler = dyn Fn(&str) + Send + Sync;

/// Called with a locale and the state its bundle just entered.
pub type LoadingStateHandler = dyn Fn(&str, BundleState) + Send + Sync;

trait Detach: Send + Sync {
    fn detach(&self, id: u64);
}

/// Handlers registered for one kind of event.
pub(crate) struct Observers<H: ?Sized> {
    next_id: AtomicU64,
    handlers: Mutex<Vec<(u64, Arc<H>)>>,
}

impl<H: ?Sized + Send + Sync + 'static> Observers<H> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicU64::new(0),
            handlers: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn subscribe(self: &Arc<Self>, handler: Arc<H>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, handler));

        let owner: Weak<dyn Detach> = Arc::downgrade(self) as Weak<dyn Detach>;
        Subscription {
            id,
            owner: Some(owner),
        }
    }

    /// Handlers registered right now, cloned so they can run without the lock.
    pub(crate) fn snapshot(&self) -> Vec<Arc<H>> {
        self.lock().iter().map(|(_, handler)| Arc::clone(handler)).collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, Arc<H>)>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: ?Sized + Send + Sync + 'static> Detach for Observers<H> {
    fn detach(&self, id: u64) {
        self.lock().retain(|(handler_id, _)| *handler_id != id);
    }
}

/// Handle returned by the `on_*` registration methods.
///
/// The handler stays registered until the handle is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called.
#[must_use = "dropping a Subscription unsubscribes the handler immediately"]
pub struct Subscription {
    id: u64,
    owner: Option<Weak<dyn Detach>>,
}

impl Subscription {
    /// Remove the handler now.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(owner) = self.owner.take().and_then(|weak| weak.upgrade()) {
            owner.detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.owner.is_some())
            .finish()
    }
}
