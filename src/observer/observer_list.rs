//! ObserverList<W, E> — ordered, synchronous listener fan-out.
//!
//! Listeners are stored as `Arc<dyn Fn(&W, &E)>` so snapshots are cheap.
//! Snapshot-on-notify semantics mean:
//!   - A listener removed *during* notification is still called in that round.
//!   - A listener added *during* notification is NOT called until the next round.
//!
//! Listeners are called in registration order. The first listener returning
//! an error stops the round: later listeners are skipped and the error is
//! returned to the caller. There is no isolation between listeners.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`),
//! so a listener may register or remove listeners while being notified.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ObserverError;

/// An observer ID returned by [`ObserverList::add`] that can be passed to
/// [`ObserverList::remove`].
pub type ObserverId = u64;

/// Closure type for observers: receives the notification source and the event.
pub type ObserverFn<W, E> = dyn Fn(&W, &E) -> Result<(), ObserverError> + Send + Sync;

/// Ordered list of observers notified synchronously with `(source, event)`.
pub struct ObserverList<W: ?Sized, E> {
    observers: Mutex<Vec<(ObserverId, Arc<ObserverFn<W, E>>)>>,
    next_id: AtomicU64,
}

impl<W: ?Sized, E> ObserverList<W, E> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register `observer` and return its [`ObserverId`].
    pub fn add(
        &self,
        observer: impl Fn(&W, &E) -> Result<(), ObserverError> + Send + Sync + 'static,
    ) -> ObserverId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers.lock().push((id, Arc::new(observer)));
        id
    }

    /// Remove the observer identified by `id`. Returns whether it was present.
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut guard = self.observers.lock();
        let before = guard.len();
        guard.retain(|(oid, _)| *oid != id);
        guard.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.lock().is_empty()
    }

    /// Deliver `event` from `source` to every registered observer.
    pub fn notify(&self, source: &W, event: &E) -> Result<(), ObserverError> {
        let snapshot: Vec<(ObserverId, Arc<ObserverFn<W, E>>)> = {
            let guard = self.observers.lock();
            guard.iter().map(|(id, cb)| (*id, Arc::clone(cb))).collect()
        };
        tracing::trace!(observers = snapshot.len(), "notifying observers");
        for (id, cb) in snapshot {
            if let Err(e) = cb(source, event) {
                tracing::warn!(observer = id, error = %e, "observer failed, aborting notification");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<W: ?Sized, E> Default for ObserverList<W, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ?Sized, E> fmt::Debug for ObserverList<W, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.len())
            .finish()
    }
}
