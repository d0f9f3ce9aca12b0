//! Scoped event subscriptions with guaranteed teardown.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Document-level pointer-down event, pre-classified by the host: whether
/// the press landed inside the search container.
#[derive(Debug, Clone, Copy)]
pub struct PointerDown {
    pub inside_search: bool,
}

type Callbacks<T> = Mutex<HashMap<u64, Box<dyn Fn(&T) + Send + Sync>>>;

/// Broadcast hub for host events.
///
/// Subscribers hold a [`Subscription`] guard; dropping it detaches the
/// callback, so teardown follows ownership rather than a UI framework's
/// lifecycle hooks. Callbacks run under the hub lock and must not subscribe
/// or unsubscribe reentrantly.
pub struct EventHub<T> {
    callbacks: Arc<Callbacks<T>>,
    next_id: AtomicU64,
}

impl<T> EventHub<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Box::new(callback));
        Subscription {
            id,
            callbacks: Arc::downgrade(&self.callbacks),
        }
    }

    pub fn emit(&self, event: &T) {
        let callbacks = self
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for callback in callbacks.values() {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for a hub subscription. Dropping it unsubscribes; a hub that
/// is already gone makes the drop a no-op.
pub struct Subscription<T> {
    id: u64,
    callbacks: Weak<Callbacks<T>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(callbacks) = self.callbacks.upgrade() {
            callbacks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
        }
    }
}
