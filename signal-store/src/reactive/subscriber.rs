//! Subscriber types for signal observation.
//!
//! A Subscriber is a callback attached to one signal. It is identified by a
//! `SubscriberId` so the same observer can later detach itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for a subscriber.
///
/// Consumers allocate one per observer and pass it to `Signal::subscribe`.
/// The same id may be attached to several signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Generate a new unique subscriber ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification callback shared between a signal and its snapshot of
/// listeners taken at write time.
pub(crate) type Notify = Arc<dyn Fn() + Send + Sync>;

/// A callback attached to a signal.
#[derive(Clone)]
pub(crate) struct Subscriber {
    id: SubscriberId,
    notify: Notify,
}

impl Subscriber {
    /// Create a subscriber under an existing ID.
    pub fn with_id<F>(id: SubscriberId, notify: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id,
            notify: Arc::new(notify),
        }
    }

    /// Get the subscriber's unique ID.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Invoke the callback.
    pub fn notify(&self) {
        (self.notify)();
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.id).finish()
    }
}
