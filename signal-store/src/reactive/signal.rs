//! Signal Implementation
//!
//! A Signal is the default cell the registry creates. It holds a value and
//! a list of subscribers that are notified after every write.
//!
//! # How Signals Work
//!
//! 1. A consumer attaches a callback with `subscribe`.
//!
//! 2. `set` (or `update`) replaces the value, then calls every callback
//!    attached at the time of the write.
//!
//! 3. Clones share the value and the subscriber list, so a clone is a
//!    handle to the same slot.
//!
//! # Locking
//!
//! The value and the subscriber list sit behind separate `parking_lot`
//! locks. Callbacks run after both are released, so a callback may read the
//! signal, write another signal, or (un)subscribe.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use super::subscriber::{Subscriber, SubscriberId};

/// Counter for generating unique signal IDs.
static SIGNAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique signal ID.
fn next_signal_id() -> u64 {
    SIGNAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Most signals have a handful of observers.
type SubscriberList = SmallVec<[Subscriber; 4]>;

/// A reactive signal holding a value of type T.
///
/// # Example
///
/// ```rust
/// use signal_store::reactive::Signal;
///
/// let count = Signal::new(0);
/// count.set(5);
/// assert_eq!(count.get(), 5);
/// ```
pub struct Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Unique identifier for this signal.
    id: u64,

    /// The current value.
    value: Arc<RwLock<T>>,

    /// Callbacks to invoke after a write, in subscription order.
    subscribers: Arc<RwLock<SubscriberList>>,
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new signal with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            id: next_signal_id(),
            value: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Get the signal's unique ID. Clones report the same ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Read the current value by reference without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.value.read())
    }

    /// Set a new value and notify subscribers.
    pub fn set(&self, value: T) {
        *self.value.write() = value;
        self.notify_subscribers();
    }

    /// Update the value using a function of the current value.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let new_value = f(&*self.value.read());
        self.set(new_value);
    }

    /// Register a notification callback for a subscriber.
    ///
    /// Subscribing again under the same ID replaces the earlier callback.
    pub fn subscribe<F>(&self, subscriber_id: SubscriberId, notify: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let subscriber = Subscriber::with_id(subscriber_id, notify);
        let mut subscribers = self.subscribers.write();
        match subscribers.iter_mut().find(|s| s.id() == subscriber_id) {
            Some(existing) => *existing = subscriber,
            None => subscribers.push(subscriber),
        }
    }

    /// Remove a subscriber. Unknown IDs are ignored.
    pub fn unsubscribe(&self, subscriber_id: SubscriberId) {
        self.subscribers.write().retain(|s| s.id() != subscriber_id);
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Notify all subscribers that the value has changed.
    fn notify_subscribers(&self) {
        let snapshot: SubscriberList = self.subscribers.read().clone();
        for subscriber in &snapshot {
            subscriber.notify();
        }
    }
}

impl<T> Clone for Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Debug for Signal<T>
where
    T: Clone + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.id)
            .field("value", &*self.value.read())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
