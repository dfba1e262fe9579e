//! Observable state containers for the tea shop point of sale.
//!
//! A [`Store`] holds a single shared value and notifies subscribers on
//! every mutation. Front-end surfaces keep their catalog, cart, and
//! editor state in stores so that independent views stay in sync
//! without wiring ad-hoc callbacks between them.

use std::sync::{Arc, Mutex, PoisonError};

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(&T) + Send>)>,
}

/// Shared observable container for a single value.
///
/// Cloning a `Store` produces a handle to the same underlying state.
/// Subscribers run synchronously, in subscription order, on every
/// [`set`](Store::set) or [`update`](Store::update). Callbacks execute
/// while the internal lock is held and must not call back into the
/// same store.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Store<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        let mut inner = self.lock();
        inner.value = value;
        Self::notify(&mut inner);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut inner = self.lock();
        f(&mut inner.value);
        Self::notify(&mut inner);
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }

    /// Number of mutations applied so far.
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    fn notify(inner: &mut Inner<T>) {
        inner.version += 1;
        for (_, callback) in &inner.subscribers {
            callback(&inner.value);
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
