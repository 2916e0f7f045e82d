// Single-slot holder for the tracked Connection and Browser instances.

use parking_lot::Mutex;

/// Holds at most one live instance of a singleton-eligible resource.
///
/// One slot each for Connection and Browser is owned by the
/// `ResourceManager`, so isolation between test workers falls out of each
/// worker constructing its own manager rather than from locking.
#[derive(Debug, Default)]
pub(crate) struct SingletonSlot<T: Clone> {
    slot: Mutex<Option<T>>,
}

impl<T: Clone> SingletonSlot<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub(crate) fn get(&self) -> Option<T> {
        self.slot.lock().clone()
    }

    pub(crate) fn set(&self, value: T) {
        *self.slot.lock() = Some(value);
    }

    /// Clears the slot only when the held instance satisfies `predicate`.
    ///
    /// Close paths use this so that closing a resource that is no longer
    /// current (another instance was created after it) leaves the current
    /// instance tracked.
    pub(crate) fn clear_if(&self, predicate: impl FnOnce(&T) -> bool) {
        let mut slot = self.slot.lock();
        if slot.as_ref().is_some_and(predicate) {
            *slot = None;
        }
    }
}
