use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// TrackedSlot
//
// A shared cell whose writes are observable. Writers bump a version counter on
// every assignment; each `SlotObserver` remembers the last version it saw and
// reports a change exactly when the counter has advanced past it. This is the
// whole reactive substrate of the crate: no callbacks, observers are polled
// once per scheduler tick.
pub struct TrackedSlot<T> {
    inner: Arc<RwLock<SlotInner<T>>>,
}

struct SlotInner<T> {
    value: Option<T>,
    version: u64,
}

impl<T> Clone for TrackedSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> TrackedSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SlotInner {
                value: None,
                version: 0,
            })),
        }
    }

    pub fn with(value: T) -> Self {
        let slot = Self::new();
        slot.set(value);
        slot
    }

    /// Assigns a new value, registering a change even if it equals the old one.
    pub fn set(&self, value: T) {
        let mut inner = self.write();
        inner.value = Some(value);
        inner.version += 1;
    }

    /// Empties the slot. Observers see the removal as a change.
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.value = None;
        inner.version += 1;
    }

    pub fn get(&self) -> Option<T> {
        self.read().value.clone()
    }

    pub fn version(&self) -> u64 {
        self.read().version
    }

    /// Creates an observer that considers the current value unseen, so the
    /// first poll reports a change if the slot has ever been written.
    pub fn observe(&self) -> SlotObserver<T> {
        SlotObserver {
            slot: self.clone(),
            last_seen: 0,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SlotInner<T>> {
        // The guarded data is plain; a poisoned lock cannot leave it torn.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SlotInner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Default for TrackedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

// SlotObserver
pub struct SlotObserver<T> {
    slot: TrackedSlot<T>,
    last_seen: u64,
}

impl<T: Clone> SlotObserver<T> {
    /// Returns the current contents exactly when the slot has been written
    /// since the last poll, `None` otherwise.
    pub fn poll_changed(&mut self) -> Option<Option<T>> {
        let inner = self.slot.read();
        if inner.version == self.last_seen {
            return None;
        }
        self.last_seen = inner.version;
        Some(inner.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_sees_writes_once() {
        let slot = TrackedSlot::new();
        let mut observer = slot.observe();

        assert_eq!(observer.poll_changed(), None);

        slot.set(7u32);
        assert_eq!(observer.poll_changed(), Some(Some(7)));
        assert_eq!(observer.poll_changed(), None);
    }

    #[test]
    fn observer_coalesces_intermediate_writes() {
        let slot = TrackedSlot::new();
        let mut observer = slot.observe();

        slot.set(1u32);
        slot.set(2);
        slot.set(3);

        // Only the latest value is visible; intermediate writes collapse.
        assert_eq!(observer.poll_changed(), Some(Some(3)));
        assert_eq!(observer.poll_changed(), None);
    }

    #[test]
    fn reassigning_equal_value_still_registers() {
        let slot = TrackedSlot::with(5u32);
        let mut observer = slot.observe();
        assert_eq!(observer.poll_changed(), Some(Some(5)));

        slot.set(5);
        assert_eq!(observer.poll_changed(), Some(Some(5)));
    }

    #[test]
    fn clear_registers_as_change() {
        let slot = TrackedSlot::with("a");
        let mut observer = slot.observe();
        assert_eq!(observer.poll_changed(), Some(Some("a")));

        slot.clear();
        assert_eq!(observer.poll_changed(), Some(None));
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn late_observer_catches_up_on_first_poll() {
        let slot = TrackedSlot::new();
        slot.set(9u32);

        let mut observer = slot.observe();
        assert_eq!(observer.poll_changed(), Some(Some(9)));
    }
}
