use crate::reactive::SlotObserver;
use crate::scene::{BodyHandle, BodyId};

// AttachmentGate
//
// Level-triggered readiness filter over a body slot. Assignments whose handle
// is not attached (including a cleared slot) are suppressed outright, never
// buffered; the latest attached id is retained across a detach, so downstream
// simply pauses until re-attachment instead of regressing to "no value".
pub struct AttachmentGate {
    observer: SlotObserver<BodyHandle>,
    latest: Option<BodyId>,
    dirty: bool,
}

impl AttachmentGate {
    pub fn new(observer: SlotObserver<BodyHandle>) -> Self {
        Self {
            observer,
            latest: None,
            dirty: false,
        }
    }

    /// Absorbs any slot changes since the last poll. Each attached assignment
    /// updates the retained id and marks the gate dirty, even when the id is
    /// unchanged (a re-assignment counts as a change, matching the slot).
    pub fn poll(&mut self) {
        if let Some(assignment) = self.observer.poll_changed() {
            match assignment {
                Some(handle) if handle.attached => {
                    self.latest = Some(handle.id);
                    self.dirty = true;
                }
                // Detached or cleared: suppressed, retained id stays put.
                _ => {}
            }
        }
    }

    /// Latest attached id, if the body has ever been attached.
    pub fn latest(&self) -> Option<BodyId> {
        self.latest
    }

    /// Consumes the dirty flag. Callers clear it only when an emission
    /// actually happens, so changes accumulate while other inputs are absent.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
