use crate::reactive::TrackedSlot;

// BodyId
//
// The stable native identifier the simulation worker uses to address a rigid
// body. Assigned by whatever registered the body with the worker; opaque here.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BodyId(pub u64);

// BodyHandle
//
// One observed assignment of a scene-graph body slot: the body's native id
// plus whether the underlying object is currently attached to the runtime
// scene graph. A declared-but-unattached body is not usable by the worker.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BodyHandle {
    pub id: BodyId,
    pub attached: bool,
}

/// Shared, indirect reference to a scene-graph body slot.
///
/// The scene-graph side drives it with [`attach`](BodyRef::attach) /
/// [`detach`](BodyRef::detach); binders only observe it. Cloning yields
/// another handle to the same slot.
#[derive(Clone)]
pub struct BodyRef {
    slot: TrackedSlot<BodyHandle>,
}

impl BodyRef {
    pub(crate) fn new() -> Self {
        Self {
            slot: TrackedSlot::new(),
        }
    }

    /// Marks the body as attached under the given native id. Re-attaching
    /// with the same id is a distinct assignment and re-triggers observers.
    pub fn attach(&self, id: BodyId) {
        self.slot.set(BodyHandle { id, attached: true });
    }

    /// Marks the slot as detached from the runtime scene graph.
    pub fn detach(&self) {
        self.slot.clear();
    }

    pub fn current(&self) -> Option<BodyHandle> {
        self.slot.get()
    }

    pub(crate) fn slot(&self) -> &TrackedSlot<BodyHandle> {
        &self.slot
    }
}
