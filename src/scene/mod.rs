//! The scene-graph side of the boundary: body reference slots and the
//! runtime ready signal, plus the optional physics store attachment that
//! makes a scene physics-capable.

mod body;

pub use body::{BodyHandle, BodyId, BodyRef};

use crate::physics::PhysicsStore;
use crate::reactive::TrackedSlot;

// SceneStore
#[derive(Clone)]
pub struct SceneStore {
    ready: TrackedSlot<bool>,
    physics: Option<PhysicsStore>,
}

impl SceneStore {
    /// A scene with no physics attached. Constraint services cannot be built
    /// over it; see [`Constraints::new`](crate::Constraints::new).
    pub fn new() -> Self {
        Self {
            ready: TrackedSlot::new(),
            physics: None,
        }
    }

    pub fn with_physics(physics: PhysicsStore) -> Self {
        Self {
            ready: TrackedSlot::new(),
            physics: Some(physics),
        }
    }

    /// Signals that the runtime scene graph is up. Binders hold all worker
    /// traffic until this has fired once; it is never un-set.
    pub fn set_ready(&self) {
        self.ready.set(true);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get().unwrap_or(false)
    }

    /// Allocates a fresh body reference slot for the scene graph to drive.
    pub fn body_ref(&self) -> BodyRef {
        BodyRef::new()
    }

    pub fn physics(&self) -> Option<&PhysicsStore> {
        self.physics.as_ref()
    }

    pub(crate) fn ready_slot(&self) -> &TrackedSlot<bool> {
        &self.ready
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
