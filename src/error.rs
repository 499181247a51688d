use thiserror::Error;

/// Errors surfaced by the constraint layer.
///
/// Only configuration mistakes propagate. Everything downstream of a correct
/// declaration is absorbed: unready inputs are the absence of an emission,
/// lost control commands are logged and dropped, and remote failures belong
/// to the worker's own reporting channel.
#[derive(Debug, Clone, Error)]
pub enum ConstraintError {
    /// A constraint service was constructed over a scene with no physics
    /// store attached. Fatal and synchronous: the declaration site must be
    /// moved inside a physics-enabled scene.
    #[error("constraint service requires a physics store - build the scene with SceneStore::with_physics")]
    MissingPhysicsStore,
}
