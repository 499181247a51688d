/// Configuration-error tests: a constraint service built over a scene with no
/// physics store must fail fast at construction, never silently proceed.
mod common;

use common::RecordingWorker;
use tether::{ConstraintError, Constraints, PhysicsStore, SceneStore};

#[test]
fn construction_without_physics_store_is_a_fatal_error() {
    let scene = SceneStore::new();
    scene.set_ready();

    let result = Constraints::new(&scene);

    assert!(matches!(
        result,
        Err(ConstraintError::MissingPhysicsStore)
    ));
}

#[test]
fn construction_with_physics_store_succeeds() {
    let physics = PhysicsStore::new();
    let worker = RecordingWorker::new();
    physics.install_worker(worker.clone());
    let scene = SceneStore::with_physics(physics);

    assert!(Constraints::new(&scene).is_ok());
    // Construction alone talks to nobody.
    assert!(worker.sent().is_empty());
}

#[test]
fn error_message_points_at_the_declaration_site() {
    let error = Constraints::new(&SceneStore::new()).err().unwrap();
    assert!(error.to_string().contains("physics store"));
}
