use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

use crate::constraint::binder::{ConstraintBinder, LifecycleState};
use crate::constraint::kind::{
    ConeTwist, ConeTwistOpts, ConstraintVariant, Distance, DistanceOpts, Hinge, HingeOpts, Lock,
    LockOpts, PointToPoint, PointToPointOpts,
};
use crate::constraint::{ConstraintCtl, ConstraintId};
use crate::error::ConstraintError;
use crate::physics::{FrameQueue, PhysicsStore};
use crate::reactive::{AttachmentGate, InputTriple};
use crate::scene::{BodyRef, SceneStore};
use crate::worker::WorkerSlot;

type SharedBinder = Arc<RwLock<ConstraintBinder>>;

fn write_binder(binder: &SharedBinder) -> std::sync::RwLockWriteGuard<'_, ConstraintBinder> {
    binder.write().unwrap_or_else(PoisonError::into_inner)
}

// Constraints
//
// The service a component asks for to declare constraints. Construction is
// the one place configuration errors surface: a scene without a physics
// store cannot host constraints, and finding that out late would reduce every
// declaration to silence.
pub struct Constraints {
    scene: SceneStore,
    physics: PhysicsStore,
    binders: Vec<SharedBinder>,
}

impl Constraints {
    pub fn new(scene: &SceneStore) -> Result<Self, ConstraintError> {
        let physics = scene
            .physics()
            .cloned()
            .ok_or(ConstraintError::MissingPhysicsStore)?;
        Ok(Self {
            scene: scene.clone(),
            physics,
            binders: Vec::new(),
        })
    }

    pub fn point_to_point(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: PointToPointOpts,
    ) -> ConstraintRef<PointToPoint> {
        self.declare(body_a, body_b, opts)
    }

    pub fn cone_twist(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: ConeTwistOpts,
    ) -> ConstraintRef<ConeTwist> {
        self.declare(body_a, body_b, opts)
    }

    pub fn distance(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: DistanceOpts,
    ) -> ConstraintRef<Distance> {
        self.declare(body_a, body_b, opts)
    }

    pub fn hinge(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: HingeOpts,
    ) -> ConstraintRef<Hinge> {
        self.declare(body_a, body_b, opts)
    }

    pub fn lock(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: LockOpts,
    ) -> ConstraintRef<Lock> {
        self.declare(body_a, body_b, opts)
    }

    fn declare<K: ConstraintVariant>(
        &mut self,
        body_a: &BodyRef,
        body_b: &BodyRef,
        opts: K::Opts,
    ) -> ConstraintRef<K> {
        let id = self.physics.next_constraint_id();
        let inputs = InputTriple::new(
            self.physics.worker_slot().observe(),
            AttachmentGate::new(body_a.slot().observe()),
            AttachmentGate::new(body_b.slot().observe()),
        );
        let binder = ConstraintBinder::new(
            id,
            opts.into(),
            self.scene.ready_slot().clone(),
            inputs,
        );
        let binder = Arc::new(RwLock::new(binder));
        self.binders.push(Arc::clone(&binder));

        ConstraintRef {
            id,
            body_a: body_a.clone(),
            body_b: body_b.clone(),
            binder,
            worker: self.physics.worker_slot().clone(),
            queue: self.physics.queue().clone(),
            _kind: PhantomData,
        }
    }

    /// Advances every live binder one step and forgets disposed ones. Call
    /// once per scheduler tick, before flushing the deferred queue.
    pub fn update(&mut self) {
        for binder in &self.binders {
            write_binder(binder).poll();
        }
        self.binders
            .retain(|binder| !binder.read().unwrap_or_else(PoisonError::into_inner).is_disposed());
    }

    /// Convenience for hosts with a single-store loop: binder updates, then
    /// the frame flush, in the order the deferral contract expects.
    pub fn tick(&mut self) {
        self.update();
        self.physics.flush_deferred();
    }

    pub fn live_count(&self) -> usize {
        self.binders.len()
    }
}

/// The declaration handle returned to the caller: the two body references and
/// the typed control surface, all keyed to one stable constraint id.
///
/// Dropping the handle finalizes the declaration exactly like
/// [`dispose`](ConstraintRef::dispose).
pub struct ConstraintRef<K: ConstraintVariant> {
    id: ConstraintId,
    body_a: BodyRef,
    body_b: BodyRef,
    binder: SharedBinder,
    worker: WorkerSlot,
    queue: FrameQueue,
    _kind: PhantomData<K>,
}

impl<K: ConstraintVariant> ConstraintRef<K> {
    pub fn id(&self) -> ConstraintId {
        self.id
    }

    pub fn body_a(&self) -> &BodyRef {
        &self.body_a
    }

    pub fn body_b(&self) -> &BodyRef {
        &self.body_b
    }

    pub fn state(&self) -> LifecycleState {
        self.binder
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
    }

    /// The kind-specific control api, rebuilt on every access. Each call
    /// through it reads the worker slot anew, so a handle kept across an
    /// engine restart never aims at the dead engine.
    pub fn api(&self) -> K::Api {
        K::api(ConstraintCtl::new(
            self.id,
            self.worker.clone(),
            self.queue.clone(),
        ))
    }

    /// Tears the remote resource down (if one was ever created) and ends the
    /// declaration. Idempotent; later input changes are ignored.
    pub fn dispose(&self) {
        write_binder(&self.binder).dispose();
    }
}

impl<K: ConstraintVariant> Drop for ConstraintRef<K> {
    fn drop(&mut self) {
        write_binder(&self.binder).dispose();
    }
}
