//! # Tether
//! Declarative constraint bindings between a scene graph and an asynchronous
//! physics simulation worker.
//!
//! A constraint links two rigid bodies inside a remote simulation engine.
//! Neither body reference, nor the engine itself, is reliably present when a
//! constraint is declared: bodies attach to the runtime scene graph in their
//! own time, and the engine may appear late or restart. This crate owns the
//! resulting lifecycle problem - issue exactly one create once all three
//! inputs are live, tear the resource down exactly once whenever any input
//! changes identity or the declaration is dropped, and keep a typed control
//! api usable the whole time.
//!
//! The moving parts, leaves first:
//! - [`TrackedSlot`]/[`SlotObserver`]: versioned shared cells, polled once
//!   per scheduler tick.
//! - [`AttachmentGate`]: suppresses body assignments that are not attached.
//! - [`InputTriple`]: combine-latest over the worker handle and both gated
//!   bodies; the sole trigger for resource (re)creation.
//! - [`ConstraintBinder`]: teardown-before-create state machine per
//!   declaration.
//! - [`FrameQueue`]: frame-deferred fire-and-forget control dispatch.
//! - [`Constraints`]/[`ConstraintRef`]: the caller-facing service and handle.
//!
//! Control commands are best-effort by contract: issued before the resource
//! exists they reach the worker anyway (which ignores unknown ids), and
//! issued with no engine installed they are dropped with a warning.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod constraint;
mod error;
mod physics;
mod reactive;
mod scene;
mod worker;

pub use constraint::{
    ConeTwist, ConeTwistOpts, ConstraintApi, ConstraintBinder, ConstraintCtl, ConstraintId,
    ConstraintIdGenerator, ConstraintKind, ConstraintOpts, ConstraintRef, ConstraintVariant,
    Constraints, Distance, DistanceOpts, Hinge, HingeApi, HingeOpts, LifecycleState, Lock,
    LockOpts, PointToPoint, PointToPointOpts, Vec3,
};
pub use error::ConstraintError;
pub use physics::{FrameQueue, PhysicsStore};
pub use reactive::{AttachmentGate, InputTriple, SlotObserver, TrackedSlot};
pub use scene::{BodyHandle, BodyId, BodyRef, SceneStore};
pub use worker::{SimulationWorker, WorkerCommand, WorkerGeneration, WorkerHandle, WorkerSlot};
