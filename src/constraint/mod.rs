//! Constraint declarations and the machinery that keeps their remote
//! resources alive: id allocation, kind/options records, the lifecycle
//! binder, the typed control apis, and the declaring service.

mod api;
mod binder;
mod id;
mod kind;
mod service;

pub use api::{ConstraintApi, ConstraintCtl, HingeApi};
pub use binder::{ConstraintBinder, LifecycleState};
pub use id::{ConstraintId, ConstraintIdGenerator};
pub use kind::{
    ConeTwist, ConeTwistOpts, ConstraintKind, ConstraintOpts, ConstraintVariant, Distance,
    DistanceOpts, Hinge, HingeOpts, Lock, LockOpts, PointToPoint, PointToPointOpts, Vec3,
};
pub use service::{ConstraintRef, Constraints};
