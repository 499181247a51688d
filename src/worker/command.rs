use crate::constraint::{ConstraintId, ConstraintKind, ConstraintOpts};
use crate::scene::BodyId;

// WorkerCommand
//
// Everything this layer ever says to the simulation worker. All of it is
// fire-and-forget: no reply is awaited and no delivery is confirmed. The
// worker is expected to treat commands addressing an unknown id as no-ops.
#[derive(Clone, PartialEq, Debug)]
pub enum WorkerCommand {
    AddConstraint {
        id: ConstraintId,
        kind: ConstraintKind,
        body_a: BodyId,
        body_b: BodyId,
        opts: ConstraintOpts,
    },
    RemoveConstraint {
        id: ConstraintId,
    },
    EnableConstraint {
        id: ConstraintId,
    },
    DisableConstraint {
        id: ConstraintId,
    },
    EnableConstraintMotor {
        id: ConstraintId,
    },
    DisableConstraintMotor {
        id: ConstraintId,
    },
    SetConstraintMotorMaxForce {
        id: ConstraintId,
        value: f64,
    },
    SetConstraintMotorSpeed {
        id: ConstraintId,
        value: f64,
    },
}

impl WorkerCommand {
    /// The constraint this command addresses.
    pub fn constraint_id(&self) -> ConstraintId {
        match self {
            Self::AddConstraint { id, .. } => *id,
            Self::RemoveConstraint { id } => *id,
            Self::EnableConstraint { id } => *id,
            Self::DisableConstraint { id } => *id,
            Self::EnableConstraintMotor { id } => *id,
            Self::DisableConstraintMotor { id } => *id,
            Self::SetConstraintMotorMaxForce { id, .. } => *id,
            Self::SetConstraintMotorSpeed { id, .. } => *id,
        }
    }
}
