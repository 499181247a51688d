use log::warn;

use crate::constraint::ConstraintId;
use crate::physics::FrameQueue;
use crate::worker::{WorkerCommand, WorkerSlot};

// ConstraintCtl
//
// Shared plumbing behind every control api. Each call reads the worker slot
// at call time, so a command raised after an engine restart targets the new
// engine even through a handle created before it. The send itself is deferred
// to the next frame flush; if no worker is live at call time the command is
// dropped, never queued for later. "Fire and hope" by contract.
#[derive(Clone)]
pub struct ConstraintCtl {
    id: ConstraintId,
    worker: WorkerSlot,
    queue: FrameQueue,
}

impl ConstraintCtl {
    pub(crate) fn new(id: ConstraintId, worker: WorkerSlot, queue: FrameQueue) -> Self {
        Self { id, worker, queue }
    }

    fn dispatch(&self, command: WorkerCommand) {
        let Some(worker) = self.worker.get() else {
            warn!(
                "dropping control command for constraint {:?}: no live worker",
                self.id
            );
            return;
        };
        self.queue.push(worker, command);
    }
}

/// Control surface common to every constraint kind.
///
/// Built fresh on each [`ConstraintRef::api`](crate::ConstraintRef::api)
/// access; never cached, so it cannot pin a defunct worker.
pub struct ConstraintApi {
    ctl: ConstraintCtl,
}

impl ConstraintApi {
    pub(crate) fn new(ctl: ConstraintCtl) -> Self {
        Self { ctl }
    }

    pub fn enable(&self) {
        self.ctl.dispatch(WorkerCommand::EnableConstraint { id: self.ctl.id });
    }

    pub fn disable(&self) {
        self.ctl.dispatch(WorkerCommand::DisableConstraint { id: self.ctl.id });
    }
}

/// Control surface for [`Hinge`](crate::Hinge) constraints: the common
/// operations plus the motor.
pub struct HingeApi {
    ctl: ConstraintCtl,
}

impl HingeApi {
    pub(crate) fn new(ctl: ConstraintCtl) -> Self {
        Self { ctl }
    }

    pub fn enable(&self) {
        self.ctl.dispatch(WorkerCommand::EnableConstraint { id: self.ctl.id });
    }

    pub fn disable(&self) {
        self.ctl.dispatch(WorkerCommand::DisableConstraint { id: self.ctl.id });
    }

    pub fn enable_motor(&self) {
        self.ctl
            .dispatch(WorkerCommand::EnableConstraintMotor { id: self.ctl.id });
    }

    pub fn disable_motor(&self) {
        self.ctl
            .dispatch(WorkerCommand::DisableConstraintMotor { id: self.ctl.id });
    }

    pub fn set_motor_max_force(&self, value: f64) {
        self.ctl.dispatch(WorkerCommand::SetConstraintMotorMaxForce {
            id: self.ctl.id,
            value,
        });
    }

    pub fn set_motor_speed(&self, value: f64) {
        self.ctl.dispatch(WorkerCommand::SetConstraintMotorSpeed {
            id: self.ctl.id,
            value,
        });
    }
}
