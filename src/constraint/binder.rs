use log::trace;

use crate::constraint::{ConstraintId, ConstraintKind, ConstraintOpts};
use crate::reactive::{InputTriple, TrackedSlot};
use crate::worker::{WorkerCommand, WorkerHandle};

// LifecycleState
//
// Locally tracked, optimistic existence of the remote resource. Bound means
// "a create has been issued and not yet superseded", not "the worker
// acknowledged it" - this layer never awaits the worker.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LifecycleState {
    Unbound,
    Bound,
    Disposed,
}

// BoundResource
//
// The registered teardown: removing must go to the worker that received the
// create, which is not necessarily the current one.
struct BoundResource {
    worker: WorkerHandle,
}

/// Drives one constraint declaration's remote resource.
///
/// Each poll advances the input combinator; an emission supersedes whatever
/// was bound before, so the previous teardown runs first and at most one
/// remote resource exists per id at any time. Disposal runs the pending
/// teardown exactly once and is terminal: later input changes are ignored.
pub struct ConstraintBinder {
    id: ConstraintId,
    kind: ConstraintKind,
    opts: ConstraintOpts,
    ready: TrackedSlot<bool>,
    started: bool,
    inputs: InputTriple,
    bound: Option<BoundResource>,
    state: LifecycleState,
}

impl ConstraintBinder {
    pub fn new(
        id: ConstraintId,
        opts: ConstraintOpts,
        ready: TrackedSlot<bool>,
        inputs: InputTriple,
    ) -> Self {
        Self {
            id,
            kind: opts.kind(),
            opts,
            ready,
            started: false,
            inputs,
            bound: None,
            state: LifecycleState::Unbound,
        }
    }

    pub fn id(&self) -> ConstraintId {
        self.id
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == LifecycleState::Disposed
    }

    /// One scheduler-tick step. Holds off entirely until the runtime ready
    /// signal has been seen once; after that, every input emission replaces
    /// the bound resource.
    pub fn poll(&mut self) {
        if self.state == LifecycleState::Disposed {
            return;
        }
        if !self.started {
            if self.ready.get() != Some(true) {
                return;
            }
            self.started = true;
        }

        let Some((worker, body_a, body_b)) = self.inputs.poll() else {
            return;
        };

        self.teardown();

        trace!(
            "creating constraint {:?} ({:?}) between {:?} and {:?}",
            self.id,
            self.kind,
            body_a,
            body_b
        );
        worker.send(WorkerCommand::AddConstraint {
            id: self.id,
            kind: self.kind,
            body_a,
            body_b,
            opts: self.opts.clone(),
        });
        self.bound = Some(BoundResource { worker });
        self.state = LifecycleState::Bound;
    }

    /// Final teardown. Idempotent; issues zero worker calls if no create was
    /// ever issued.
    pub fn dispose(&mut self) {
        if self.state == LifecycleState::Disposed {
            return;
        }
        self.teardown();
        self.state = LifecycleState::Disposed;
    }

    fn teardown(&mut self) {
        if let Some(previous) = self.bound.take() {
            trace!("removing constraint {:?}", self.id);
            previous
                .worker
                .send(WorkerCommand::RemoveConstraint { id: self.id });
            self.state = LifecycleState::Unbound;
        }
    }
}
