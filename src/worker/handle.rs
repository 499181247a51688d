use std::fmt;
use std::sync::Arc;

use crate::reactive::TrackedSlot;
use crate::worker::WorkerCommand;

/// The asynchronous simulation engine, seen from this side of the wall.
///
/// Implementations forward commands to wherever the simulation actually runs
/// (a worker thread, a wasm worker, a test recorder). Sends must not block.
pub trait SimulationWorker: Send + Sync {
    fn send(&self, command: WorkerCommand);
}

// WorkerGeneration
//
// Installed workers are numbered so that an engine restart is observable as an
// identity change even when the new engine reuses the old trait object.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct WorkerGeneration(pub(crate) u64);

// WorkerHandle
#[derive(Clone)]
pub struct WorkerHandle {
    generation: WorkerGeneration,
    worker: Arc<dyn SimulationWorker>,
}

impl WorkerHandle {
    pub(crate) fn new(generation: WorkerGeneration, worker: Arc<dyn SimulationWorker>) -> Self {
        Self { generation, worker }
    }

    pub fn generation(&self) -> WorkerGeneration {
        self.generation
    }

    /// Fire-and-forget send to the live engine behind this handle.
    pub fn send(&self, command: WorkerCommand) {
        self.worker.send(command);
    }
}

impl PartialEq for WorkerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
    }
}

impl Eq for WorkerHandle {}

impl fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerHandle")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// Tracked holder of the current worker handle, shared read-only across all
/// constraint instances. Only the owning [`PhysicsStore`](crate::PhysicsStore)
/// writes to it.
pub type WorkerSlot = TrackedSlot<WorkerHandle>;
