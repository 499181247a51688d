//! The physics hosting context: worker provider, id allocation, and the
//! frame-deferred command queue.

mod dispatcher;

pub use dispatcher::FrameQueue;

use std::sync::{Arc, Mutex, PoisonError};

use log::info;

use crate::constraint::{ConstraintId, ConstraintIdGenerator};
use crate::worker::{SimulationWorker, WorkerGeneration, WorkerHandle, WorkerSlot};

// PhysicsStore
//
// The capability object every constraint binder requires. Cloning shares the
// same underlying worker slot, id allocator, and queue, so ids stay unique
// and commands stay ordered across every service built over this store.
// Constructed explicitly by the host and passed down; there is no ambient
// lookup to misconfigure silently.
#[derive(Clone)]
pub struct PhysicsStore {
    worker: WorkerSlot,
    queue: FrameQueue,
    ids: Arc<Mutex<ConstraintIdGenerator>>,
    generations: Arc<Mutex<u64>>,
}

impl PhysicsStore {
    pub fn new() -> Self {
        Self {
            worker: WorkerSlot::new(),
            queue: FrameQueue::new(),
            ids: Arc::new(Mutex::new(ConstraintIdGenerator::new())),
            generations: Arc::new(Mutex::new(0)),
        }
    }

    /// Publishes a (re)started simulation engine. Each install is a fresh
    /// generation, so every live binder observes an identity change and
    /// recreates its resource against the new engine.
    pub fn install_worker(&self, worker: Arc<dyn SimulationWorker>) -> WorkerHandle {
        let generation = {
            let mut generations = self
                .generations
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let generation = WorkerGeneration(*generations);
            *generations += 1;
            generation
        };
        let handle = WorkerHandle::new(generation, worker);
        info!("installing simulation worker {:?}", generation);
        self.worker.set(handle.clone());
        handle
    }

    /// Withdraws the current engine without a replacement. Binders hold their
    /// state and resume when the next worker is installed.
    pub fn clear_worker(&self) {
        info!("clearing simulation worker");
        self.worker.clear();
    }

    pub fn current_worker(&self) -> Option<WorkerHandle> {
        self.worker.get()
    }

    /// Flushes the frame-deferred command queue. Call once per scheduler
    /// tick, after [`Constraints::update`](crate::Constraints::update).
    pub fn flush_deferred(&self) {
        self.queue.flush();
    }

    pub(crate) fn next_constraint_id(&self) -> ConstraintId {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate()
    }

    pub(crate) fn worker_slot(&self) -> &WorkerSlot {
        &self.worker
    }

    pub(crate) fn queue(&self) -> &FrameQueue {
        &self.queue
    }
}

impl Default for PhysicsStore {
    fn default() -> Self {
        Self::new()
    }
}
