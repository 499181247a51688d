use log::trace;

use crate::reactive::{AttachmentGate, SlotObserver};
use crate::scene::BodyId;
use crate::worker::WorkerHandle;

// InputTriple
//
// Combine-latest over the three inputs that gate a constraint's existence:
// the worker handle and the two attachment-gated bodies. No emission until
// all three have produced at least one value; thereafter `poll` emits the
// full latest triple exactly when at least one input has changed since the
// last emission. Dirty flags accumulate while the set is incomplete and are
// cleared only by an emission, so a body that attached long before the worker
// appeared still counts as a change for the first triple.
pub struct InputTriple {
    worker: SlotObserver<WorkerHandle>,
    latest_worker: Option<WorkerHandle>,
    worker_dirty: bool,
    body_a: AttachmentGate,
    body_b: AttachmentGate,
}

impl InputTriple {
    pub fn new(
        worker: SlotObserver<WorkerHandle>,
        body_a: AttachmentGate,
        body_b: AttachmentGate,
    ) -> Self {
        Self {
            worker,
            latest_worker: None,
            worker_dirty: false,
            body_a,
            body_b,
        }
    }

    pub fn poll(&mut self) -> Option<(WorkerHandle, BodyId, BodyId)> {
        if let Some(assignment) = self.worker.poll_changed() {
            match assignment {
                Some(handle) => {
                    self.latest_worker = Some(handle);
                    self.worker_dirty = true;
                }
                // Engine gone with no replacement yet: block further
                // emissions, keep body dirt accumulating.
                None => {
                    self.latest_worker = None;
                    self.worker_dirty = false;
                }
            }
        }
        self.body_a.poll();
        self.body_b.poll();

        let worker = self.latest_worker.as_ref()?;
        let a = self.body_a.latest()?;
        let b = self.body_b.latest()?;

        if !(self.worker_dirty || self.body_a.is_dirty() || self.body_b.is_dirty()) {
            return None;
        }

        self.worker_dirty = false;
        self.body_a.take_dirty();
        self.body_b.take_dirty();

        trace!(
            "input triple ready: worker {:?}, bodies {:?}/{:?}",
            worker.generation(),
            a,
            b
        );
        Some((worker.clone(), a, b))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::reactive::TrackedSlot;
    use crate::scene::{BodyHandle, BodyId};
    use crate::worker::{SimulationWorker, WorkerCommand, WorkerGeneration, WorkerSlot};

    struct NullWorker;

    impl SimulationWorker for NullWorker {
        fn send(&self, _command: WorkerCommand) {}
    }

    fn handle(generation: u64) -> WorkerHandle {
        WorkerHandle::new(WorkerGeneration(generation), Arc::new(NullWorker))
    }

    struct Fixture {
        worker: WorkerSlot,
        body_a: TrackedSlot<BodyHandle>,
        body_b: TrackedSlot<BodyHandle>,
        triple: InputTriple,
    }

    fn fixture() -> Fixture {
        let worker = WorkerSlot::new();
        let body_a = TrackedSlot::new();
        let body_b = TrackedSlot::new();
        let triple = InputTriple::new(
            worker.observe(),
            AttachmentGate::new(body_a.observe()),
            AttachmentGate::new(body_b.observe()),
        );
        Fixture {
            worker,
            body_a,
            body_b,
            triple,
        }
    }

    fn attached(id: u64) -> BodyHandle {
        BodyHandle {
            id: BodyId(id),
            attached: true,
        }
    }

    #[test]
    fn no_emission_until_all_inputs_present() {
        let mut fx = fixture();

        fx.worker.set(handle(1));
        fx.body_a.set(attached(10));
        assert!(fx.triple.poll().is_none());

        fx.body_b.set(attached(20));
        let (worker, a, b) = fx.triple.poll().expect("triple should emit");
        assert_eq!(worker.generation(), WorkerGeneration(1));
        assert_eq!(a, BodyId(10));
        assert_eq!(b, BodyId(20));
    }

    #[test]
    fn no_reemission_without_change() {
        let mut fx = fixture();
        fx.worker.set(handle(1));
        fx.body_a.set(attached(10));
        fx.body_b.set(attached(20));

        assert!(fx.triple.poll().is_some());
        assert!(fx.triple.poll().is_none());
    }

    #[test]
    fn single_input_change_reemits_full_triple() {
        let mut fx = fixture();
        fx.worker.set(handle(1));
        fx.body_a.set(attached(10));
        fx.body_b.set(attached(20));
        fx.triple.poll().unwrap();

        fx.body_a.set(attached(11));
        let (_, a, b) = fx.triple.poll().expect("change should re-emit");
        assert_eq!(a, BodyId(11));
        assert_eq!(b, BodyId(20));
    }

    #[test]
    fn worker_replacement_reemits() {
        let mut fx = fixture();
        fx.worker.set(handle(1));
        fx.body_a.set(attached(10));
        fx.body_b.set(attached(20));
        fx.triple.poll().unwrap();

        fx.worker.set(handle(2));
        let (worker, a, b) = fx.triple.poll().expect("new worker should re-emit");
        assert_eq!(worker.generation(), WorkerGeneration(2));
        assert_eq!(a, BodyId(10));
        assert_eq!(b, BodyId(20));
    }

    #[test]
    fn early_body_dirt_survives_until_worker_appears() {
        let mut fx = fixture();
        fx.body_a.set(attached(10));
        fx.body_b.set(attached(20));

        // Poll while incomplete; dirt must not be consumed.
        assert!(fx.triple.poll().is_none());
        assert!(fx.triple.poll().is_none());

        fx.worker.set(handle(1));
        assert!(fx.triple.poll().is_some());
    }

    #[test]
    fn cleared_worker_blocks_emission() {
        let mut fx = fixture();
        fx.worker.set(handle(1));
        fx.body_a.set(attached(10));
        fx.body_b.set(attached(20));
        fx.triple.poll().unwrap();

        fx.worker.clear();
        fx.body_a.set(attached(11));
        assert!(fx.triple.poll().is_none());

        fx.worker.set(handle(2));
        let (worker, a, _) = fx.triple.poll().expect("new worker resumes");
        assert_eq!(worker.generation(), WorkerGeneration(2));
        assert_eq!(a, BodyId(11));
    }
}
