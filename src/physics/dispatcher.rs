use std::sync::{Arc, Mutex, PoisonError};

use log::trace;

use crate::worker::{WorkerCommand, WorkerHandle};

// FrameQueue
//
// Deferred fire-and-forget channel for control commands. Calls land here
// during whatever synchronous phase the caller is in; the host flushes once
// per scheduler tick, after binder updates. The one-tick deferral gives a
// binder declared in the same phase a chance to issue its create first - an
// ordering hint, not a guarantee. Commands carry the worker handle captured
// at call time, so a flush after an engine restart still sends each command
// where its caller aimed it.
#[derive(Clone)]
pub struct FrameQueue {
    pending: Arc<Mutex<Vec<(WorkerHandle, WorkerCommand)>>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, worker: WorkerHandle, command: WorkerCommand) {
        self.lock().push((worker, command));
    }

    /// Drains the queue in push order, sending every pending command.
    pub fn flush(&self) {
        let pending = std::mem::take(&mut *self.lock());
        for (worker, command) in pending {
            trace!("deferred dispatch: {:?}", command);
            worker.send(command);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(WorkerHandle, WorkerCommand)>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::constraint::ConstraintIdGenerator;
    use crate::worker::{SimulationWorker, WorkerGeneration};

    #[derive(Default)]
    struct Recorder {
        commands: Mutex<Vec<WorkerCommand>>,
    }

    impl SimulationWorker for Recorder {
        fn send(&self, command: WorkerCommand) {
            self.commands.lock().unwrap().push(command);
        }
    }

    #[test]
    fn flush_sends_in_push_order_and_empties() {
        let recorder = Arc::new(Recorder::default());
        let handle = WorkerHandle::new(WorkerGeneration(0), recorder.clone());
        let queue = FrameQueue::new();
        let mut ids = ConstraintIdGenerator::new();
        let id = ids.generate();

        queue.push(handle.clone(), WorkerCommand::EnableConstraint { id });
        queue.push(handle.clone(), WorkerCommand::DisableConstraint { id });

        // Nothing reaches the worker before the frame boundary.
        assert!(recorder.commands.lock().unwrap().is_empty());

        queue.flush();

        let sent = recorder.commands.lock().unwrap().clone();
        assert_eq!(
            sent,
            vec![
                WorkerCommand::EnableConstraint { id },
                WorkerCommand::DisableConstraint { id },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn commands_target_the_worker_captured_at_push_time() {
        let old = Arc::new(Recorder::default());
        let new = Arc::new(Recorder::default());
        let queue = FrameQueue::new();
        let mut ids = ConstraintIdGenerator::new();
        let id = ids.generate();

        queue.push(
            WorkerHandle::new(WorkerGeneration(0), old.clone()),
            WorkerCommand::EnableConstraint { id },
        );
        queue.push(
            WorkerHandle::new(WorkerGeneration(1), new.clone()),
            WorkerCommand::DisableConstraint { id },
        );
        queue.flush();

        assert_eq!(old.commands.lock().unwrap().len(), 1);
        assert_eq!(new.commands.lock().unwrap().len(), 1);
    }
}
