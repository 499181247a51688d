use std::sync::{Arc, Mutex};

use tether::{SimulationWorker, WorkerCommand};

/// Worker double that records every command it is sent.
#[derive(Default)]
pub struct RecordingWorker {
    commands: Mutex<Vec<WorkerCommand>>,
}

impl RecordingWorker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<WorkerCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Drains the record, so follow-up assertions start from a clean slate.
    pub fn take(&self) -> Vec<WorkerCommand> {
        std::mem::take(&mut *self.commands.lock().unwrap())
    }
}

impl SimulationWorker for RecordingWorker {
    fn send(&self, command: WorkerCommand) {
        self.commands.lock().unwrap().push(command);
    }
}
