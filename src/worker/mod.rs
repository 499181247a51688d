//! The boundary with the remote simulation engine: the command vocabulary and
//! the tracked handle through which commands leave this layer.

mod command;
mod handle;

pub use command::WorkerCommand;
pub use handle::{SimulationWorker, WorkerGeneration, WorkerHandle, WorkerSlot};
