//! Poll-based reactive primitives.
//!
//! The original design is push-stream composition; here it is rendered as an
//! explicit channel model. Tracked slots record a version per write, observers
//! poll for changes once per scheduler tick, and the combinator re-derives
//! combine-latest semantics on top: no output until every input has a value,
//! one output per tick when any input changed since the last output. Several
//! lifecycle invariants (at-most-one-live, recreate-on-worker-change) lean on
//! exactly these semantics.

mod combine;
mod gate;
mod slot;

pub use combine::InputTriple;
pub use gate::AttachmentGate;
pub use slot::{SlotObserver, TrackedSlot};
