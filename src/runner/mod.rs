//! Sequential step execution.
//!
//! [`RunState`] is the bookkeeping the front-end owns: which step is in
//! flight, how far the run got and how it ended. [`StepRunner`] moves one
//! step at a time onto a worker thread and reports back through the event
//! channel.

pub mod dispatch;
pub mod state;

pub use dispatch::StepRunner;
pub use state::{RunPhase, RunState};
