//! The interactive front-end.
//!
//! [`App`] is a plain state machine: it consumes one [`Event`] at a time
//! and answers with a [`Control`] telling the loop what to do next. The
//! loop in [`event_loop`] owns the channel, hands steps to the
//! [`StepRunner`](crate::runner::StepRunner) and asks a [`Renderer`] to
//! draw after every event.

pub mod event;
pub mod event_loop;
pub mod model;

pub use event::{Event, Key};
pub use event_loop::{run_loop, Renderer};
pub use model::{App, Control, ExitStatus, Screen};
