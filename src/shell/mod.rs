//! External command execution.
//!
//! Step actions never spawn processes directly; they describe the command
//! as a [`CommandSpec`] and hand it to a [`CommandRunner`]. The
//! [`SystemRunner`] executes for real, the [`RecordingRunner`] records and
//! scripts outcomes for tests.

pub mod command;
pub mod recording;
pub mod runner;

pub use command::{execute, CommandOutput, CommandSpec};
pub use recording::RecordingRunner;
pub use runner::{CommandRunner, SystemRunner};
