//! Command-line interface for dotstrap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`install`] - The interactive install session behind the single entry point

pub mod args;
pub mod install;

pub use args::Cli;
pub use install::{needs_sudo_warmup, run_install, settings_for, SessionOutcome};
