//! Concrete step actions.
//!
//! Every action owns what it needs up front (a shared profile, paths, the
//! command runner) so it can be moved to a worker thread and run without
//! touching anything else.

pub mod bootstrap;
pub mod commands;
pub mod files;
pub mod packages;
pub mod scripts;

pub use bootstrap::{EnsureHomebrew, EnsureScoop};
pub use commands::{CommandSequence, ManualInstruction};
pub use files::{LinkEditorConfig, WriteShellProfile};
pub use packages::{install_command, InstallEach, InstallPackages, Package, UpdatePackageIndex};
pub use scripts::RunScript;
