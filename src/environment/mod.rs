//! Host environment access.
//!
//! Everything the installer learns about the machine it runs on (the home
//! directory, which executables are on `PATH`, whether it already runs
//! elevated) goes through the [`Environment`] trait. The platform resolver
//! only ever sees this trait, so tests substitute a [`FakeEnvironment`].
//!
//! # Example
//!
//! ```
//! use dotstrap::environment::{Environment, FakeEnvironment};
//!
//! let env = FakeEnvironment::new("/home/dev").with_executable("apt");
//! assert!(env.find_executable("apt").is_some());
//! assert!(env.find_executable("pacman").is_none());
//! ```

pub mod fake;
pub mod path;

pub use fake::FakeEnvironment;
pub use path::{is_executable, parse_system_path, resolve_tool_path};

use std::path::PathBuf;

/// Read-only view of the host environment.
pub trait Environment: Send + Sync {
    /// The current user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Locate an executable on the command search path.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// Whether the process already runs as root/admin.
    fn is_elevated(&self) -> bool;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Create a handle to the real environment.
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let found = resolve_tool_path(name, &parse_system_path());
        tracing::debug!("Probe for {}: {:?}", name, found);
        found
    }

    fn is_elevated(&self) -> bool {
        is_elevated()
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
