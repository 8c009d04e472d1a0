//! Resolved per-run platform configuration.

use std::path::PathBuf;

use super::{OsKind, PackageManager};

/// `sudo` without ever prompting for a password.
pub const SUDO_NON_INTERACTIVE: &[&str] = &["sudo", "-n"];

/// Immutable description of the machine being provisioned.
///
/// Built once by [`resolve`](super::resolve) when the user picks an OS and
/// never modified afterwards; step actions receive clones of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// The selected operating system.
    pub os: OsKind,
    /// Package manager every install step goes through.
    pub package_manager: PackageManager,
    /// Whether the package manager was found on PATH (vs. defaulted).
    pub package_manager_found: bool,
    /// Shell whose profile gets configured (`powershell` or `zsh`).
    pub shell: &'static str,
    /// Whether the installer already runs as root/admin.
    pub elevated: bool,
    /// Root of per-user application configuration.
    pub config_root: PathBuf,
    /// Where the editor configuration is linked.
    pub editor_config_path: PathBuf,
    /// Shell startup file.
    pub shell_profile_path: PathBuf,
}

impl PlatformProfile {
    /// Display name of the platform.
    pub fn name(&self) -> &'static str {
        self.os.label()
    }

    /// Command prefix needed to run system package operations.
    ///
    /// Linux package managers need root; everything else runs as the user.
    /// `sudo` never prompts (`-n`): the front-end owns the terminal, so a
    /// missing credential fails the step instead of hanging it.
    pub fn privilege_prefix(&self) -> Option<&'static [&'static str]> {
        (self.os == OsKind::Linux && !self.elevated).then_some(SUDO_NON_INTERACTIVE)
    }

    /// The privilege prefix as shell text, with a trailing space, or empty.
    pub fn privilege_prefix_shell(&self) -> String {
        self.privilege_prefix()
            .map(|p| format!("{} ", p.join(" ")))
            .unwrap_or_default()
    }
}
