//! Package manager identities and per-OS probing order.

use std::fmt;

use super::OsKind;

/// System package managers the installer can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    // Windows
    Scoop,
    Chocolatey,
    Winget,

    // macOS
    Homebrew,

    // Linux
    Apt,
    Yum,
    Pacman,
}

impl PackageManager {
    /// Executable name used both for probing and invocation.
    pub fn executable(self) -> &'static str {
        match self {
            Self::Scoop => "scoop",
            Self::Chocolatey => "choco",
            Self::Winget => "winget",
            Self::Homebrew => "brew",
            Self::Apt => "apt",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
        }
    }

    /// Candidates probed for `os`, highest priority first.
    pub fn candidates(os: OsKind) -> &'static [PackageManager] {
        match os {
            OsKind::Windows => &[Self::Scoop, Self::Chocolatey],
            OsKind::MacOs => &[Self::Homebrew],
            OsKind::Linux => &[Self::Apt, Self::Yum, Self::Pacman],
        }
    }

    /// Manager assumed when no candidate is on PATH.
    pub fn default_for(os: OsKind) -> PackageManager {
        match os {
            OsKind::Windows => Self::Winget,
            OsKind::MacOs => Self::Homebrew,
            OsKind::Linux => Self::Apt,
        }
    }

    /// Flag that suppresses the manager's confirmation prompt, if it has one.
    pub fn assume_yes_flag(self) -> Option<&'static str> {
        match self {
            Self::Chocolatey | Self::Apt | Self::Yum => Some("-y"),
            Self::Pacman => Some("--noconfirm"),
            Self::Scoop | Self::Winget | Self::Homebrew => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_probes_scoop_before_choco() {
        assert_eq!(
            PackageManager::candidates(OsKind::Windows),
            &[PackageManager::Scoop, PackageManager::Chocolatey]
        );
        assert_eq!(
            PackageManager::default_for(OsKind::Windows),
            PackageManager::Winget
        );
    }

    #[test]
    fn linux_probe_order() {
        let names: Vec<_> = PackageManager::candidates(OsKind::Linux)
            .iter()
            .map(|pm| pm.executable())
            .collect();
        assert_eq!(names, vec!["apt", "yum", "pacman"]);
        assert_eq!(
            PackageManager::default_for(OsKind::Linux),
            PackageManager::Apt
        );
    }

    #[test]
    fn macos_uses_homebrew() {
        assert_eq!(
            PackageManager::candidates(OsKind::MacOs),
            &[PackageManager::Homebrew]
        );
        assert_eq!(PackageManager::Homebrew.to_string(), "brew");
    }

    #[test]
    fn assume_yes_flags() {
        assert_eq!(PackageManager::Apt.assume_yes_flag(), Some("-y"));
        assert_eq!(PackageManager::Pacman.assume_yes_flag(), Some("--noconfirm"));
        assert_eq!(PackageManager::Scoop.assume_yes_flag(), None);
    }
}
