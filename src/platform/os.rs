//! Supported operating systems.

use std::fmt;
use std::str::FromStr;

use crate::error::DotstrapError;

/// The closed set of operating systems the installer knows how to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsKind {
    Windows,
    MacOs,
    Linux,
}

impl OsKind {
    /// All supported systems, in picker order.
    pub const ALL: [OsKind; 3] = [OsKind::Windows, OsKind::MacOs, OsKind::Linux];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        }
    }

    /// One-line description shown under the label in the picker.
    pub fn description(self) -> &'static str {
        match self {
            Self::Windows => "Windows 10/11 with PowerShell",
            Self::MacOs => "macOS with Homebrew and Zsh",
            Self::Linux => "Linux with apt/yum and Zsh",
        }
    }

    /// The system this binary was compiled for, if supported.
    pub fn host() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OsKind {
    type Err = DotstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "macos" | "mac" | "darwin" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(DotstrapError::UnknownPlatform {
                label: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for os in OsKind::ALL {
            assert_eq!(os.label().parse::<OsKind>().unwrap(), os);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("MACOS".parse::<OsKind>().unwrap(), OsKind::MacOs);
        assert_eq!(" linux ".parse::<OsKind>().unwrap(), OsKind::Linux);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "Plan9".parse::<OsKind>().unwrap_err();
        assert!(err.to_string().contains("Plan9"));
    }

    #[test]
    fn picker_order_is_fixed() {
        let labels: Vec<_> = OsKind::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["Windows", "macOS", "Linux"]);
    }

    #[test]
    fn descriptions_mention_shell() {
        assert!(OsKind::Windows.description().contains("PowerShell"));
        assert!(OsKind::MacOs.description().contains("Zsh"));
        assert!(OsKind::Linux.description().contains("Zsh"));
    }
}
