//! Platform resolver.
//!
//! Paths are a pure function of the home directory and OS conventions. The
//! only host interaction is the read-only package-manager probe.

use std::path::Path;

use crate::environment::Environment;
use crate::error::{DotstrapError, Result};

use super::{OsKind, PackageManager, PlatformProfile};

/// Resolve the profile for `os` against the given environment.
pub fn resolve(os: OsKind, env: &dyn Environment) -> Result<PlatformProfile> {
    let home = env.home_dir().ok_or(DotstrapError::HomeDirNotFound)?;
    let (package_manager, package_manager_found) = detect_package_manager(os, env);

    let profile = match os {
        OsKind::Windows => {
            let config_root = home.join("AppData").join("Local");
            PlatformProfile {
                os,
                package_manager,
                package_manager_found,
                shell: "powershell",
                elevated: env.is_elevated(),
                editor_config_path: config_root.join("nvim"),
                config_root,
                shell_profile_path: home
                    .join("Documents")
                    .join("PowerShell")
                    .join("Microsoft.PowerShell_profile.ps1"),
            }
        }
        OsKind::MacOs | OsKind::Linux => {
            unix_profile(os, &home, package_manager, package_manager_found, env)
        }
    };

    tracing::info!(
        "Resolved {} profile: package manager {} ({})",
        profile.name(),
        profile.package_manager,
        if package_manager_found { "found" } else { "default" }
    );

    Ok(profile)
}

fn unix_profile(
    os: OsKind,
    home: &Path,
    package_manager: PackageManager,
    package_manager_found: bool,
    env: &dyn Environment,
) -> PlatformProfile {
    let config_root = home.join(".config");
    PlatformProfile {
        os,
        package_manager,
        package_manager_found,
        shell: "zsh",
        elevated: env.is_elevated(),
        editor_config_path: config_root.join("nvim"),
        config_root,
        shell_profile_path: home.join(".zshrc"),
    }
}

/// Probe the candidates for `os` in priority order.
///
/// Returns the first manager present on PATH and `true`, or the documented
/// default and `false` when none is present.
pub fn detect_package_manager(os: OsKind, env: &dyn Environment) -> (PackageManager, bool) {
    PackageManager::candidates(os)
        .iter()
        .copied()
        .find(|pm| env.find_executable(pm.executable()).is_some())
        .map(|pm| (pm, true))
        .unwrap_or_else(|| (PackageManager::default_for(os), false))
}
