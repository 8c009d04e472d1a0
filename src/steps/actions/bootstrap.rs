//! Package manager bootstrapping.

use std::sync::Arc;

use crate::platform::{PackageManager, PlatformProfile};
use crate::shell::{CommandRunner, CommandSpec};
use crate::steps::{Action, ActionResult, StepOutcome};

const HOMEBREW_INSTALL: &str = "NONINTERACTIVE=1 /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

const SCOOP_INSTALL: &str = "Set-ExecutionPolicy -ExecutionPolicy RemoteSigned -Scope CurrentUser; Invoke-RestMethod -Uri https://get.scoop.sh | Invoke-Expression";

/// Install Homebrew unless it was found while resolving the profile.
pub struct EnsureHomebrew {
    profile: Arc<PlatformProfile>,
    runner: Arc<dyn CommandRunner>,
}

impl EnsureHomebrew {
    pub fn new(profile: Arc<PlatformProfile>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { profile, runner }
    }
}

impl Action for EnsureHomebrew {
    fn run(&self) -> ActionResult {
        if self.profile.package_manager_found {
            tracing::info!("Homebrew already installed");
            return Ok(StepOutcome::clean());
        }
        self.runner.run(&CommandSpec::bash(HOMEBREW_INSTALL))?;
        Ok(StepOutcome::clean())
    }
}

/// Make sure a usable Windows package manager exists.
///
/// An existing Scoop or Chocolatey is kept. Otherwise Scoop is installed
/// for later use while this run continues through winget.
pub struct EnsureScoop {
    profile: Arc<PlatformProfile>,
    runner: Arc<dyn CommandRunner>,
}

impl EnsureScoop {
    pub fn new(profile: Arc<PlatformProfile>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { profile, runner }
    }
}

impl Action for EnsureScoop {
    fn run(&self) -> ActionResult {
        if matches!(
            self.profile.package_manager,
            PackageManager::Scoop | PackageManager::Chocolatey
        ) {
            return Ok(StepOutcome::clean());
        }
        self.runner.run(&CommandSpec::powershell(SCOOP_INSTALL))?;
        Ok(StepOutcome::clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OsKind;
    use crate::shell::RecordingRunner;
    use std::path::PathBuf;

    fn profile(os: OsKind, manager: PackageManager, found: bool) -> Arc<PlatformProfile> {
        Arc::new(PlatformProfile {
            os,
            package_manager: manager,
            package_manager_found: found,
            shell: "zsh",
            elevated: false,
            config_root: PathBuf::from("/h/.config"),
            editor_config_path: PathBuf::from("/h/.config/nvim"),
            shell_profile_path: PathBuf::from("/h/.zshrc"),
        })
    }

    #[test]
    fn homebrew_skipped_when_found() {
        let runner = Arc::new(RecordingRunner::new());
        let action = EnsureHomebrew::new(
            profile(OsKind::MacOs, PackageManager::Homebrew, true),
            runner.clone(),
        );
        action.run().unwrap();
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn homebrew_installed_when_missing() {
        let runner = Arc::new(RecordingRunner::new());
        let action = EnsureHomebrew::new(
            profile(OsKind::MacOs, PackageManager::Homebrew, false),
            runner.clone(),
        );
        action.run().unwrap();
        let cmds = runner.commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].program, "bash");
        assert!(cmds[0].args[1].contains("Homebrew/install"));
    }

    #[test]
    fn scoop_kept_when_present() {
        let runner = Arc::new(RecordingRunner::new());
        let action = EnsureScoop::new(
            profile(OsKind::Windows, PackageManager::Chocolatey, true),
            runner.clone(),
        );
        action.run().unwrap();
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn scoop_bootstrapped_for_winget() {
        let runner = Arc::new(RecordingRunner::new().fail_on("get.scoop.sh"));
        let action = EnsureScoop::new(
            profile(OsKind::Windows, PackageManager::Winget, false),
            runner.clone(),
        );
        assert!(action.run().is_err());
        assert_eq!(runner.commands()[0].program, "powershell");
    }
}
