//! Package installation through the profile's package manager.

use std::sync::Arc;

use crate::platform::{PackageManager, PlatformProfile};
use crate::shell::{CommandRunner, CommandSpec};

use crate::steps::{Action, ActionResult, BestEffort, StepOutcome};

/// A package whose name may differ between managers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    overrides: Vec<(PackageManager, String)>,
}

impl Package {
    /// A package known by the same name everywhere.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: Vec::new(),
        }
    }

    /// Use a different name (or winget ID) for one manager.
    pub fn named_for(mut self, manager: PackageManager, name: impl Into<String>) -> Self {
        self.overrides.push((manager, name.into()));
        self
    }

    /// Common name, used in messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name to pass to `manager`.
    pub fn name_for(&self, manager: PackageManager) -> &str {
        self.overrides
            .iter()
            .find(|(pm, _)| *pm == manager)
            .map(|(_, name)| name.as_str())
            .unwrap_or(&self.name)
    }
}

/// Build the install command for `names` under the profile's manager.
pub fn install_command(profile: &PlatformProfile, names: &[&str]) -> CommandSpec {
    let manager = profile.package_manager;
    let base = CommandSpec::new(manager.executable());
    let cmd = match manager {
        PackageManager::Pacman => base.arg("-S").args(names.iter().copied()),
        _ => base.arg("install").args(names.iter().copied()),
    };
    let cmd = match manager.assume_yes_flag() {
        Some(flag) => cmd.arg(flag),
        None => cmd,
    };
    cmd.with_prefix(profile.privilege_prefix())
}

/// Refresh the package index. A no-op for managers without one.
pub struct UpdatePackageIndex {
    profile: Arc<PlatformProfile>,
    runner: Arc<dyn CommandRunner>,
}

impl UpdatePackageIndex {
    pub fn new(profile: Arc<PlatformProfile>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { profile, runner }
    }

    /// The refresh command, if the manager has one.
    pub fn command(profile: &PlatformProfile) -> Option<CommandSpec> {
        let cmd = match profile.package_manager {
            PackageManager::Apt => CommandSpec::new("apt").arg("update"),
            PackageManager::Yum => CommandSpec::new("yum").args(["update", "-y"]),
            PackageManager::Pacman => CommandSpec::new("pacman").arg("-Sy"),
            _ => return None,
        };
        Some(cmd.with_prefix(profile.privilege_prefix()))
    }
}

impl Action for UpdatePackageIndex {
    fn run(&self) -> ActionResult {
        match Self::command(&self.profile) {
            Some(cmd) => self.runner.run(&cmd).map(|_| StepOutcome::clean()),
            None => Ok(StepOutcome::clean()),
        }
    }
}

/// Install packages in one go, after optional best-effort preparation.
///
/// Winget only accepts one ID per call, so there each package gets its own
/// command; any failure still fails the step.
pub struct InstallPackages {
    profile: Arc<PlatformProfile>,
    runner: Arc<dyn CommandRunner>,
    packages: Vec<Package>,
    preparation: Vec<CommandSpec>,
}

impl InstallPackages {
    pub fn new(
        profile: Arc<PlatformProfile>,
        runner: Arc<dyn CommandRunner>,
        packages: Vec<Package>,
    ) -> Self {
        Self {
            profile,
            runner,
            packages,
            preparation: Vec::new(),
        }
    }

    /// Commands tried before the install whose failure is tolerated
    /// (adding a repository, refreshing an index).
    pub fn prepare_with(mut self, commands: Vec<CommandSpec>) -> Self {
        self.preparation = commands;
        self
    }

    /// The install commands this action will run.
    pub fn commands(&self) -> Vec<CommandSpec> {
        let manager = self.profile.package_manager;
        let names: Vec<&str> = self.packages.iter().map(|p| p.name_for(manager)).collect();
        if manager == PackageManager::Winget {
            names
                .iter()
                .map(|name| install_command(&self.profile, &[*name]))
                .collect()
        } else {
            vec![install_command(&self.profile, &names)]
        }
    }
}

impl Action for InstallPackages {
    fn run(&self) -> ActionResult {
        let mut effort = BestEffort::new();
        for cmd in &self.preparation {
            effort.attempt(cmd.to_string(), || self.runner.run(cmd));
        }
        for cmd in self.commands() {
            self.runner.run(&cmd)?;
        }
        Ok(effort.into_outcome())
    }
}

/// Install packages one at a time, tolerating individual failures.
pub struct InstallEach {
    profile: Arc<PlatformProfile>,
    runner: Arc<dyn CommandRunner>,
    packages: Vec<Package>,
}

impl InstallEach {
    pub fn new(
        profile: Arc<PlatformProfile>,
        runner: Arc<dyn CommandRunner>,
        packages: Vec<Package>,
    ) -> Self {
        Self {
            profile,
            runner,
            packages,
        }
    }
}

impl Action for InstallEach {
    fn run(&self) -> ActionResult {
        let manager = self.profile.package_manager;
        let mut effort = BestEffort::new();
        for package in &self.packages {
            let cmd = install_command(&self.profile, &[package.name_for(manager)]);
            effort.attempt(format!("Failed to install {}", package.name()), || {
                self.runner.run(&cmd)
            });
        }
        Ok(effort.into_outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{OsKind, SUDO_NON_INTERACTIVE};
    use crate::shell::RecordingRunner;
    use std::path::PathBuf;

    fn profile(os: OsKind, manager: PackageManager, elevated: bool) -> Arc<PlatformProfile> {
        Arc::new(PlatformProfile {
            os,
            package_manager: manager,
            package_manager_found: true,
            shell: "zsh",
            elevated,
            config_root: PathBuf::from("/h/.config"),
            editor_config_path: PathBuf::from("/h/.config/nvim"),
            shell_profile_path: PathBuf::from("/h/.zshrc"),
        })
    }

    #[test]
    fn install_command_per_manager() {
        let apt = profile(OsKind::Linux, PackageManager::Apt, false);
        assert_eq!(
            install_command(&apt, &["zsh"]).to_string(),
            "sudo -n apt install zsh -y"
        );

        let pacman = profile(OsKind::Linux, PackageManager::Pacman, true);
        assert_eq!(
            install_command(&pacman, &["zsh", "git"]).to_string(),
            "pacman -S zsh git --noconfirm"
        );

        let choco = profile(OsKind::Windows, PackageManager::Chocolatey, false);
        assert_eq!(
            install_command(&choco, &["git"]).to_string(),
            "choco install git -y"
        );

        let brew = profile(OsKind::MacOs, PackageManager::Homebrew, false);
        assert_eq!(
            install_command(&brew, &["neovim"]).to_string(),
            "brew install neovim"
        );
    }

    #[test]
    fn package_overrides() {
        let fd = Package::new("fd")
            .named_for(PackageManager::Apt, "fd-find")
            .named_for(PackageManager::Winget, "sharkdp.fd");
        assert_eq!(fd.name_for(PackageManager::Apt), "fd-find");
        assert_eq!(fd.name_for(PackageManager::Winget), "sharkdp.fd");
        assert_eq!(fd.name_for(PackageManager::Pacman), "fd");
    }

    #[test]
    fn update_index_commands() {
        let yum = profile(OsKind::Linux, PackageManager::Yum, false);
        assert_eq!(
            UpdatePackageIndex::command(&yum).unwrap().to_string(),
            "sudo -n yum update -y"
        );
        let scoop = profile(OsKind::Windows, PackageManager::Scoop, false);
        assert!(UpdatePackageIndex::command(&scoop).is_none());
    }

    #[test]
    fn update_index_failure_fails_step() {
        let runner = Arc::new(RecordingRunner::new().fail_on("apt update"));
        let action = UpdatePackageIndex::new(
            profile(OsKind::Linux, PackageManager::Apt, false),
            runner.clone(),
        );
        assert!(action.run().is_err());
    }

    #[test]
    fn winget_installs_one_id_per_command() {
        let runner = Arc::new(RecordingRunner::new());
        let action = InstallPackages::new(
            profile(OsKind::Windows, PackageManager::Winget, false),
            runner.clone(),
            vec![
                Package::new("neovim").named_for(PackageManager::Winget, "Neovim.Neovim"),
                Package::new("git").named_for(PackageManager::Winget, "Git.Git"),
            ],
        );
        action.run().unwrap();
        assert_eq!(
            runner.command_lines(),
            vec!["winget install Neovim.Neovim", "winget install Git.Git"]
        );
    }

    #[test]
    fn preparation_failures_only_warn() {
        let runner = Arc::new(RecordingRunner::new().fail_on("add-apt-repository"));
        let action = InstallPackages::new(
            profile(OsKind::Linux, PackageManager::Apt, false),
            runner.clone(),
            vec![Package::new("neovim")],
        )
        .prepare_with(vec![
            CommandSpec::new("add-apt-repository")
                .args(["ppa:neovim-ppa/unstable", "-y"])
                .with_prefix(Some(SUDO_NON_INTERACTIVE)),
        ]);

        let outcome = action.run().unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("add-apt-repository"));
        assert_eq!(
            runner.command_lines().last().unwrap(),
            "sudo -n apt install neovim -y"
        );
    }

    #[test]
    fn install_failure_is_fatal() {
        let runner = Arc::new(RecordingRunner::new().fail_on("install neovim"));
        let action = InstallPackages::new(
            profile(OsKind::Linux, PackageManager::Apt, false),
            runner,
            vec![Package::new("neovim")],
        );
        assert!(action.run().is_err());
    }

    #[test]
    fn install_each_tolerates_failures() {
        let runner = Arc::new(RecordingRunner::new().fail_on("lazygit"));
        let action = InstallEach::new(
            profile(OsKind::Windows, PackageManager::Scoop, false),
            runner.clone(),
            vec![Package::new("ripgrep"), Package::new("lazygit"), Package::new("fzf")],
        );

        let outcome = action.run().unwrap();
        assert_eq!(runner.commands().len(), 3);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].starts_with("Failed to install lazygit"));
    }
}
