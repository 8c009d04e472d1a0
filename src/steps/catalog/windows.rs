//! Windows: PowerShell, Scoop/Chocolatey/winget.

use std::sync::Arc;

use crate::platform::{PackageManager, PlatformProfile};
use crate::shell::CommandSpec;
use crate::steps::actions::{
    CommandSequence, EnsureScoop, InstallEach, InstallPackages, LinkEditorConfig,
    ManualInstruction, Package, WriteShellProfile,
};
use crate::steps::Step;

use super::DefaultCatalog;

const NERD_FONT_HINT: &str = "Please install a Nerd Font manually from: https://www.nerdfonts.com/";

const POWERSHELL_MODULES: &str = "Install-Module -Name posh-git -Scope CurrentUser -Force -SkipPublisherCheck; \
Install-Module -Name PSReadLine -Scope CurrentUser -Force -SkipPublisherCheck; \
Install-Module -Name Terminal-Icons -Scope CurrentUser -Force -SkipPublisherCheck";

fn dev_tools(extra: &[String]) -> Vec<Package> {
    let mut tools = vec![
        Package::new("ripgrep").named_for(PackageManager::Winget, "BurntSushi.ripgrep"),
        Package::new("fd").named_for(PackageManager::Winget, "sharkdp.fd"),
        Package::new("fzf").named_for(PackageManager::Winget, "junegunn.fzf"),
        Package::new("lazygit").named_for(PackageManager::Winget, "JesseDuffield.lazygit"),
    ];
    tools.extend(extra.iter().map(Package::new));
    tools
}

fn nerd_font(catalog: &DefaultCatalog, profile: &Arc<PlatformProfile>) -> Step {
    const NAME: &str = "Install Nerd Font";
    const DESCRIPTION: &str = "Installing Hack Nerd Font";

    if profile.package_manager == PackageManager::Scoop {
        let action = InstallPackages::new(
            profile.clone(),
            catalog.runner.clone(),
            vec![Package::new("Hack-NF")],
        )
        .prepare_with(vec![
            CommandSpec::new("scoop").args(["bucket", "add", "nerd-fonts"])
        ]);
        Step::new(NAME, DESCRIPTION, action)
    } else {
        Step::new(NAME, DESCRIPTION, ManualInstruction::new(NERD_FONT_HINT))
    }
}

pub(super) fn steps(catalog: &DefaultCatalog, profile: Arc<PlatformProfile>) -> Vec<Step> {
    let runner = &catalog.runner;
    vec![
        Step::new(
            "Install Package Manager",
            "Ensuring package manager is installed",
            EnsureScoop::new(profile.clone(), runner.clone()),
        ),
        Step::new(
            "Install Neovim",
            "Installing Neovim",
            InstallPackages::new(
                profile.clone(),
                runner.clone(),
                vec![Package::new("neovim").named_for(PackageManager::Winget, "Neovim.Neovim")],
            ),
        ),
        Step::new(
            "Install Git",
            "Installing Git",
            InstallPackages::new(
                profile.clone(),
                runner.clone(),
                vec![Package::new("git").named_for(PackageManager::Winget, "Git.Git")],
            ),
        ),
        Step::new(
            "Install Development Tools",
            "Installing ripgrep, fd, fzf, and other tools",
            InstallEach::new(profile.clone(), runner.clone(), dev_tools(&catalog.extra_tools)),
        ),
        nerd_font(catalog, &profile),
        Step::new(
            "Setup Neovim Config",
            "Linking Neovim configuration",
            LinkEditorConfig::new(
                runner.clone(),
                catalog.source.editor_config(),
                profile.editor_config_path.clone(),
            ),
        ),
        Step::new(
            "Setup PowerShell Profile",
            "Creating PowerShell profile with aliases",
            WriteShellProfile::new(profile.shell_profile_path.clone()),
        ),
        Step::new(
            "Install Terminal Enhancements",
            "Installing Oh-My-Posh and terminal modules",
            CommandSequence::new(runner.clone())
                .optional(CommandSpec::new("winget").args([
                    "install",
                    "JanDeDobbeleer.OhMyPosh",
                    "-s",
                    "winget",
                ]))
                .required(CommandSpec::powershell(POWERSHELL_MODULES)),
        ),
    ]
}
