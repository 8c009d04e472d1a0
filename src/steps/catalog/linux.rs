//! Linux: apt, yum or pacman, always behind `sudo -n` unless already root.

use std::sync::Arc;

use crate::platform::{PackageManager, PlatformProfile};
use crate::shell::CommandSpec;
use crate::steps::actions::{
    CommandSequence, InstallPackages, Package, RunScript, UpdatePackageIndex,
};
use crate::steps::Step;

use super::{DefaultCatalog, LINKER, NVM_SCRIPT, ZSH_SCRIPT};

const LAZYGIT_RELEASE: &str = r#"LAZYGIT_VERSION=$(curl -s "https://api.github.com/repos/jesseduffield/lazygit/releases/latest" | grep -Po '"tag_name": "v\K[^"]*')
curl -Lo lazygit.tar.gz "https://github.com/jesseduffield/lazygit/releases/latest/download/lazygit_${LAZYGIT_VERSION}_Linux_x86_64.tar.gz"
tar xf lazygit.tar.gz lazygit
{sudo}install lazygit /usr/local/bin
rm lazygit lazygit.tar.gz"#;

const HACK_NERD_FONT: &str = r#"mkdir -p ~/.local/share/fonts
cd ~/.local/share/fonts
curl -fLo "Hack Regular Nerd Font Complete.ttf" https://github.com/ryanoasis/nerd-fonts/raw/master/patched-fonts/Hack/Regular/complete/Hack%20Regular%20Nerd%20Font%20Complete.ttf
fc-cache -fv"#;

fn dev_packages(manager: PackageManager, extra: &[String]) -> Vec<Package> {
    let base: &[&str] = match manager {
        PackageManager::Yum => &["git", "ripgrep", "fd-find", "fzf", "curl", "wget", "gcc", "make"],
        PackageManager::Pacman => &["git", "ripgrep", "fd", "fzf", "curl", "wget", "base-devel"],
        _ => &[
            "git",
            "ripgrep",
            "fd-find",
            "fzf",
            "curl",
            "wget",
            "build-essential",
        ],
    };
    base.iter()
        .copied()
        .map(Package::new)
        .chain(extra.iter().map(Package::new))
        .collect()
}

fn add_apt_repository(profile: &PlatformProfile, ppa: &str) -> Vec<CommandSpec> {
    let mut prep = vec![CommandSpec::new("add-apt-repository")
        .args([ppa, "-y"])
        .with_prefix(profile.privilege_prefix())];
    prep.extend(UpdatePackageIndex::command(profile));
    prep
}

fn neovim(catalog: &DefaultCatalog, profile: &Arc<PlatformProfile>) -> Step {
    let mut action = InstallPackages::new(
        profile.clone(),
        catalog.runner.clone(),
        vec![Package::new("neovim")],
    );
    if profile.package_manager == PackageManager::Apt {
        action = action.prepare_with(add_apt_repository(profile, "ppa:neovim-ppa/unstable"));
    }
    Step::new("Install Neovim", "Installing Neovim", action)
}

fn lazygit(catalog: &DefaultCatalog, profile: &Arc<PlatformProfile>) -> Step {
    const NAME: &str = "Install LazyGit";
    const DESCRIPTION: &str = "Installing LazyGit";

    let runner = catalog.runner.clone();
    let package = || vec![Package::new("lazygit")];
    match profile.package_manager {
        PackageManager::Apt => Step::new(
            NAME,
            DESCRIPTION,
            InstallPackages::new(profile.clone(), runner, package())
                .prepare_with(add_apt_repository(profile, "ppa:lazygit-team/release")),
        ),
        PackageManager::Pacman => Step::new(
            NAME,
            DESCRIPTION,
            InstallPackages::new(profile.clone(), runner, package()),
        ),
        _ => {
            let script = LAZYGIT_RELEASE.replace("{sudo}", &profile.privilege_prefix_shell());
            Step::new(
                NAME,
                DESCRIPTION,
                CommandSequence::new(runner)
                    .required(CommandSpec::bash(script).current_dir(std::env::temp_dir())),
            )
        }
    }
}

pub(super) fn steps(catalog: &DefaultCatalog, profile: Arc<PlatformProfile>) -> Vec<Step> {
    let runner = &catalog.runner;
    let root = catalog.source.root();
    let script = |name| {
        RunScript::new(runner.clone(), root, name)
            .with_interpreter("bash")
            .make_executable()
    };

    vec![
        Step::new(
            "Update Package Manager",
            "Updating package lists",
            UpdatePackageIndex::new(profile.clone(), runner.clone()),
        ),
        neovim(catalog, &profile),
        Step::new(
            "Install Development Tools",
            "Installing git, ripgrep, fd, fzf, and other tools",
            InstallPackages::new(
                profile.clone(),
                runner.clone(),
                dev_packages(profile.package_manager, &catalog.extra_tools),
            ),
        ),
        Step::new(
            "Install Zsh",
            "Installing Zsh shell",
            InstallPackages::new(profile.clone(), runner.clone(), vec![Package::new("zsh")]),
        ),
        Step::new(
            "Setup Oh My Zsh",
            "Installing Oh My Zsh and plugins",
            script(ZSH_SCRIPT),
        ),
        Step::new("Install NVM", "Installing Node Version Manager", script(NVM_SCRIPT)),
        lazygit(catalog, &profile),
        Step::new(
            "Install Nerd Font",
            "Installing Hack Nerd Font",
            CommandSequence::new(runner.clone()).required(CommandSpec::bash(HACK_NERD_FONT)),
        ),
        Step::new(
            "Link Configuration Files",
            "Creating symbolic links for dotfiles",
            RunScript::new(runner.clone(), root, LINKER).make_executable(),
        ),
    ]
}
