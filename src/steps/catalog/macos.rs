//! macOS: Homebrew and Zsh, with the heavy lifting in the tree's scripts.

use std::sync::Arc;

use crate::platform::PlatformProfile;
use crate::steps::actions::{EnsureHomebrew, RunScript};
use crate::steps::Step;

use super::{DefaultCatalog, LAZYVIM_SCRIPT, LINKER, NVM_SCRIPT, ZSH_SCRIPT};

pub(super) fn steps(catalog: &DefaultCatalog, profile: Arc<PlatformProfile>) -> Vec<Step> {
    let runner = &catalog.runner;
    let root = catalog.source.root();
    let bash = |script| RunScript::new(runner.clone(), root, script).with_interpreter("bash");

    vec![
        Step::new(
            "Install Homebrew",
            "Ensuring Homebrew is installed",
            EnsureHomebrew::new(profile, runner.clone()),
        ),
        Step::new(
            "Install LazyVim Dependencies",
            "Installing Neovim and development tools",
            bash(LAZYVIM_SCRIPT),
        ),
        Step::new(
            "Setup Oh My Zsh",
            "Installing Oh My Zsh and plugins",
            bash(ZSH_SCRIPT),
        ),
        Step::new("Install NVM", "Installing Node Version Manager", bash(NVM_SCRIPT)),
        Step::new(
            "Link Configuration Files",
            "Creating symbolic links for dotfiles",
            RunScript::new(runner.clone(), root, LINKER),
        ),
    ]
}
