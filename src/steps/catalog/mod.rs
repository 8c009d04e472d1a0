//! Step catalogs.
//!
//! A catalog turns a resolved [`PlatformProfile`] into the ordered list of
//! steps for that platform. Building a catalog never runs anything; every
//! side effect lives inside the returned steps' actions.

mod linux;
mod macos;
mod windows;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Settings;
use crate::platform::{OsKind, PlatformProfile};
use crate::shell::CommandRunner;

use super::Step;

/// Builds the step list for a platform.
///
/// Closures work as catalogs, which keeps test doubles short:
///
/// ```
/// use dotstrap::platform::PlatformProfile;
/// use dotstrap::steps::{Catalog, Step, StepOutcome};
///
/// let catalog = |_: &PlatformProfile| {
///     vec![Step::from_fn("Only step", "Does nothing", || Ok(StepOutcome::clean()))]
/// };
/// # fn takes(_: &dyn Catalog) {}
/// takes(&catalog);
/// ```
pub trait Catalog {
    /// The ordered steps for `profile`.
    fn steps(&self, profile: &PlatformProfile) -> Vec<Step>;
}

impl<F> Catalog for F
where
    F: Fn(&PlatformProfile) -> Vec<Step>,
{
    fn steps(&self, profile: &PlatformProfile) -> Vec<Step> {
        self(profile)
    }
}

/// Layout of the dotfiles source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotfilesSource {
    root: PathBuf,
}

impl DotfilesSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root of the tree; scripts run from here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The Neovim configuration directory.
    pub fn editor_config(&self) -> PathBuf {
        self.root.join("nvim").join(".config").join("nvim")
    }

    /// A setup script at the top of the tree.
    pub fn script(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// The dotfile linker.
    pub fn linker(&self) -> PathBuf {
        self.script(LINKER)
    }
}

pub(crate) const LINKER: &str = "install";
pub(crate) const LAZYVIM_SCRIPT: &str = "setup-lazyvim.sh";
pub(crate) const ZSH_SCRIPT: &str = "setup-zsh.sh";
pub(crate) const NVM_SCRIPT: &str = "setup-nvm.sh";

/// The built-in catalogs for Windows, macOS and Linux.
pub struct DefaultCatalog {
    source: DotfilesSource,
    extra_tools: Vec<String>,
    runner: Arc<dyn CommandRunner>,
}

impl DefaultCatalog {
    pub fn new(settings: &Settings, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            source: DotfilesSource::new(settings.dotfiles_root.clone()),
            extra_tools: settings.extra_tools.clone(),
            runner,
        }
    }
}

impl Catalog for DefaultCatalog {
    fn steps(&self, profile: &PlatformProfile) -> Vec<Step> {
        let profile = Arc::new(profile.clone());
        let steps = match profile.os {
            OsKind::Windows => windows::steps(self, profile),
            OsKind::MacOs => macos::steps(self, profile),
            OsKind::Linux => linux::steps(self, profile),
        };
        tracing::debug!("Built catalog with {} steps", steps.len());
        steps
    }
}
