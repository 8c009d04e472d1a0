//! Actions that write to the user's configuration directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::DotstrapError;
use crate::shell::{CommandRunner, CommandSpec};
use crate::steps::{Action, ActionResult, StepOutcome};

/// Profile written by [`WriteShellProfile`].
pub const POWERSHELL_PROFILE: &str = include_str!("powershell_profile.ps1");

/// Link the editor configuration from the dotfiles tree into place.
///
/// Uses a directory junction, which unlike a symlink needs neither admin
/// rights nor developer mode. An existing link at the target is replaced;
/// an existing real directory is moved aside to `<target>.bak`.
pub struct LinkEditorConfig {
    runner: Arc<dyn CommandRunner>,
    source: PathBuf,
    target: PathBuf,
}

impl LinkEditorConfig {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            source: source.into(),
            target: target.into(),
        }
    }

    /// The junction command.
    pub fn link_command(&self) -> CommandSpec {
        CommandSpec::new("cmd").args([
            "/c".to_string(),
            "mklink".to_string(),
            "/J".to_string(),
            self.target.to_string_lossy().into_owned(),
            self.source.to_string_lossy().into_owned(),
        ])
    }

    /// Where an existing configuration is moved.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.target.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Clear the target. Returns a note when something was backed up.
    fn clear_target(&self) -> io::Result<Option<String>> {
        let meta = match fs::symlink_metadata(&self.target) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        if meta.file_type().is_symlink() {
            tracing::debug!("Removing existing link {}", self.target.display());
            fs::remove_file(&self.target).or_else(|_| fs::remove_dir(&self.target))?;
            return Ok(None);
        }

        let backup = self.backup_path();
        remove_any(&backup)?;
        fs::rename(&self.target, &backup)?;
        Ok(Some(format!(
            "Existing config moved to {}",
            backup.display()
        )))
    }
}

fn remove_any(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

impl Action for LinkEditorConfig {
    fn run(&self) -> ActionResult {
        if !self.source.is_dir() {
            return Err(DotstrapError::action(format!(
                "Neovim config not found at {}",
                self.source.display()
            )));
        }

        if let Some(parent) = self.target.parent() {
            fs::create_dir_all(parent)?;
        }

        let note = self.clear_target()?;
        self.runner.run(&self.link_command())?;

        Ok(match note {
            Some(note) => StepOutcome::with_warning(note),
            None => StepOutcome::clean(),
        })
    }
}

/// Write the fixed PowerShell profile.
pub struct WriteShellProfile {
    path: PathBuf,
}

impl WriteShellProfile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Action for WriteShellProfile {
    fn run(&self) -> ActionResult {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, POWERSHELL_PROFILE)?;
        tracing::info!("Wrote {}", self.path.display());
        Ok(StepOutcome::clean())
    }
}
