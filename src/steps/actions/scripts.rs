//! Setup scripts shipped with the dotfiles tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::DotstrapError;
use crate::shell::{CommandRunner, CommandSpec};
use crate::steps::{Action, ActionResult, BestEffort};

/// Run a script from the dotfiles tree, from the tree's root.
pub struct RunScript {
    runner: Arc<dyn CommandRunner>,
    root: PathBuf,
    script: String,
    interpreter: Option<&'static str>,
    make_executable: bool,
}

impl RunScript {
    /// Execute `root/script` directly.
    pub fn new(runner: Arc<dyn CommandRunner>, root: impl Into<PathBuf>, script: &str) -> Self {
        Self {
            runner,
            root: root.into(),
            script: script.to_string(),
            interpreter: None,
            make_executable: false,
        }
    }

    /// Hand the script to `interpreter` instead of executing it.
    pub fn with_interpreter(mut self, interpreter: &'static str) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    /// `chmod +x` the script first; failures only warn.
    pub fn make_executable(mut self) -> Self {
        self.make_executable = true;
        self
    }

    /// Full path of the script.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.script)
    }

    fn command(&self, path: &Path) -> CommandSpec {
        let path = path.to_string_lossy();
        let cmd = match self.interpreter {
            Some(interpreter) => CommandSpec::new(interpreter).arg(path),
            None => CommandSpec::new(path),
        };
        cmd.current_dir(&self.root)
    }
}

impl Action for RunScript {
    fn run(&self) -> ActionResult {
        let path = self.path();
        if !path.is_file() {
            return Err(DotstrapError::action(format!(
                "Script not found: {}",
                path.display()
            )));
        }

        let mut effort = BestEffort::new();
        if self.make_executable {
            let chmod = CommandSpec::new("chmod")
                .arg("+x")
                .arg(path.to_string_lossy());
            effort.attempt(format!("chmod +x {}", self.script), || {
                self.runner.run(&chmod)
            });
        }

        tracing::info!("Running {}", path.display());
        self.runner.run(&self.command(&path))?;
        Ok(effort.into_outcome())
    }
}
