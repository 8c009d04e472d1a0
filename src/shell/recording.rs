//! A scripted command runner for tests.

use std::sync::Mutex;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandOutput, CommandSpec};
use super::runner::CommandRunner;

/// Records every command instead of running it.
///
/// Commands succeed unless their rendered command line contains one of the
/// substrings registered with [`RecordingRunner::fail_on`], in which case
/// they exit with code 1.
///
/// # Example
///
/// ```
/// use dotstrap::shell::{CommandRunner, CommandSpec, RecordingRunner};
///
/// let runner = RecordingRunner::new().fail_on("lazygit");
/// assert!(runner.run(&CommandSpec::new("scoop").args(["install", "fzf"])).is_ok());
/// assert!(runner.run(&CommandSpec::new("scoop").args(["install", "lazygit"])).is_err());
/// assert_eq!(runner.command_lines().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRunner {
    failing: Vec<String>,
    recorded: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands whose command line contains `needle` fail.
    pub fn fail_on(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    /// Every command executed so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.recorded
            .lock()
            .map(|cmds| cmds.clone())
            .unwrap_or_default()
    }

    /// Rendered command lines, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&self, command: &CommandSpec) -> Result<CommandOutput> {
        if let Ok(mut cmds) = self.recorded.lock() {
            cmds.push(command.clone());
        }

        let line = command.to_string();
        if self.failing.iter().any(|needle| line.contains(needle)) {
            Ok(CommandOutput::failed(
                Some(1),
                format!("{}: simulated failure", command.program),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandOutput::ok(Duration::ZERO))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotstrapError;

    #[test]
    fn records_in_order() {
        let runner = RecordingRunner::new();
        runner.run(&CommandSpec::new("a")).unwrap();
        runner.run(&CommandSpec::new("b").arg("c")).unwrap();
        assert_eq!(runner.command_lines(), vec!["a", "b c"]);
    }

    #[test]
    fn failing_commands_report_code_one() {
        let runner = RecordingRunner::new().fail_on("apt update");
        let err = runner
            .run(&CommandSpec::new("sudo").args(["-n", "apt", "update"]))
            .unwrap_err();
        assert!(matches!(
            err,
            DotstrapError::CommandFailed { code: Some(1), .. }
        ));
        assert!(err.to_string().ends_with("(sudo: simulated failure)"));
    }
}
