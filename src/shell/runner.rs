//! The command execution seam used by step actions.

use crate::error::{DotstrapError, Result};

use super::command::{execute, CommandOutput, CommandSpec};

/// Executes external commands on behalf of step actions.
pub trait CommandRunner: Send + Sync {
    /// Execute the command and report how it went.
    fn execute(&self, command: &CommandSpec) -> Result<CommandOutput>;

    /// Execute the command, turning a non-zero exit into an error.
    fn run(&self, command: &CommandSpec) -> Result<()> {
        let output = self.execute(command)?;
        if output.succeeded() {
            return Ok(());
        }

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            tracing::debug!("stderr of `{}`:\n{}", command, stderr);
        }

        Err(DotstrapError::CommandFailed {
            command: command.to_string(),
            code: output.code,
            reason: output.reason().map(str::to_string),
        })
    }
}

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &CommandSpec) -> Result<CommandOutput> {
        tracing::debug!("Running `{}`", command);
        let output = execute(command)?;
        tracing::debug!(
            "`{}` finished with {:?} in {:?}",
            command,
            output.code,
            output.duration
        );
        Ok(output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn run_maps_exit_code_to_error() {
        let err = SystemRunner
            .run(&CommandSpec::new("sh").args(["-c", "echo nope >&2; exit 2"]))
            .unwrap_err();
        match err {
            DotstrapError::CommandFailed {
                command,
                code,
                reason,
            } => {
                assert_eq!(code, Some(2));
                assert!(command.starts_with("sh -c"));
                assert_eq!(reason.as_deref(), Some("nope"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_succeeds_on_zero_exit() {
        assert!(SystemRunner.run(&CommandSpec::new("true")).is_ok());
    }
}
