//! Command descriptions and process execution.

use crate::error::{DotstrapError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How an external command exited.
///
/// Stdout is not kept; steps only care whether the command worked and, if
/// not, what it said on stderr.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,
    /// Standard error, lossily decoded.
    pub stderr: String,
    pub duration: Duration,
}

impl CommandOutput {
    /// A zero exit.
    pub fn ok(duration: Duration) -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
            duration,
        }
    }

    /// A non-zero exit (or death by signal).
    pub fn failed(code: Option<i32>, stderr: impl Into<String>, duration: Duration) -> Self {
        Self {
            code,
            stderr: stderr.into(),
            duration,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }

    /// Last non-blank line of stderr, which is where most tools put the
    /// actual complaint.
    pub fn reason(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
    }
}

/// A program invocation: executable, arguments, optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Start describing an invocation of `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run from the given directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Prepend a wrapper such as `sudo -n`, keeping the original program
    /// as the first argument after the wrapper's own.
    pub fn with_prefix(self, prefix: Option<&[&str]>) -> Self {
        let Some((wrapper, wrapper_args)) = prefix.and_then(|p| p.split_first()) else {
            return self;
        };
        let mut args = Vec::with_capacity(wrapper_args.len() + self.args.len() + 1);
        args.extend(wrapper_args.iter().map(|a| a.to_string()));
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: wrapper.to_string(),
            args,
            cwd: self.cwd,
        }
    }

    /// `bash -c <script>`.
    pub fn bash(script: impl Into<String>) -> Self {
        Self::new("bash").arg("-c").arg(script)
    }

    /// `powershell -Command <script>`.
    pub fn powershell(script: impl Into<String>) -> Self {
        Self::new("powershell").arg("-Command").arg(script)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) || arg.is_empty() {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Execute a command, capturing stderr.
///
/// Stdin is closed so nothing the child does can steal keystrokes from the
/// front-end; privileged commands run as `sudo -n` for the same reason.
pub fn execute(spec: &CommandSpec) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(cwd) = &spec.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());

    let output = cmd
        .output()
        .map_err(|source| DotstrapError::CommandNotStarted {
            command: spec.to_string(),
            source,
        })?;

    let duration = start.elapsed();
    if output.status.success() {
        Ok(CommandOutput::ok(duration))
    } else {
        Ok(CommandOutput::failed(
            output.status.code(),
            String::from_utf8_lossy(&output.stderr),
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("sudo").args(["apt", "install", "zsh", "-y"]);
        assert_eq!(spec.to_string(), "sudo apt install zsh -y");
    }

    #[test]
    fn display_quotes_args_with_spaces() {
        let spec = CommandSpec::bash("echo hi");
        assert_eq!(spec.to_string(), "bash -c \"echo hi\"");
    }

    #[test]
    fn with_prefix_wraps_program() {
        let spec = CommandSpec::new("pacman")
            .args(["-Sy"])
            .with_prefix(Some(&["sudo", "-n"]));
        assert_eq!(spec.program, "sudo");
        assert_eq!(spec.args, vec!["-n", "pacman", "-Sy"]);
        assert_eq!(spec.to_string(), "sudo -n pacman -Sy");
    }

    #[test]
    fn with_prefix_empty_slice_is_identity() {
        let spec = CommandSpec::new("apt").arg("update");
        assert_eq!(spec.clone().with_prefix(Some(&[])), spec);
    }

    #[test]
    fn reason_is_last_non_blank_stderr_line() {
        let output = CommandOutput::failed(
            Some(1),
            "Reading package lists...\nsudo: a password is required\n\n",
            Duration::ZERO,
        );
        assert!(!output.succeeded());
        assert_eq!(output.reason(), Some("sudo: a password is required"));
        assert_eq!(CommandOutput::ok(Duration::ZERO).reason(), None);
    }

    #[test]
    fn with_prefix_none_is_identity() {
        let spec = CommandSpec::new("brew").arg("install");
        assert_eq!(spec.clone().with_prefix(None), spec);
    }

    #[test]
    fn powershell_builder() {
        let spec = CommandSpec::powershell("Install-Module posh-git");
        assert_eq!(spec.program, "powershell");
        assert_eq!(spec.args[0], "-Command");
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute(&CommandSpec::new("echo").arg("hello")).unwrap();
        assert!(result.succeeded());
        assert_eq!(result.code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command() {
        let result =
            execute(&CommandSpec::new("sh").args(["-c", "echo broken >&2; exit 3"])).unwrap();
        assert!(!result.succeeded());
        assert_eq!(result.code, Some(3));
        assert_eq!(result.reason(), Some("broken"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let spec = CommandSpec::new("pwd").current_dir(temp.path());
        let result = execute(&spec).unwrap();
        assert!(result.succeeded());
    }

    #[test]
    fn execute_missing_program_is_not_started() {
        let err = execute(&CommandSpec::new("this-command-does-not-exist-12345")).unwrap_err();
        assert!(matches!(err, DotstrapError::CommandNotStarted { .. }));
    }
}
