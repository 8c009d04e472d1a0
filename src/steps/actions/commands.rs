//! Generic command-driven actions.

use std::sync::Arc;

use crate::shell::{CommandRunner, CommandSpec};
use crate::steps::{Action, ActionResult, BestEffort, StepOutcome};

/// Optional commands first, then required ones.
///
/// Optional commands only produce warnings when they fail; the first
/// failing required command fails the step.
pub struct CommandSequence {
    runner: Arc<dyn CommandRunner>,
    optional: Vec<CommandSpec>,
    required: Vec<CommandSpec>,
}

impl CommandSequence {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            optional: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Add a command whose failure is tolerated.
    pub fn optional(mut self, cmd: CommandSpec) -> Self {
        self.optional.push(cmd);
        self
    }

    /// Add a command that must succeed.
    pub fn required(mut self, cmd: CommandSpec) -> Self {
        self.required.push(cmd);
        self
    }
}

impl Action for CommandSequence {
    fn run(&self) -> ActionResult {
        let mut effort = BestEffort::new();
        for cmd in &self.optional {
            effort.attempt(cmd.to_string(), || self.runner.run(cmd));
        }
        for cmd in &self.required {
            self.runner.run(cmd)?;
        }
        Ok(effort.into_outcome())
    }
}

/// Something the user has to do by hand; always succeeds with a warning.
pub struct ManualInstruction {
    message: String,
}

impl ManualInstruction {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Action for ManualInstruction {
    fn run(&self) -> ActionResult {
        Ok(StepOutcome::with_warning(self.message.clone()))
    }
}
