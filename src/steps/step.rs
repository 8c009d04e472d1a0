//! The step model.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// What an action hands back to the runner.
pub type ActionResult = Result<StepOutcome>;

/// The operation behind a step.
///
/// An action runs to completion on a worker thread and reports exactly one
/// result. It must not touch front-end state; everything it wants the user
/// to see travels in the returned [`StepOutcome`] or error.
pub trait Action: Send + Sync {
    /// Perform the work.
    fn run(&self) -> ActionResult;
}

impl<F> Action for F
where
    F: Fn() -> ActionResult + Send + Sync,
{
    fn run(&self) -> ActionResult {
        self()
    }
}

/// Success payload of an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Non-fatal problems the step tolerated.
    pub warnings: Vec<String>,
}

impl StepOutcome {
    /// An outcome without warnings.
    pub fn clean() -> Self {
        Self::default()
    }

    /// An outcome carrying one warning.
    pub fn with_warning(message: impl Into<String>) -> Self {
        Self {
            warnings: vec![message.into()],
        }
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A named, described unit of work.
///
/// Steps are immutable; cloning one shares the underlying action.
#[derive(Clone)]
pub struct Step {
    name: String,
    description: String,
    action: Arc<dyn Action>,
}

impl Step {
    /// Create a step from any action.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        action: impl Action + 'static,
    ) -> Self {
        Self::shared(name, description, Arc::new(action))
    }

    /// Create a step from a closure.
    pub fn from_fn<F>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        Self::new(name, description, f)
    }

    /// Create a step from an already shared action.
    pub fn shared(
        name: impl Into<String>,
        description: impl Into<String>,
        action: Arc<dyn Action>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            action,
        }
    }

    /// Step name, shown in the progress list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Handle to the action, for running it off the loop thread.
    pub fn action(&self) -> Arc<dyn Action> {
        Arc::clone(&self.action)
    }

    /// Run the action on the current thread.
    pub fn run(&self) -> ActionResult {
        self.action.run()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotstrapError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn closures_are_actions() {
        let step = Step::from_fn("noop", "does nothing", || Ok(StepOutcome::clean()));
        assert_eq!(step.run().unwrap(), StepOutcome::clean());
    }

    #[test]
    fn failures_propagate() {
        let step = Step::from_fn("boom", "fails", || Err(DotstrapError::action("nope")));
        assert_eq!(step.run().unwrap_err().to_string(), "nope");
    }

    #[test]
    fn clones_share_the_action() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let step = Step::from_fn("count", "counts", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(StepOutcome::clean())
        });
        let copy = step.clone();
        step.run().unwrap();
        copy.action().run().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn outcome_warnings() {
        assert!(!StepOutcome::clean().has_warnings());
        let outcome = StepOutcome::with_warning("font not installed");
        assert!(outcome.has_warnings());
        assert_eq!(outcome.warnings, vec!["font not installed"]);
    }

    #[test]
    fn debug_shows_name() {
        let step = Step::from_fn("Install Zsh", "Installing Zsh shell", || {
            Ok(StepOutcome::clean())
        });
        assert!(format!("{:?}", step).contains("Install Zsh"));
    }
}
