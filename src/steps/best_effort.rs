//! Best-effort sub-operations.
//!
//! Some steps try several things where only some of them matter, e.g.
//! installing a handful of optional tools. Each attempt is recorded here;
//! failures become warnings on the step's outcome instead of failing it.

use crate::error::Result;

use super::StepOutcome;

/// Record of one best-effort attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubResult {
    /// What was attempted.
    pub label: String,
    /// Failure message, if the attempt failed.
    pub error: Option<String>,
}

impl SubResult {
    /// Whether the attempt succeeded.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Collects best-effort attempts and notes for one step.
#[derive(Debug, Default)]
pub struct BestEffort {
    results: Vec<SubResult>,
    notes: Vec<String>,
}

impl BestEffort {
    /// Start an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op`, recording instead of propagating its failure.
    ///
    /// Returns whether the attempt succeeded.
    pub fn attempt<F>(&mut self, label: impl Into<String>, op: F) -> bool
    where
        F: FnOnce() -> Result<()>,
    {
        let label = label.into();
        let error = op().err().map(|e| e.to_string());
        if let Some(err) = &error {
            tracing::warn!("{} failed: {}", label, err);
        }
        let ok = error.is_none();
        self.results.push(SubResult { label, error });
        ok
    }

    /// Attach a warning that is not tied to a failed attempt.
    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.notes.push(message);
    }

    /// All attempts, in order.
    pub fn results(&self) -> &[SubResult] {
        &self.results
    }

    /// Attempts that failed.
    pub fn failures(&self) -> impl Iterator<Item = &SubResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }

    /// Fold everything into a successful outcome.
    pub fn into_outcome(self) -> StepOutcome {
        let mut warnings: Vec<String> = self
            .results
            .into_iter()
            .filter_map(|r| r.error.map(|e| format!("{}: {}", r.label, e)))
            .collect();
        warnings.extend(self.notes);
        StepOutcome { warnings }
    }
}
