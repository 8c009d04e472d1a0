//! Run state machine.

use std::time::{Duration, Instant};

use crate::steps::{ActionResult, Step};

/// Where a run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPhase {
    /// Nothing started yet.
    Idle,
    /// The step at this index is executing.
    Running(usize),
    /// Every step succeeded.
    Succeeded,
    /// A step failed with this message; nothing else will run.
    Failed(String),
}

impl RunPhase {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

/// Progress of one run through a step list.
///
/// At most one step is in flight, `current_step` only ever moves forward by
/// one per success, and once `done` is set nothing changes any more.
#[derive(Debug)]
pub struct RunState {
    steps: Vec<Step>,
    current_step: usize,
    done: bool,
    error: Option<String>,
    progress: Option<String>,
    in_flight: Option<usize>,
    started_at: Option<Instant>,
    elapsed: Option<Duration>,
}

impl RunState {
    /// A fresh run over `steps`.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            current_step: 0,
            done: false,
            error: None,
            progress: None,
            in_flight: None,
            started_at: None,
            elapsed: None,
        }
    }

    /// A run that failed before any step could be built.
    pub fn aborted(error: impl Into<String>) -> Self {
        let mut state = Self::new(Vec::new());
        state.fail(error.into());
        state
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step at `index`, if any.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the next step to complete (equals the number completed).
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The failure message, once the run failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Warnings from the most recent step, if it had any.
    pub fn progress(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    /// The step currently executing.
    pub fn in_flight(&self) -> Option<usize> {
        self.in_flight
    }

    /// Wall time from [`start`](Self::start) to the end of the run.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn phase(&self) -> RunPhase {
        match (self.done, &self.error, self.in_flight) {
            (true, Some(error), _) => RunPhase::Failed(error.clone()),
            (true, None, _) => RunPhase::Succeeded,
            (false, _, Some(index)) => RunPhase::Running(index),
            (false, _, None) => RunPhase::Idle,
        }
    }

    /// Begin the run. Returns the index to dispatch first, or `None` when
    /// there is nothing to run (an empty list succeeds immediately).
    pub fn start(&mut self) -> Option<usize> {
        if self.done || self.in_flight.is_some() {
            tracing::debug!("Ignoring start of a run that already started");
            return None;
        }

        self.started_at = Some(Instant::now());
        if self.steps.is_empty() {
            self.finish();
            return None;
        }

        self.begin(0);
        Some(0)
    }

    /// Record the result of step `index`. Returns the next index to
    /// dispatch, if the run continues.
    ///
    /// Results for a step that is not in flight are ignored.
    pub fn complete(&mut self, index: usize, result: ActionResult) -> Option<usize> {
        if self.done || self.in_flight != Some(index) {
            tracing::debug!(
                "Ignoring stale completion of step {} (in flight: {:?}, done: {})",
                index,
                self.in_flight,
                self.done
            );
            return None;
        }
        self.in_flight = None;

        let name = self.steps[index].name().to_string();
        match result {
            Ok(outcome) => {
                if outcome.has_warnings() {
                    for warning in &outcome.warnings {
                        tracing::warn!("{}: {}", name, warning);
                    }
                    self.progress = Some(outcome.warnings.join("; "));
                } else {
                    self.progress = None;
                }
                tracing::info!("Step {} finished: {}", index + 1, name);

                self.current_step += 1;
                if self.current_step == self.steps.len() {
                    self.finish();
                    None
                } else {
                    self.begin(self.current_step);
                    Some(self.current_step)
                }
            }
            Err(err) => {
                tracing::error!("Step {} failed: {}: {}", index + 1, name, err);
                self.fail(err.to_string());
                None
            }
        }
    }

    fn begin(&mut self, index: usize) {
        tracing::info!(
            "Starting step {}/{}: {}",
            index + 1,
            self.steps.len(),
            self.steps[index].name()
        );
        self.in_flight = Some(index);
    }

    fn finish(&mut self) {
        self.done = true;
        self.elapsed = self.started_at.map(|t| t.elapsed());
    }

    fn fail(&mut self, error: String) {
        self.error = Some(error);
        self.progress = None;
        self.finish();
    }
}
