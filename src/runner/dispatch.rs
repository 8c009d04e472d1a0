//! Worker dispatch.

use std::sync::mpsc::Sender;
use std::thread;

use crate::app::Event;
use crate::error::DotstrapError;
use crate::steps::Step;

/// Runs steps on worker threads, one thread per step.
///
/// Every dispatched step produces exactly one [`Event::StepFinished`],
/// including when the worker could not be spawned.
#[derive(Debug, Clone)]
pub struct StepRunner {
    events: Sender<Event>,
}

impl StepRunner {
    pub fn new(events: Sender<Event>) -> Self {
        Self { events }
    }

    /// Start `step` as step number `index`.
    pub fn dispatch(&self, index: usize, step: &Step) {
        let action = step.action();
        let name = step.name().to_string();
        let events = self.events.clone();

        let spawned = thread::Builder::new()
            .name(format!("step-{}", index))
            .spawn(move || {
                tracing::debug!("Worker running {}", name);
                let result = action.run();
                if events.send(Event::StepFinished { index, result }).is_err() {
                    tracing::debug!("Event loop gone before {} finished", name);
                }
            });

        if let Err(err) = spawned {
            let result = Err(DotstrapError::action(format!(
                "Could not start worker: {}",
                err
            )));
            let _ = self.events.send(Event::StepFinished { index, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepOutcome;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn posts_one_completion() {
        let (tx, rx) = mpsc::channel();
        let runner = StepRunner::new(tx);
        let step = Step::from_fn("ok", "", || Ok(StepOutcome::with_warning("meh")));
        runner.dispatch(4, &step);

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::StepFinished { index, result } => {
                assert_eq!(index, 4);
                assert_eq!(result.unwrap().warnings, vec!["meh"]);
            }
            other => panic!("unexpected event {:?}", other),
        }
        drop(runner);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn failures_are_posted_too() {
        let (tx, rx) = mpsc::channel();
        StepRunner::new(tx).dispatch(
            0,
            &Step::from_fn("bad", "", || Err(DotstrapError::action("nope"))),
        );
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::StepFinished { result, .. } => {
                assert_eq!(result.unwrap_err().to_string(), "nope")
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
