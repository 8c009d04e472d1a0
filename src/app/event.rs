//! Loop messages.

use crate::steps::ActionResult;

/// A key press, already reduced to what the front-end distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    /// `q` or `ctrl+c`.
    Quit,
    /// `esc`; quits from the picker only.
    Escape,
    Other,
}

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum Event {
    Key(Key),
    /// Spinner animation tick.
    Tick,
    /// The worker for step `index` returned.
    StepFinished { index: usize, result: ActionResult },
}
