//! The single-threaded event loop.

use std::sync::mpsc::Receiver;

use anyhow::anyhow;

use crate::error::Result;
use crate::runner::StepRunner;

use super::{App, Control, Event, ExitStatus};

/// Draws the current state of the app.
pub trait Renderer {
    fn render(&mut self, app: &App) -> Result<()>;
}

/// Drive `app` until it exits.
///
/// Events are handled strictly one at a time and the app is redrawn after
/// each. Only this loop mutates the app; workers and input threads talk to
/// it through `events`.
pub fn run_loop<R>(
    app: &mut App,
    events: &Receiver<Event>,
    runner: &StepRunner,
    renderer: &mut R,
) -> Result<ExitStatus>
where
    R: Renderer + ?Sized,
{
    renderer.render(app)?;

    loop {
        let event = events
            .recv()
            .map_err(|_| anyhow!("all event sources disconnected"))?;

        let control = app.update(event);
        if let Control::Start(index) = control {
            if let Some(step) = app.state().and_then(|s| s.step(index)) {
                tracing::debug!("Dispatching step {}", index);
                runner.dispatch(index, step);
            }
        }

        renderer.render(app)?;

        if let Control::Exit(status) = control {
            tracing::info!("Exiting with {:?}", status);
            return Ok(status);
        }
    }
}
