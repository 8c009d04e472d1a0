//! Front-end state and transitions.

use std::sync::Arc;

use crate::environment::Environment;
use crate::platform::{self, OsKind, PlatformProfile};
use crate::runner::{RunPhase, RunState};
use crate::steps::Catalog;
use crate::ui::{Picker, Spinner};

use super::{Event, Key};

/// How the front-end ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The user quit.
    Quit,
    /// Every step succeeded.
    Succeeded,
    /// A step (or resolving the platform) failed.
    Failed,
}

impl ExitStatus {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            Self::Quit | Self::Succeeded => 0,
            Self::Failed => 1,
        }
    }
}

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Dispatch the step at this index.
    Start(usize),
    Exit(ExitStatus),
}

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    /// Choosing an operating system.
    Picker(Picker),
    /// Running (or finished running) the catalog for a platform.
    Install {
        os: OsKind,
        profile: Option<PlatformProfile>,
        state: RunState,
    },
}

/// Front-end model.
pub struct App {
    env: Arc<dyn Environment>,
    catalog: Box<dyn Catalog>,
    screen: Screen,
    spinner: Spinner,
    quit: bool,
}

impl App {
    pub fn new(env: Arc<dyn Environment>, catalog: impl Catalog + 'static) -> Self {
        Self {
            env,
            catalog: Box::new(catalog),
            screen: Screen::Picker(Picker::new()),
            spinner: Spinner::new(),
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Whether the user asked to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// The run, once an OS was selected.
    pub fn state(&self) -> Option<&RunState> {
        match &self.screen {
            Screen::Install { state, .. } => Some(state),
            Screen::Picker(_) => None,
        }
    }

    /// The resolved platform, once an OS was selected.
    pub fn profile(&self) -> Option<&PlatformProfile> {
        match &self.screen {
            Screen::Install { profile, .. } => profile.as_ref(),
            Screen::Picker(_) => None,
        }
    }

    /// Apply one event.
    pub fn update(&mut self, event: Event) -> Control {
        if let Event::Tick = event {
            self.spinner.tick();
            return Control::Continue;
        }

        match &mut self.screen {
            Screen::Picker(picker) => match event {
                Event::Key(Key::Up) => {
                    picker.select_previous();
                    Control::Continue
                }
                Event::Key(Key::Down) => {
                    picker.select_next();
                    Control::Continue
                }
                Event::Key(Key::Enter) => {
                    let os = picker.selected();
                    self.select(os)
                }
                Event::Key(Key::Quit | Key::Escape) => self.exit_quit(),
                Event::StepFinished { index, .. } => {
                    tracing::debug!("Ignoring completion of step {} before any run", index);
                    Control::Continue
                }
                Event::Key(Key::Other) | Event::Tick => Control::Continue,
            },
            Screen::Install { state, .. } => match event {
                Event::Key(Key::Quit) => self.exit_quit(),
                Event::StepFinished { index, result } => match state.complete(index, result) {
                    Some(next) => Control::Start(next),
                    None => finished(state),
                },
                Event::Key(_) | Event::Tick => Control::Continue,
            },
        }
    }

    fn select(&mut self, os: OsKind) -> Control {
        tracing::info!("Selected {}", os);
        let (profile, mut state) = match platform::resolve(os, self.env.as_ref()) {
            Ok(profile) => {
                let steps = self.catalog.steps(&profile);
                (Some(profile), RunState::new(steps))
            }
            Err(err) => {
                tracing::error!("Could not resolve {}: {}", os, err);
                (None, RunState::aborted(err.to_string()))
            }
        };

        let control = match state.start() {
            Some(first) => Control::Start(first),
            None => finished(&state),
        };
        self.screen = Screen::Install { os, profile, state };
        control
    }

    fn exit_quit(&mut self) -> Control {
        tracing::info!("Quit requested");
        self.quit = true;
        Control::Exit(ExitStatus::Quit)
    }
}

fn finished(state: &RunState) -> Control {
    match state.phase() {
        RunPhase::Succeeded => Control::Exit(ExitStatus::Succeeded),
        RunPhase::Failed(_) => Control::Exit(ExitStatus::Failed),
        RunPhase::Idle | RunPhase::Running(_) => Control::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FakeEnvironment;
    use crate::error::DotstrapError;
    use crate::steps::{Step, StepOutcome};

    fn two_steps(_: &PlatformProfile) -> Vec<Step> {
        vec![
            Step::from_fn("First", "", || Ok(StepOutcome::clean())),
            Step::from_fn("Second", "", || Ok(StepOutcome::clean())),
        ]
    }

    fn app() -> App {
        App::new(Arc::new(FakeEnvironment::new("/home/dev")), two_steps)
    }

    #[test]
    fn picker_moves_and_wraps() {
        let mut app = app();
        app.update(Event::Key(Key::Up));
        match app.screen() {
            Screen::Picker(p) => assert_eq!(p.selected(), OsKind::Linux),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn enter_resolves_and_starts_first_step() {
        let mut app = app();
        assert_eq!(app.update(Event::Key(Key::Enter)), Control::Start(0));
        assert_eq!(app.profile().unwrap().os, OsKind::Windows);
        assert_eq!(app.state().unwrap().in_flight(), Some(0));
    }

    #[test]
    fn completions_drive_the_run() {
        let mut app = app();
        app.update(Event::Key(Key::Enter));
        let done = |i| Event::StepFinished {
            index: i,
            result: Ok(StepOutcome::clean()),
        };
        assert_eq!(app.update(done(0)), Control::Start(1));
        assert_eq!(
            app.update(done(1)),
            Control::Exit(ExitStatus::Succeeded)
        );
    }

    #[test]
    fn failure_exits_with_failed() {
        let mut app = app();
        app.update(Event::Key(Key::Enter));
        let control = app.update(Event::StepFinished {
            index: 0,
            result: Err(DotstrapError::action("permission denied")),
        });
        assert_eq!(control, Control::Exit(ExitStatus::Failed));
        assert_eq!(app.state().unwrap().error(), Some("permission denied"));
    }

    #[test]
    fn ticks_only_animate() {
        let mut app = app();
        app.update(Event::Key(Key::Enter));
        let before = app.spinner().frame();
        assert_eq!(app.update(Event::Tick), Control::Continue);
        assert_ne!(app.spinner().frame(), before);
        assert_eq!(app.state().unwrap().current_step(), 0);
    }

    #[test]
    fn escape_quits_picker_but_not_run() {
        let mut picker = app();
        assert_eq!(
            picker.update(Event::Key(Key::Escape)),
            Control::Exit(ExitStatus::Quit)
        );
        assert!(picker.has_quit());

        let mut running = app();
        running.update(Event::Key(Key::Enter));
        assert_eq!(running.update(Event::Key(Key::Escape)), Control::Continue);
        assert_eq!(running.update(Event::Key(Key::Enter)), Control::Continue);
        assert_eq!(
            running.update(Event::Key(Key::Quit)),
            Control::Exit(ExitStatus::Quit)
        );
    }

    #[test]
    fn missing_home_fails_the_run() {
        let mut app = App::new(Arc::new(FakeEnvironment::homeless()), two_steps);
        assert_eq!(
            app.update(Event::Key(Key::Enter)),
            Control::Exit(ExitStatus::Failed)
        );
        assert!(app.profile().is_none());
        assert!(app.state().unwrap().error().is_some());
    }

    #[test]
    fn empty_catalog_succeeds() {
        let mut app = App::new(
            Arc::new(FakeEnvironment::new("/home/dev")),
            |_: &PlatformProfile| Vec::<Step>::new(),
        );
        assert_eq!(
            app.update(Event::Key(Key::Enter)),
            Control::Exit(ExitStatus::Succeeded)
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ExitStatus::Quit.code(), 0);
        assert_eq!(ExitStatus::Succeeded.code(), 0);
        assert_eq!(ExitStatus::Failed.code(), 1);
    }
}
