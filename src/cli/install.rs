//! The interactive install session.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::mpsc;
use std::sync::Arc;

use console::Term;

use crate::app::{run_loop, App, ExitStatus};
use crate::config::{load_settings, ConfigPaths, Settings};
use crate::environment::{Environment, SystemEnvironment};
use crate::error::{DotstrapError, Result};
use crate::platform::OsKind;
use crate::runner::StepRunner;
use crate::shell::{CommandRunner, SystemRunner};
use crate::steps::DefaultCatalog;
use crate::ui::{spawn_input, spawn_ticker, DotstrapTheme, RawModeGuard, TermRenderer};

use super::Cli;

/// How an interactive session ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub status: ExitStatus,
}

impl SessionOutcome {
    /// Exit code to use (0 for success or quit, 1 for a failed run).
    pub fn exit_code(&self) -> u8 {
        self.status.code()
    }
}

/// Resolve the effective settings for a session started in `working_dir`.
pub fn settings_for(cli: &Cli, working_dir: &Path) -> Result<Settings> {
    let paths = ConfigPaths::discover_default(working_dir);
    load_settings(&paths, working_dir, cli.dotfiles.as_deref())
}

/// Whether `sudo` credentials should be cached before the terminal goes raw.
///
/// Privileged Linux steps run `sudo -n`, which fails rather than prompts, so
/// the password has to be asked for up front while the terminal still
/// behaves normally.
pub fn needs_sudo_warmup(host: Option<OsKind>, env: &dyn Environment) -> bool {
    host == Some(OsKind::Linux) && !env.is_elevated() && env.find_executable("sudo").is_some()
}

/// Run `sudo -v` on the normal terminal. A refusal is logged, not fatal:
/// the privileged steps then fail with sudo's own message.
fn warm_sudo_credentials() {
    eprintln!(
        "{}",
        console::style("Package installs need sudo; you may be asked for your password.")
            .dim()
            .for_stderr()
    );
    match Command::new("sudo").arg("-v").status() {
        Ok(status) if status.success() => tracing::info!("sudo credentials cached"),
        Ok(status) => tracing::warn!("sudo -v exited with {:?}", status.code()),
        Err(err) => tracing::warn!("Could not run sudo -v: {}", err),
    }
}

/// Run the interactive installer on the real terminal.
pub fn run_install(cli: &Cli, working_dir: PathBuf, colors: bool) -> Result<SessionOutcome> {
    if !Term::stdout().is_term() {
        return Err(DotstrapError::NotATerminal);
    }

    let settings = settings_for(cli, &working_dir)?;
    tracing::info!("Dotfiles source: {}", settings.dotfiles_root.display());

    let env: Arc<dyn Environment> = Arc::new(SystemEnvironment::new());
    if needs_sudo_warmup(OsKind::host(), env.as_ref()) {
        warm_sudo_credentials();
    }
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let mut app = App::new(env, DefaultCatalog::new(&settings, runner));

    let theme = if colors {
        DotstrapTheme::new()
    } else {
        DotstrapTheme::plain()
    };
    // Reserves the viewport, which reads the cursor position; this has to
    // happen before the input thread starts consuming terminal events.
    let mut renderer = TermRenderer::new(theme)?;

    let (tx, rx) = mpsc::channel();
    let guard = RawModeGuard::enable()?;
    spawn_input(tx.clone())?;
    spawn_ticker(tx.clone(), settings.tick_interval)?;
    let steps = StepRunner::new(tx);

    let status = run_loop(&mut app, &rx, &steps, &mut renderer);
    let finished = renderer.finish();
    drop(guard);

    let status = status?;
    finished?;
    Ok(SessionOutcome { status })
}
