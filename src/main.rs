//! dotstrap CLI entry point.

use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use dotstrap::cli::{run_install, Cli};
use dotstrap::ui::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// The interactive view owns the terminal, so logs go to
/// `<cache dir>/dotstrap/install.log`. Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dotstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotstrap=info"))
    };

    let Some(file) = open_log_file() else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
}

fn open_log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("dotstrap");
    fs::create_dir_all(&dir).ok()?;
    File::create(dir.join("install.log")).ok()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dotstrap starting with args: {:?}", cli);

    let colors = !cli.no_color && should_use_colors();
    if !colors {
        console::set_colors_enabled(false);
    }

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    match run_install(&cli, working_dir, colors) {
        Ok(result) => ExitCode::from(result.exit_code()),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!(
                "{}",
                console::style(format!("✗ Error: {}", e))
                    .red()
                    .bold()
                    .for_stderr()
            );
            ExitCode::from(1)
        }
    }
}
