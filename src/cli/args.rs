//! CLI argument definitions.
//!
//! The installer has no subcommands; these are the ambient flags around the
//! interactive session. The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// dotstrap - Interactive dotfiles and development environment installer.
#[derive(Debug, Parser)]
#[command(name = "dotstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the dotfiles source tree (defaults to config, then the current directory)
    #[arg(long, value_name = "PATH", env = "DOTSTRAP_DOTFILES")]
    pub dotfiles: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
