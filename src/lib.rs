//! dotstrap - Interactive dotfiles and development environment installer.
//!
//! dotstrap asks which operating system it is provisioning, works out the
//! package manager and configuration paths for it, and then runs a fixed
//! sequence of setup steps one at a time while drawing live progress.
//!
//! # Modules
//!
//! - [`app`] - The event loop and front-end state machine
//! - [`cli`] - Command-line interface and the install session
//! - [`config`] - Optional YAML configuration
//! - [`environment`] - Home directory, PATH lookup, elevation
//! - [`error`] - Error types and result aliases
//! - [`platform`] - OS kinds, package managers and profile resolution
//! - [`runner`] - Run state machine and worker dispatch
//! - [`shell`] - External command execution
//! - [`steps`] - Steps, actions and the per-OS catalogs
//! - [`ui`] - Terminal rendering
//!
//! # Example
//!
//! ```
//! use dotstrap::environment::FakeEnvironment;
//! use dotstrap::platform::{resolve, OsKind, PackageManager};
//!
//! let env = FakeEnvironment::new("/home/dev").with_executable("pacman");
//! let profile = resolve(OsKind::Linux, &env).unwrap();
//! assert_eq!(profile.package_manager, PackageManager::Pacman);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod platform;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{DotstrapError, Result};
