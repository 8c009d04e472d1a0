//! Installer configuration.
//!
//! Configuration is optional: with no files present the installer links
//! from the current directory, installs only the built-in tool set and
//! animates at the default tick rate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and merging in [`loader`]
//!
//! # Example
//!
//! ```
//! use dotstrap::config::{load_settings, ConfigPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".dotstrap.yml"), "extra_tools: [bat]").unwrap();
//!
//! let paths = ConfigPaths::discover(None, temp.path());
//! let settings = load_settings(&paths, temp.path(), None).unwrap();
//! assert_eq!(settings.extra_tools, vec!["bat".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! Files are merged in this order (later overrides earlier):
//! 1. User global config (`<config dir>/dotstrap/config.yml`)
//! 2. Working directory config (`.dotstrap.yml`)

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, load_settings, parse_config, ConfigPaths};
pub use schema::{InstallerConfig, Settings, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
