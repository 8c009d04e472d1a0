//! Configuration schema.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DotstrapError, Result};

/// Spinner tick used when nothing is configured.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Fastest spinner tick accepted.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// One configuration file, as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Root of the dotfiles source tree (relative paths resolve against the
    /// working directory).
    pub dotfiles: Option<PathBuf>,

    /// Additional tools appended to the "Install Development Tools" step.
    pub extra_tools: Vec<String>,

    /// Spinner animation interval in milliseconds.
    pub tick_interval_ms: Option<u64>,
}

impl InstallerConfig {
    /// Overlay `other` on top of `self`.
    ///
    /// Scalars from `other` win when set; tool lists concatenate without
    /// duplicates.
    pub fn merge(mut self, other: InstallerConfig) -> Self {
        if other.dotfiles.is_some() {
            self.dotfiles = other.dotfiles;
        }
        if other.tick_interval_ms.is_some() {
            self.tick_interval_ms = other.tick_interval_ms;
        }
        for tool in other.extra_tools {
            if !self.extra_tools.contains(&tool) {
                self.extra_tools.push(tool);
            }
        }
        self
    }

    /// Check values that parse fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if let Some(ms) = self.tick_interval_ms {
            if ms < MIN_TICK_INTERVAL_MS {
                return Err(DotstrapError::ConfigValidationError {
                    message: format!(
                        "tick_interval_ms must be at least {} (got {})",
                        MIN_TICK_INTERVAL_MS, ms
                    ),
                });
            }
        }

        if let Some(tool) = self
            .extra_tools
            .iter()
            .find(|t| t.trim().is_empty() || t.contains(char::is_whitespace))
        {
            return Err(DotstrapError::ConfigValidationError {
                message: format!("invalid tool name in extra_tools: {:?}", tool),
            });
        }

        Ok(())
    }
}

/// Effective settings for one installer run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Absolute root of the dotfiles source tree.
    pub dotfiles_root: PathBuf,
    /// Tools appended to the built-in development tool set.
    pub extra_tools: Vec<String>,
    /// Spinner tick interval.
    pub tick_interval: Duration,
}

impl Settings {
    /// Defaults rooted at `dotfiles_root`.
    pub fn new(dotfiles_root: impl Into<PathBuf>) -> Self {
        Self {
            dotfiles_root: dotfiles_root.into(),
            extra_tools: Vec::new(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}
