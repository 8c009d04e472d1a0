//! Error types for dotstrap operations.
//!
//! This module defines [`DotstrapError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DotstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DotstrapError::Other`) for unexpected errors
//! - A failed step surfaces its error's display text verbatim, so messages
//!   should read well on their own

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dotstrap operations.
#[derive(Debug, Error)]
pub enum DotstrapError {
    /// OS label outside the supported set.
    #[error("Unsupported operating system: {label}")]
    UnknownPlatform { label: String },

    /// The home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// An external command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}{}", detail(.reason))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// What the command said on stderr, if anything.
        reason: Option<String>,
    },

    /// An external command could not be started at all.
    #[error("Failed to start `{command}`: {source}")]
    CommandNotStarted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A step action failed with a free-form message.
    #[error("{message}")]
    ActionFailed { message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The interactive front-end needs a terminal on stdout.
    #[error("dotstrap must be run in an interactive terminal")]
    NotATerminal,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotstrapError {
    /// Build an [`DotstrapError::ActionFailed`] from any message.
    pub fn action(message: impl Into<String>) -> Self {
        Self::ActionFailed {
            message: message.into(),
        }
    }
}

fn detail(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" ({})", r))
        .unwrap_or_default()
}

/// Result type alias for dotstrap operations.
pub type Result<T> = std::result::Result<T, DotstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_displays_label() {
        let err = DotstrapError::UnknownPlatform {
            label: "BeOS".into(),
        };
        assert!(err.to_string().contains("BeOS"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DotstrapError::CommandFailed {
            command: "sudo -n apt update".into(),
            code: Some(100),
            reason: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo -n apt update"));
        assert!(msg.contains("100"));
        assert!(!msg.contains('('));
    }

    #[test]
    fn command_failed_appends_reason() {
        let err = DotstrapError::CommandFailed {
            command: "sudo -n apt update".into(),
            code: Some(1),
            reason: Some("sudo: a password is required".into()),
        };
        assert_eq!(
            err.to_string(),
            "Command failed with exit code Some(1): sudo -n apt update (sudo: a password is required)"
        );
    }

    #[test]
    fn command_not_started_includes_source() {
        let err = DotstrapError::CommandNotStarted {
            command: "scoop install git".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("scoop install git"));
        assert!(msg.contains("program not found"));
    }

    #[test]
    fn action_failed_is_verbatim() {
        let err = DotstrapError::action("permission denied");
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DotstrapError::ConfigParseError {
            path: PathBuf::from("/home/me/.dotstrap.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".dotstrap.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DotstrapError = io_err.into();
        assert!(matches!(err, DotstrapError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: DotstrapError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
