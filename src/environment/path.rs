//! Executable lookup on the command search path.
//!
//! Lookups walk the `PATH` entries directly instead of invoking `which`,
//! whose behavior varies across systems and is sometimes a shell builtin.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Split a raw `PATH` value into its directories.
pub fn split_search_path(path: Option<OsString>) -> Vec<PathBuf> {
    path.map(|p| std::env::split_paths(&p).collect())
        .unwrap_or_default()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    split_search_path(std::env::var_os("PATH"))
}

/// Candidate file names for an executable.
///
/// On Windows every `PATHEXT` extension is tried after the bare name.
pub fn executable_names(tool: &str, pathext: Option<&str>) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    if let Some(exts) = pathext {
        names.extend(
            exts.split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| format!("{}{}", tool, ext.to_lowercase())),
        );
    }
    names
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let pathext = if cfg!(windows) {
        Some(std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT;.PS1".to_string()))
    } else {
        None
    };
    let names = executable_names(tool, pathext.as_deref());

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
