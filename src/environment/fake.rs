//! In-memory environment for tests.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Environment;

/// A scripted [`Environment`].
///
/// Executables "exist" when registered with [`FakeEnvironment::with_executable`];
/// they resolve to `/fake/bin/<name>`. Every lookup is counted so tests can
/// assert that no probing happened.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    home: Option<PathBuf>,
    executables: BTreeSet<String>,
    elevated: bool,
    lookups: AtomicUsize,
}

impl FakeEnvironment {
    /// Create a fake environment with the given home directory and an empty PATH.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            ..Default::default()
        }
    }

    /// Create a fake environment without a home directory.
    pub fn homeless() -> Self {
        Self::default()
    }

    /// Register an executable as present on PATH.
    pub fn with_executable(mut self, name: &str) -> Self {
        self.executables.insert(name.to_string());
        self
    }

    /// Mark the environment as running elevated.
    pub fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }

    /// Number of `find_executable` calls made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Environment for FakeEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.executables
            .contains(name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_executables_resolve() {
        let env = FakeEnvironment::new("/home/dev").with_executable("yum");
        assert_eq!(
            env.find_executable("yum"),
            Some(PathBuf::from("/fake/bin/yum"))
        );
        assert_eq!(env.find_executable("apt"), None);
        assert_eq!(env.lookups(), 2);
    }

    #[test]
    fn homeless_has_no_home() {
        assert!(FakeEnvironment::homeless().home_dir().is_none());
    }

    #[test]
    fn elevated_flag() {
        assert!(FakeEnvironment::new("/root").elevated().is_elevated());
        assert!(!FakeEnvironment::new("/home/dev").is_elevated());
    }
}
