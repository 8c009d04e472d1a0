//! Platform resolution.
//!
//! Turns the operating system picked by the user into an immutable
//! [`PlatformProfile`]: where configuration lives, which shell to target,
//! and which package manager to drive.
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
//! assert!(profile.editor_config_path.ends_with(".config/nvim"));
//! ```

pub mod os;
pub mod package_manager;
pub mod profile;
pub mod resolver;

pub use os::OsKind;
pub use package_manager::PackageManager;
pub use profile::{PlatformProfile, SUDO_NON_INTERACTIVE};
pub use resolver::{detect_package_manager, resolve};
