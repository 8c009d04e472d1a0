//! Configuration file discovery and loading.

use crate::config::schema::{InstallerConfig, Settings};
use crate::error::{DotstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: `<config dir>/dotstrap/config.yml`
    pub user_global: Option<PathBuf>,

    /// Working directory config: `.dotstrap.yml`
    pub local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files.
    ///
    /// `config_dir` is the platform configuration directory (see
    /// [`dirs::config_dir`]); `working_dir` is where the installer was started.
    pub fn discover(config_dir: Option<&Path>, working_dir: &Path) -> Self {
        Self {
            user_global: config_dir
                .map(|dir| dir.join("dotstrap").join("config.yml"))
                .filter(|p| p.is_file()),
            local: Some(working_dir.join(".dotstrap.yml")).filter(|p| p.is_file()),
        }
    }

    /// Discover config files using the real user config directory.
    pub fn discover_default(working_dir: &Path) -> Self {
        Self::discover(dirs::config_dir().as_deref(), working_dir)
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.local.iter()).collect()
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<InstallerConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into an [`InstallerConfig`].
///
/// An empty file is a valid, empty configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<InstallerConfig> {
    if content.trim().is_empty() {
        return Ok(InstallerConfig::default());
    }

    let config: InstallerConfig =
        serde_yaml::from_str(content).map_err(|e| DotstrapError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

/// Merge every discovered file and resolve the effective [`Settings`].
///
/// `dotfiles_override` (from the command line) beats any configured root;
/// with neither, the working directory is the source tree.
pub fn load_settings(
    paths: &ConfigPaths,
    working_dir: &Path,
    dotfiles_override: Option<&Path>,
) -> Result<Settings> {
    let mut merged = InstallerConfig::default();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        merged = merged.merge(load_config_file(path)?);
    }

    let root = dotfiles_override
        .map(Path::to_path_buf)
        .or(merged.dotfiles)
        .map(|p| expand_home(&p))
        .unwrap_or_else(|| working_dir.to_path_buf());
    let dotfiles_root = if root.is_absolute() {
        root
    } else {
        working_dir.join(root)
    };

    let mut settings = Settings::new(dotfiles_root);
    settings.extra_tools = merged.extra_tools;
    if let Some(ms) = merged.tick_interval_ms {
        settings.tick_interval = Duration::from_millis(ms);
    }
    Ok(settings)
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
