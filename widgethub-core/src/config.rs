//! widgethub configuration (`widgethub.yaml`)
//!
//! Every section is optional. A missing file means defaults:
//! the built-in catalog, default search tuning and the standard
//! changelog settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::changelog::ChangelogSettings;
use crate::search::SearchOptions;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "widgethub.yaml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Catalog file to load instead of the built-in catalog.
    /// Relative paths are resolved against the config file's directory.
    pub catalog: Option<PathBuf>,

    pub search: SearchOptions,

    pub changelog: ChangelogSettings,
}

impl HubConfig {
    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path, defaulting when absent
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).context("Invalid config YAML")
    }

    /// Default config file location
    ///
    /// - Linux: `~/.config/widgethub/widgethub.yaml`
    /// - macOS: `~/Library/Application Support/dev.widgethub.widgethub/widgethub.yaml`
    /// - Windows: `%APPDATA%\widgethub\widgethub\config\widgethub.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "widgethub", "widgethub")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(catalog) = &self.catalog {
            if catalog.is_relative() {
                self.catalog = Some(base.join(catalog));
            }
        }
        if let Some(changelog) = &self.changelog.path {
            if changelog.is_relative() {
                self.changelog.path = Some(base.join(changelog));
            }
        }
    }
}
