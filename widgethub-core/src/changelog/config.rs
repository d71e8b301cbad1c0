//! Changelog generation settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Line the trimmed changelog starts at
pub const DEFAULT_MARKER: &str = "[compare changes]";

/// Changelog file, relative to the repository root
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Options handed to the changelog generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogConfig {
    /// Lower bound of the range (second newest tag)
    pub from: String,

    /// Upper bound of the range (newest tag)
    pub to: String,

    /// Write the changelog to a file
    pub output: bool,

    /// Leave the contributors section out
    pub no_authors: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            output: false,
            no_authors: true,
        }
    }
}

/// How and where the changelog is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogSettings {
    /// Changelog file to regenerate, `CHANGELOG.md` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Everything before the first line starting with this is dropped
    pub marker: String,

    /// Generator program and leading arguments
    pub command: Vec<String>,
}

impl Default for ChangelogSettings {
    fn default() -> Self {
        Self {
            path: None,
            marker: DEFAULT_MARKER.to_string(),
            command: vec![
                "pnpm".to_string(),
                "dlx".to_string(),
                "changelogen".to_string(),
            ],
        }
    }
}

impl ChangelogSettings {
    /// The configured changelog path, or the default
    pub fn changelog_path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CHANGELOG_PATH))
    }
}
