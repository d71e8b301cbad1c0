//! Release changelog extraction
//!
//! Regenerates the changelog for the latest tag range and trims the
//! generator's preamble so the file starts at the marker line.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{
    latest_tags, ChangelogConfig, ChangelogError, ChangelogGenerator, ChangelogSettings,
    TagSource,
};

/// What an extraction run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Configuration the generator was run with
    pub config: ChangelogConfig,

    /// The changelog file
    pub path: PathBuf,

    /// Whether the preamble was cut (false when no marker was found)
    pub trimmed: bool,
}

/// Keep `text` from the first line starting with `marker`
///
/// Returns `None` when no line starts with the marker.
pub fn trim_to_marker(text: &str, marker: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let idx = lines.iter().position(|line| line.starts_with(marker))?;
    Some(lines[idx..].join("\n"))
}

/// Runs tag discovery, generation and trimming in sequence
pub struct ChangelogExtractor<'a> {
    settings: ChangelogSettings,
    repo_dir: Option<PathBuf>,
    tags: &'a dyn TagSource,
    generator: &'a dyn ChangelogGenerator,
}

impl<'a> ChangelogExtractor<'a> {
    pub fn new(
        settings: ChangelogSettings,
        tags: &'a dyn TagSource,
        generator: &'a dyn ChangelogGenerator,
    ) -> Self {
        Self {
            settings,
            repo_dir: None,
            tags,
            generator,
        }
    }

    /// Resolve a relative changelog path against `dir`
    ///
    /// Must match the directory the generator runs in.
    pub fn with_repo_dir(mut self, dir: PathBuf) -> Self {
        self.repo_dir = Some(dir);
        self
    }

    pub fn settings(&self) -> &ChangelogSettings {
        &self.settings
    }

    /// The file that gets removed, generated and trimmed
    pub fn changelog_path(&self) -> PathBuf {
        let path = self.settings.changelog_path();
        match &self.repo_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Generator configuration for the two most recent tags
    ///
    /// `output` keeps its default (`false`); [`run`](Self::run) turns it on.
    pub async fn resolve_config(&self) -> Result<ChangelogConfig, ChangelogError> {
        let range = latest_tags(self.tags).await?;
        Ok(ChangelogConfig {
            from: range.penultimate,
            to: range.latest,
            ..ChangelogConfig::default()
        })
    }

    /// Regenerate and trim the changelog file
    ///
    /// A failing generator aborts before any trimming.
    pub async fn run(&self) -> Result<ExtractOutcome, ChangelogError> {
        let config = ChangelogConfig {
            output: true,
            ..self.resolve_config().await?
        };
        let path = self.changelog_path();

        remove_stale(&path).await?;

        info!(
            "Generating changelog {} -> {} into {}",
            if config.from.is_empty() { "<start>" } else { config.from.as_str() },
            if config.to.is_empty() { "<head>" } else { config.to.as_str() },
            path.display()
        );
        self.generator.generate(&config, &path).await?;

        let trimmed = trim_file(&path, &self.settings.marker).await?;

        Ok(ExtractOutcome {
            config,
            path,
            trimmed,
        })
    }
}

async fn remove_stale(path: &Path) -> Result<(), ChangelogError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed stale changelog: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ChangelogError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Trim the file in place, returning whether the marker was found
async fn trim_file(path: &Path, marker: &str) -> Result<bool, ChangelogError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let Some(trimmed) = trim_to_marker(&content, marker) else {
        warn!(
            "No line starting with '{}' in {}, leaving it unchanged",
            marker,
            path.display()
        );
        return Ok(false);
    };

    tokio::fs::write(path, trimmed)
        .await
        .map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Trimmed changelog to start at '{}'", marker);
    Ok(true)
}
