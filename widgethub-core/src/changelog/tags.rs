//! Release tag discovery

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

use super::ChangelogError;

/// Source of version tags, newest first
#[async_trait]
pub trait TagSource: Send + Sync {
    async fn tags(&self) -> Result<Vec<String>, ChangelogError>;
}

/// The two most recent tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRange {
    /// Newest tag, empty when there are no tags
    pub latest: String,

    /// Second newest tag, empty when there are fewer than two
    pub penultimate: String,
}

impl TagRange {
    /// Range from a newest-first tag list
    pub fn from_tags(tags: &[String]) -> Self {
        Self {
            latest: tags.first().cloned().unwrap_or_default(),
            penultimate: tags.get(1).cloned().unwrap_or_default(),
        }
    }
}

/// Newest and second newest tag of `source`
pub async fn latest_tags(source: &dyn TagSource) -> Result<TagRange, ChangelogError> {
    let tags = source.tags().await?;
    let range = TagRange::from_tags(&tags);
    debug!(
        "Found {} tags (latest: '{}', penultimate: '{}')",
        tags.len(),
        range.latest,
        range.penultimate
    );
    Ok(range)
}

/// Split `git tag` output into tag names, dropping blank lines
pub fn parse_tag_list(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lists tags of a git repository by creation date, newest first
#[derive(Debug, Clone, Default)]
pub struct GitTagSource {
    /// Repository to query, current directory when unset
    pub repo_dir: Option<PathBuf>,
}

impl GitTagSource {
    pub fn new(repo_dir: Option<PathBuf>) -> Self {
        Self { repo_dir }
    }
}

#[async_trait]
impl TagSource for GitTagSource {
    async fn tags(&self) -> Result<Vec<String>, ChangelogError> {
        let mut cmd = Command::new("git");
        cmd.args(["--no-pager", "tag", "-l", "--sort=-creatordate"]);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|source| ChangelogError::Spawn {
            program: "git".to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(ChangelogError::CommandFailed {
                program: "git".to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(parse_tag_list(&String::from_utf8_lossy(&output.stdout)))
    }
}
