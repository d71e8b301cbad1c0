//! External changelog generation

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use super::{ChangelogConfig, ChangelogError};

/// Produces a changelog for a tag range
#[async_trait]
pub trait ChangelogGenerator: Send + Sync {
    /// Generate the changelog described by `config`
    ///
    /// When `config.output` is set the result goes to `path`.
    async fn generate(&self, config: &ChangelogConfig, path: &Path) -> Result<(), ChangelogError>;
}

/// Command line flags for a changelogen-compatible generator
///
/// Empty bounds are left out so the tool falls back to the start of
/// history (`from`) or `HEAD` (`to`).
pub fn generator_args(config: &ChangelogConfig, path: &Path) -> Vec<String> {
    let mut args = Vec::new();

    if !config.from.is_empty() {
        args.push("--from".to_string());
        args.push(config.from.clone());
    }
    if !config.to.is_empty() {
        args.push("--to".to_string());
        args.push(config.to.clone());
    }
    if config.output {
        args.push("--output".to_string());
        args.push(path.display().to_string());
    }
    if config.no_authors {
        args.push("--noAuthors".to_string());
    }

    args
}

/// Runs an external changelog tool (`pnpm dlx changelogen` by default)
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandGenerator {
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            working_dir: None,
        }
    }

    /// Run the tool from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }
}

#[async_trait]
impl ChangelogGenerator for CommandGenerator {
    async fn generate(&self, config: &ChangelogConfig, path: &Path) -> Result<(), ChangelogError> {
        let (program, leading) = self
            .command
            .split_first()
            .ok_or(ChangelogError::EmptyCommand)?;

        let args = generator_args(config, path);
        info!("Running {} {} {}", program, leading.join(" "), args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(leading).args(&args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|source| ChangelogError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ChangelogError::CommandFailed {
                program: program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        debug!("{} finished successfully", program);
        Ok(())
    }
}
