//! Changelog extraction error types

use std::path::PathBuf;
use thiserror::Error;

/// Changelog extraction errors
///
/// Any of these aborts the extraction. A generated changelog without
/// the marker line is not an error.
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// The configured generator command has no program
    #[error("Changelog command is empty. Configure at least a program, e.g. [\"pnpm\", \"dlx\", \"changelogen\"]")]
    EmptyCommand,

    /// An external program could not be started
    #[error("Failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external program exited unsuccessfully
    #[error("'{program}' failed with {status}\n\n{stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Failed to read changelog: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write changelog: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove stale changelog: {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
