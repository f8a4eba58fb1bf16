//! Error types for advent-sync.

use std::path::PathBuf;

use thiserror::Error;

use advent_core::ManifestError;
use advent_detector::DetectError;
use advent_renderer::RenderError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Discovery aborted on a mis-declared solution package.
    #[error("discovery error: {0}")]
    Detect(#[from] DetectError),

    /// The runner or workspace manifest could not be used.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workspace manifest could not be edited in place.
    #[error("cannot edit workspace manifest {path}: {source}")]
    Edit {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// The top-level manifest has no `[workspace]` table.
    #[error("not a workspace: {path} has no [workspace] section")]
    NotAWorkspace { path: PathBuf },

    /// `workspace.members` exists but is not an array.
    #[error("`workspace.members` in {path} is not an array")]
    InvalidMembers { path: PathBuf },

    /// `init` for a year/day outside the convention.
    #[error("{year}.{day} is not a valid day (years start at 2015, days are 1..=25)")]
    InvalidDay { year: u16, day: u8 },

    /// `init` for a day that already exists.
    #[error("a solution for {year}.{day} already exists at {path}")]
    DayExists { year: u16, day: u8, path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
