//! Error types for advent-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a `Cargo.toml`.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The directory has no manifest file.
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading the manifest.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A required key is absent or has the wrong type.
    #[error("manifest at {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

impl ManifestError {
    /// `true` for failures that mean "there is no usable manifest here".
    pub fn is_unusable(&self) -> bool {
        matches!(self, ManifestError::NotFound { .. } | ManifestError::Parse { .. })
    }
}

/// Errors from resolving the sync locations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// `[workspace.metadata.advent]` has a key of the wrong type.
    #[error("invalid `[workspace.metadata.advent]` in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
