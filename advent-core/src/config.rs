//! Layered resolution of the locations a sync run works on.
//!
//! Precedence, highest first:
//! 1. explicit overrides (command-line flags),
//! 2. `[workspace.metadata.advent]` in the workspace manifest,
//! 3. built-in defaults relative to the workspace directory.
//!
//! ```toml
//! [workspace.metadata.advent]
//! solutions = "solutions"
//! runner = "runner"
//! library = "library"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Table;

use crate::error::{ConfigError, ManifestError};
use crate::manifest::{self, MANIFEST_FILE};
use crate::paths;

pub const DEFAULT_SOLUTIONS: &str = "solutions";
pub const DEFAULT_RUNNER: &str = "runner";
pub const DEFAULT_LIBRARY: &str = "library";

/// Values read from `[workspace.metadata.advent]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorkspaceSettings {
    #[serde(default)]
    pub solutions: Option<PathBuf>,
    #[serde(default)]
    pub runner: Option<PathBuf>,
    #[serde(default)]
    pub library: Option<PathBuf>,
}

impl WorkspaceSettings {
    /// Extract settings from a loaded workspace manifest. Absent block → defaults.
    pub fn from_manifest(manifest: &Table, path: &Path) -> Result<Self, ConfigError> {
        match manifest::lookup(manifest, &["workspace", "metadata", "advent"]) {
            None => Ok(Self::default()),
            Some(value) => value.clone().try_into().map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Location overrides, typically from the command line. Relative paths are
/// taken relative to the current directory.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub workspace: Option<PathBuf>,
    pub runner: Option<PathBuf>,
    pub solutions: Option<PathBuf>,
    pub library: Option<PathBuf>,
}

/// Fully resolved, absolute locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    /// The top-level `Cargo.toml`.
    pub workspace_manifest: PathBuf,
    pub runner: PathBuf,
    pub solutions: PathBuf,
    pub library: PathBuf,
}

impl SyncPaths {
    /// Derive every location from the workspace directory using defaults only.
    pub fn with_defaults(workspace_dir: &Path) -> Self {
        Self::layered(workspace_dir, &WorkspaceSettings::default())
    }

    fn layered(workspace_dir: &Path, settings: &WorkspaceSettings) -> Self {
        let pick = |configured: &Option<PathBuf>, default: &str| {
            paths::resolve(
                workspace_dir,
                configured.as_deref().unwrap_or(Path::new(default)),
            )
        };
        SyncPaths {
            workspace_manifest: workspace_dir.join(MANIFEST_FILE),
            runner: pick(&settings.runner, DEFAULT_RUNNER),
            solutions: pick(&settings.solutions, DEFAULT_SOLUTIONS),
            library: pick(&settings.library, DEFAULT_LIBRARY),
        }
    }

    /// Directory containing the workspace manifest.
    pub fn workspace_dir(&self) -> &Path {
        self.workspace_manifest.parent().unwrap_or(Path::new("/"))
    }

    /// Resolve all locations.
    ///
    /// The workspace manifest must exist and parse; the other locations are
    /// only computed here and checked by the pipeline.
    pub fn resolve(overrides: &Overrides) -> Result<Self, ConfigError> {
        let workspace_manifest = paths::absolutize(
            overrides
                .workspace
                .as_deref()
                .unwrap_or(Path::new(MANIFEST_FILE)),
        )
        .map_err(ConfigError::CurrentDir)?;

        let manifest = manifest::read_manifest_file(&workspace_manifest)?;
        let settings = WorkspaceSettings::from_manifest(&manifest, &workspace_manifest)?;

        let workspace_dir = workspace_manifest
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ManifestError::NotFound {
                path: workspace_manifest.clone(),
            })?;

        let mut resolved = Self::layered(&workspace_dir, &settings);
        resolved.workspace_manifest = workspace_manifest;

        let absolute = |p: &Path| paths::absolutize(p).map_err(ConfigError::CurrentDir);
        if let Some(runner) = &overrides.runner {
            resolved.runner = absolute(runner)?;
        }
        if let Some(solutions) = &overrides.solutions {
            resolved.solutions = absolute(solutions)?;
        }
        if let Some(library) = &overrides.library {
            resolved.library = absolute(library)?;
        }
        Ok(resolved)
    }
}
