//! Advent core library: domain types, manifest reading, paths, configuration.
//!
//! - [`types`]: parts, discovered days and the discovery map
//! - [`manifest`]: tolerant `Cargo.toml` loading
//! - [`paths`]: lexical normalisation and relative paths
//! - [`config`]: layered resolution of the sync locations
//! - [`error`]: [`ManifestError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod types;

pub use config::{Overrides, SyncPaths, WorkspaceSettings};
pub use error::{ConfigError, ManifestError};
pub use types::{Day, Discovery, PackageName, Part, PartKind};
