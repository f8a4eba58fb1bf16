//! Solution discovery for `advent-detector`.
//!
//! `discover(root)` walks `<root>/<year>/<day>/` and returns every package it
//! can read, keyed by year then day in directory-listing order. Names that do
//! not parse as numbers, years before 2015 and days outside `1..=25` are
//! ignored. A day whose manifest is missing or is not valid TOML is skipped
//! with a warning; a manifest that is readable but declares its parts wrongly
//! aborts discovery.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::Value;

use advent_core::manifest;
use advent_core::types::{is_valid_day, is_valid_year};
use advent_core::{Day, Discovery, ManifestError, Part};

/// Key of the tool-specific block inside `[package.metadata]`.
pub const METADATA_KEY: &str = "advent";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that abort discovery.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A directory could not be listed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest was readable but structurally invalid (e.g. no package name).
    #[error("invalid manifest for {year}.{day}: {source}")]
    Manifest {
        year: u16,
        day: u8,
        #[source]
        source: ManifestError,
    },

    /// A part block has unknown keys or wrongly typed values.
    #[error("invalid part{slot} for {year}.{day} in {path}: {source}")]
    InvalidPart {
        year: u16,
        day: u8,
        slot: u8,
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// `fun` is not a Rust path.
    #[error("part{slot} for {year}.{day} in {path}: `{fun}` is not a valid function path")]
    InvalidFunction {
        year: u16,
        day: u8,
        slot: u8,
        path: PathBuf,
        fun: String,
    },
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DetectError {
    DetectError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Discover every solution package below `root`.
///
/// A missing `root` yields an empty result.
pub fn discover(root: &Path) -> Result<Discovery, DetectError> {
    let mut discovery = Discovery::new();
    if !root.exists() {
        tracing::info!("solutions directory {} does not exist", root.display());
        return Ok(discovery);
    }
    tracing::info!("visiting solutions in {}", root.display());

    for (year, year_dir) in numbered_dirs(root, is_valid_year)? {
        for (day, day_dir) in numbered_dirs(&year_dir, is_valid_day)? {
            tracing::trace!(year, day, "found {}", day_dir.display());
            if let Some(package) = parse_day(year, day, &day_dir)? {
                tracing::debug!(year, day, "discovered package {}", package.name);
                if let Some(previous) = discovery.insert(year, day, package) {
                    tracing::warn!(
                        year,
                        day,
                        "{} replaces {} for {year}.{day}",
                        day_dir.display(),
                        previous.path.display()
                    );
                }
            }
        }
    }
    Ok(discovery)
}

/// Build the descriptor for the package in `path`.
///
/// Returns `Ok(None)` when the manifest is missing or is not valid TOML.
pub fn parse_day(year: u16, day: u8, path: &Path) -> Result<Option<Day>, DetectError> {
    let manifest_path = manifest::manifest_path(path);
    let manifest = match manifest::read_manifest(path) {
        Ok(manifest) => manifest,
        Err(err) if err.is_unusable() => {
            tracing::warn!(year, day, "skipping {year}.{day}: {err}");
            return Ok(None);
        }
        Err(source) => return Err(DetectError::Manifest { year, day, source }),
    };

    let name = manifest::package_name(&manifest, &manifest_path)
        .map_err(|source| DetectError::Manifest { year, day, source })?;

    let Some(block) = manifest::lookup(&manifest, &["package", "metadata", METADATA_KEY]) else {
        return Ok(Some(Day::bare(name, path)));
    };

    let part = |slot: u8| parse_part(year, day, slot, block, &manifest_path);
    Ok(Some(Day {
        name,
        path: path.to_path_buf(),
        part1: part(1)?,
        part2: part(2)?,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_part(
    year: u16,
    day: u8,
    slot: u8,
    block: &Value,
    manifest_path: &Path,
) -> Result<Option<Part>, DetectError> {
    let Some(value) = block.get(format!("part{slot}").as_str()) else {
        return Ok(None);
    };
    let part: Part = value.clone().try_into().map_err(|source| DetectError::InvalidPart {
        year,
        day,
        slot,
        path: manifest_path.to_path_buf(),
        source,
    })?;
    if !part.has_valid_path() {
        return Err(DetectError::InvalidFunction {
            year,
            day,
            slot,
            path: manifest_path.to_path_buf(),
            fun: part.fun,
        });
    }
    Ok(Some(part))
}

/// Subdirectories of `dir` whose names parse as a number accepted by `keep`,
/// in listing order.
fn numbered_dirs<N>(dir: &Path, keep: fn(N) -> bool) -> Result<Vec<(N, PathBuf)>, DetectError>
where
    N: std::str::FromStr + Copy,
{
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let number = entry.file_name().to_str().and_then(|n| n.parse::<N>().ok());
        match number {
            Some(n) if keep(n) && path.is_dir() => found.push((n, path)),
            _ => tracing::trace!("ignoring {}", path.display()),
        }
    }
    Ok(found)
}
