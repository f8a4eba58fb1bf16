//! `advent init`: create the skeleton of a new solution package.

use std::path::PathBuf;

use advent_core::types::{is_valid_day, is_valid_year};
use advent_core::{Discovery, SyncPaths};
use advent_renderer::{Renderer, ScaffoldContext};

use crate::{write_if_changed, SyncError, WriteResult};

/// Directory a new day is created in: `<solutions>/<year>/<day>`.
pub fn day_dir(paths: &SyncPaths, year: u16, day: u8) -> PathBuf {
    paths.solutions.join(year.to_string()).join(day.to_string())
}

/// Write `Cargo.toml` and `src/lib.rs` for `year`.`day`.
///
/// Refuses days outside the directory convention, days already present in
/// `discovery`, and directories that already exist.
pub fn init_day(
    paths: &SyncPaths,
    discovery: &Discovery,
    year: u16,
    day: u8,
) -> Result<Vec<WriteResult>, SyncError> {
    if !is_valid_year(year) || !is_valid_day(day) {
        return Err(SyncError::InvalidDay { year, day });
    }
    let dir = day_dir(paths, year, day);
    if let Some(existing) = discovery.get(year, day) {
        return Err(SyncError::DayExists {
            year,
            day,
            path: existing.path.clone(),
        });
    }
    if dir.exists() {
        return Err(SyncError::DayExists { year, day, path: dir });
    }

    tracing::info!(year, day, "initializing solution in {}", dir.display());
    let renderer = Renderer::new()?;
    renderer
        .render_scaffold(&ScaffoldContext::new(year, day), &dir)?
        .iter()
        .map(|(path, content)| write_if_changed(path, content, false))
        .collect()
}
