//! Shared sync pipeline used by every `advent` command.
//!
//! [`plan`] does all reading, discovery and rendering in memory; nothing is
//! written unless it succeeds. [`run`] applies a plan, [`diff`] compares it
//! with the files on disk.

use std::path::PathBuf;

use advent_core::manifest::{self, read_manifest_source};
use advent_core::{Discovery, SyncPaths};
use advent_renderer::{render_library_manifest, EntryPointContext, Renderer, RunnerPackage};

use crate::diff::{diff_outputs, FileDiff};
use crate::workspace::render_workspace_manifest;
use crate::{write_if_changed, SyncError, WriteResult};

/// Everything a sync run would write.
#[derive(Debug, Clone)]
pub struct Plan {
    pub discovery: Discovery,
    /// `(path, content)` for the aggregator manifest, its entry point and the
    /// workspace manifest, in that order.
    pub outputs: Vec<(PathBuf, String)>,
}

/// Outcome of a sync run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub years: usize,
    pub days: usize,
    pub parts: usize,
    pub writes: Vec<WriteResult>,
}

/// Discover solutions and render all generated files without writing them.
///
/// The runner and workspace manifests are required; any problem with them,
/// or a mis-declared solution package, aborts here.
pub fn plan(paths: &SyncPaths) -> Result<Plan, SyncError> {
    let runner = RunnerPackage {
        name: manifest::read_package_name(&paths.runner)?,
        path: paths.runner.clone(),
    };
    let (workspace_source, workspace_manifest) = read_manifest_source(&paths.workspace_manifest)?;

    tracing::info!("finding solution packages");
    let discovery = advent_detector::discover(&paths.solutions)?;
    tracing::info!(
        years = discovery.years.len(),
        days = discovery.day_count(),
        "discovery finished"
    );

    tracing::info!("generating library in {}", paths.library.display());
    let renderer = Renderer::new()?;
    let library_manifest = render_library_manifest(&discovery, &runner, &paths.library)?;
    let entry_point = renderer.render_entry_point(
        &EntryPointContext::new(&discovery, &runner.name),
        &paths.library,
    )?;
    let workspace =
        render_workspace_manifest(&workspace_source, workspace_manifest, &discovery, paths)?;

    Ok(Plan {
        discovery,
        outputs: vec![library_manifest, entry_point, workspace],
    })
}

/// Run the pipeline and write every changed file.
pub fn run(paths: &SyncPaths, dry_run: bool) -> Result<SyncReport, SyncError> {
    let plan = plan(paths)?;
    let writes = plan
        .outputs
        .iter()
        .map(|(path, content)| write_if_changed(path, content, dry_run))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SyncReport {
        years: plan.discovery.years.len(),
        days: plan.discovery.day_count(),
        parts: plan.discovery.part_count(),
        writes,
    })
}

/// Unified diffs of what [`run`] would change.
pub fn diff(paths: &SyncPaths) -> Result<Vec<FileDiff>, SyncError> {
    let plan = plan(paths)?;
    diff_outputs(&plan.outputs, paths.workspace_dir())
}
