//! Subcommand implementations and the location flags they share.

pub mod cargo;
pub mod diff;
pub mod init;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use advent_core::{Overrides, SyncPaths};
use advent_sync::WriteResult;

/// Where the workspace pieces live. Unset flags fall back to
/// `[workspace.metadata.advent]`, then to the defaults.
#[derive(Args, Debug, Clone)]
pub struct LocationArgs {
    /// Path to the workspace Cargo.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Path to the runner package.
    #[arg(long, global = true, value_name = "DIR")]
    pub runner: Option<PathBuf>,

    /// Path to the solutions directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub solutions: Option<PathBuf>,

    /// Where to generate the library package.
    #[arg(long, global = true, value_name = "DIR")]
    pub library: Option<PathBuf>,

    /// Cargo executable used for passthrough commands.
    #[arg(long, global = true, value_name = "BIN", default_value = "cargo")]
    pub cargo: String,
}

impl LocationArgs {
    pub fn resolve(&self) -> Result<SyncPaths> {
        let overrides = Overrides {
            workspace: self.workspace.clone(),
            runner: self.runner.clone(),
            solutions: self.solutions.clone(),
            library: self.library.clone(),
        };
        SyncPaths::resolve(&overrides).context("cannot resolve workspace locations")
    }
}

pub(crate) fn print_writes(writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let changed = writes.iter().filter(|w| w.is_change()).count();
    println!(
        "{prefix}✓ library synced ({} written, {} unchanged)",
        changed,
        writes.len() - changed
    );
    for w in writes {
        let marker = match w {
            WriteResult::Written { .. } => "✎",
            WriteResult::WouldWrite { .. } => "~",
            WriteResult::Unchanged { .. } => "·",
        };
        println!("  {marker}  {}", w.path().display());
    }
}
