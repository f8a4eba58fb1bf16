//! `advent update`: regenerate the library and workspace members.

use anyhow::{Context, Result};
use clap::Args;

use advent_sync::pipeline;

use super::{print_writes, LocationArgs};

/// Arguments for `advent update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateArgs {
    pub fn run(self, locations: &LocationArgs) -> Result<()> {
        let paths = locations.resolve()?;
        let report = pipeline::run(&paths, self.dry_run).context("update failed")?;
        println!(
            "Found {} day(s) across {} year(s), {} part(s) registered",
            report.days, report.years, report.parts
        );
        print_writes(&report.writes, self.dry_run);
        Ok(())
    }
}
