//! `advent init <year> <day> [--no-update]`

use anyhow::{Context, Result};
use clap::Args;

use advent_sync::{pipeline, scaffold};

use super::{print_writes, LocationArgs};

/// Create a solution package skeleton.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Year of the new solution (2015 or later).
    pub year: u16,

    /// Day of the new solution (1-25).
    pub day: u8,

    /// Do not regenerate the library afterwards.
    #[arg(long)]
    pub no_update: bool,
}

impl InitArgs {
    pub fn run(self, locations: &LocationArgs) -> Result<()> {
        let paths = locations.resolve()?;
        let discovery = pipeline::plan(&paths)
            .context("cannot read existing solutions")?
            .discovery;

        scaffold::init_day(&paths, &discovery, self.year, self.day)
            .with_context(|| format!("cannot init {}.{}", self.year, self.day))?;
        println!(
            "✓ Created {}",
            scaffold::day_dir(&paths, self.year, self.day).display()
        );

        if !self.no_update {
            let report = pipeline::run(&paths, false).context("update failed")?;
            print_writes(&report.writes, false);
        }
        Ok(())
    }
}
