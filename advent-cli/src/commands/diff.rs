//! `advent diff`: show unified diffs for what update would write.

use anyhow::{Context, Result};
use clap::Args;

use advent_sync::pipeline;

use super::LocationArgs;

/// Arguments for `advent diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {}

impl DiffArgs {
    pub fn run(self, locations: &LocationArgs) -> Result<()> {
        let paths = locations.resolve()?;
        let diffs = pipeline::diff(&paths).context("diff failed")?;

        if diffs.is_empty() {
            println!("Library and workspace are up to date.");
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
