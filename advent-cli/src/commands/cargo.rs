//! `advent <cargo-subcommand> [args...]`: update, then hand over to cargo.

use std::ffi::OsString;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};

use advent_sync::pipeline;

use super::LocationArgs;

/// Regenerate, then run `<cargo> <args...>` in the workspace directory and
/// return its exit code. A process killed by a signal maps to 1.
pub fn run(locations: &LocationArgs, args: Vec<OsString>) -> Result<ExitCode> {
    let paths = locations.resolve()?;
    let report = pipeline::run(&paths, false).context("update failed")?;
    tracing::info!(
        written = report.writes.iter().filter(|w| w.is_change()).count(),
        "library up to date, running {}",
        locations.cargo
    );

    let status = Command::new(&locations.cargo)
        .args(&args)
        .current_dir(paths.workspace_dir())
        .status()
        .with_context(|| format!("failed to run `{}`", locations.cargo))?;

    let code = status.code().unwrap_or(1);
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
