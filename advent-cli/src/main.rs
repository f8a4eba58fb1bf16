//! Advent keeps a multi-package Advent of Code workspace wired together.
//!
//! # Usage
//!
//! ```text
//! advent [-v...] [--workspace <Cargo.toml>] [--runner <dir>] [--solutions <dir>] [--library <dir>] <command>
//! advent update [--dry-run]
//! advent diff
//! advent init <year> <day> [--no-update]
//! advent <cargo-subcommand> [args...]     e.g. `advent run --release -- 2023`
//! ```
//!
//! Anything that is not one of the commands above is handed to cargo after
//! the library has been regenerated, and cargo's exit code becomes ours.
//! Arguments after the cargo subcommand are passed through untouched; flags
//! for `advent` itself must come before it.
//!
//! `update`, `diff` and `init` always name the `advent` commands, so
//! `cargo update` and `cargo init` are not reachable through the wrapper. Run
//! those with cargo directly.

mod commands;

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{diff::DiffArgs, init::InitArgs, update::UpdateArgs, LocationArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "advent",
    version,
    about = "Regenerate the solution library and workspace members, then run cargo",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    locations: LocationArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the library and the workspace member list.
    Update(UpdateArgs),

    /// Show unified diff of what update would write.
    Diff(DiffArgs),

    /// Create a new solution package, then update.
    Init(InitArgs),

    /// Update, then run cargo with these arguments.
    #[command(external_subcommand)]
    Cargo(Vec<OsString>),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Update(args) => args.run(&cli.locations).map(|()| ExitCode::SUCCESS),
        Commands::Diff(args) => args.run(&cli.locations).map(|()| ExitCode::SUCCESS),
        Commands::Init(args) => args.run(&cli.locations).map(|()| ExitCode::SUCCESS),
        Commands::Cargo(args) => commands::cargo::run(&cli.locations, args),
    }
}
