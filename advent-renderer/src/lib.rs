//! # advent-renderer
//!
//! Generates the aggregator package that wires every discovered solution into
//! the runner: its `Cargo.toml` and a Tera-rendered `src/main.rs` whose
//! registration tree follows discovery order. Also renders the skeleton of a
//! new day.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use advent_core::{Discovery, PackageName};
//! use advent_renderer::{EntryPointContext, Renderer};
//!
//! fn render(discovery: &Discovery) {
//!     if let Ok(renderer) = Renderer::new() {
//!         let ctx = EntryPointContext::new(discovery, &PackageName::from("runner"));
//!         if let Ok((path, content)) = renderer.render_entry_point(&ctx, Path::new("library")) {
//!             println!("{}: {} bytes", path.display(), content.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod library;

pub use context::{EntryPointContext, ScaffoldContext};
pub use engine::{Renderer, Template};
pub use error::RenderError;
pub use library::{render_library_manifest, RunnerPackage, LIBRARY_PACKAGE};
