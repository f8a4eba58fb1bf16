//! # advent-sync
//!
//! Keeps the generated aggregator and the workspace member list in step with
//! the solutions on disk.
//!
//! Call [`pipeline::run`] to regenerate everything, [`pipeline::diff`] to
//! preview it, or [`scaffold::init_day`] to create a new solution package.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod scaffold;
pub mod workspace;
pub mod writer;

pub use diff::FileDiff;
pub use error::SyncError;
pub use pipeline::{Plan, SyncReport};
pub use writer::{write_if_changed, WriteResult};
