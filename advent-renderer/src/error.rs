//! Error types for advent-renderer.

use thiserror::Error;

/// All errors that can arise while rendering generated files.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// TOML serialization error (aggregator manifest).
    #[error("manifest serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}
