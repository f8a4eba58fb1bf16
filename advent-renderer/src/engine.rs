//! Tera rendering engine: [`Template`] enum and [`Renderer`].
//!
//! | Template     | Output path                                 |
//! |--------------|---------------------------------------------|
//! | EntryPoint   | `<library>/src/main.rs`                     |
//! | DayManifest  | `<solutions>/<year>/<day>/Cargo.toml`       |
//! | DayLib       | `<solutions>/<year>/<day>/src/lib.rs`       |

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::{EntryPointContext, ScaffoldContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("library/main.rs", include_str!("templates/main.rs.tera")),
    ("day/Cargo.toml", include_str!("templates/day_manifest.toml.tera")),
    ("day/lib.rs", include_str!("templates/day_lib.rs.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n")
    } else {
        content
    }
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// Every embedded template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    EntryPoint,
    DayManifest,
    DayLib,
}

impl Template {
    /// All templates in a stable order.
    pub fn all() -> &'static [Template] {
        &[Template::EntryPoint, Template::DayManifest, Template::DayLib]
    }

    /// Name under which the template is registered with Tera.
    pub fn name(&self) -> &'static str {
        match self {
            Template::EntryPoint  => "library/main.rs",
            Template::DayManifest => "day/Cargo.toml",
            Template::DayLib      => "day/lib.rs",
        }
    }

    /// Output path relative to the directory the template renders into
    /// (the library for the entry point, the day directory otherwise).
    pub fn output_path(&self, root: &Path) -> PathBuf {
        match self {
            Template::EntryPoint  => root.join("src").join("main.rs"),
            Template::DayManifest => root.join("Cargo.toml"),
            Template::DayLib      => root.join("src").join("lib.rs"),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render `<library>/src/main.rs`.
    pub fn render_entry_point(
        &self,
        ctx: &EntryPointContext,
        library: &Path,
    ) -> Result<(PathBuf, String), RenderError> {
        let content = self
            .tera
            .render(Template::EntryPoint.name(), &ctx.to_tera_context()?)?;
        Ok((
            Template::EntryPoint.output_path(library),
            normalize_line_endings(content),
        ))
    }

    /// Render the skeleton files of a new day into `day_dir`.
    pub fn render_scaffold(
        &self,
        ctx: &ScaffoldContext,
        day_dir: &Path,
    ) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        [Template::DayManifest, Template::DayLib]
            .into_iter()
            .map(|template| -> Result<(PathBuf, String), RenderError> {
                let content = self.tera.render(template.name(), &tera_ctx)?;
                Ok((template.output_path(day_dir), normalize_line_endings(content)))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
