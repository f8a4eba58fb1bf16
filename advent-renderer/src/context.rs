//! Template contexts: serializable rendering payloads built from a [`Discovery`].

use serde::Serialize;

use advent_core::{Discovery, PackageName};

use crate::error::RenderError;

/// Payload of the generated entry point.
///
/// Years and days keep discovery order; they are never sorted here.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPointContext {
    /// Crate identifier of the runner.
    pub runner: String,
    pub years: Vec<YearCtx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearCtx {
    pub year: u16,
    pub days: Vec<DayCtx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCtx {
    pub day: u8,
    pub parts: Vec<PartCtx>,
}

/// One `add_part_N` call.
#[derive(Debug, Clone, Serialize)]
pub struct PartCtx {
    pub slot: u8,
    /// Crate identifier of the solution package.
    pub package: String,
    pub fun: String,
    /// Variant of the runner's `Part` enum.
    pub variant: &'static str,
    pub long_running: bool,
}

impl EntryPointContext {
    pub fn new(discovery: &Discovery, runner: &PackageName) -> Self {
        let years = discovery
            .years
            .iter()
            .map(|(year, days)| YearCtx {
                year: *year,
                days: days
                    .iter()
                    .map(|(day, pkg)| DayCtx {
                        day: *day,
                        parts: pkg
                            .parts()
                            .map(|(slot, part)| PartCtx {
                                slot,
                                package: pkg.name.crate_ident(),
                                fun: part.fun.clone(),
                                variant: part.kind.variant(),
                                long_running: part.long_running,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        EntryPointContext {
            runner: runner.crate_ident(),
            years,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Payload of the files written for a freshly scaffolded day.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldContext {
    pub year: u16,
    pub day: u8,
    pub package: String,
    pub fun: String,
}

impl ScaffoldContext {
    pub fn new(year: u16, day: u8) -> Self {
        ScaffoldContext {
            year,
            day,
            package: format!("aoc_{year}_{day}"),
            fun: "part1".to_string(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
