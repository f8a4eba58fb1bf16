//! Domain types for discovered solution packages.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Everything here is built fresh on each run and never mutated afterwards.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// First year a solution directory may carry.
pub const FIRST_YEAR: u16 = 2015;

/// Valid day numbers, inclusive.
pub const DAYS: std::ops::RangeInclusive<u8> = 1..=25;

/// Returns `true` if `year` qualifies as a year directory.
pub fn is_valid_year(year: u16) -> bool {
    year >= FIRST_YEAR
}

/// Returns `true` if `day` qualifies as a day directory.
pub fn is_valid_day(day: u8) -> bool {
    DAYS.contains(&day)
}

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A package name as declared in `[package] name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName(pub String);

impl PackageName {
    /// The identifier the package is reachable under from Rust code.
    pub fn crate_ident(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Output shape of a part, selects the runner's `Part` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    #[default]
    Numeric,
    Alpha,
    Multiline,
}

impl PartKind {
    /// Name of the matching variant of the runner's `Part` enum.
    pub fn variant(&self) -> &'static str {
        match self {
            PartKind::Numeric => "Numeric",
            PartKind::Alpha => "Alpha",
            PartKind::Multiline => "Multiline",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartKind::Numeric => write!(f, "numeric"),
            PartKind::Alpha => write!(f, "alpha"),
            PartKind::Multiline => write!(f, "multiline"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A declared entry point inside a solution package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Part {
    /// Path of the function inside the package, e.g. `part1` or `solve::run`.
    pub fun: String,
    #[serde(default)]
    pub kind: PartKind,
    /// Runner skips these when timing everything at once.
    #[serde(default)]
    pub long_running: bool,
}

impl Part {
    pub fn new(fun: impl Into<String>, kind: PartKind) -> Self {
        Self {
            fun: fun.into(),
            kind,
            long_running: false,
        }
    }

    /// `true` when `fun` is `ident(::ident)*`.
    ///
    /// Keywords are rejected; raw identifiers such as `r#type` are accepted.
    pub fn has_valid_path(&self) -> bool {
        !self.fun.is_empty() && self.fun.split("::").all(is_identifier)
    }
}

/// Strict and reserved keywords of the 2021 edition.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(segment: &str) -> bool {
    match segment.strip_prefix("r#") {
        Some(raw) => is_plain_identifier(raw) && !matches!(raw, "crate" | "self" | "super" | "Self"),
        None => is_plain_identifier(segment) && !KEYWORDS.contains(&segment),
    }
}

fn is_plain_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    segment != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One discovered solution package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub name: PackageName,
    /// Absolute path to the package directory.
    pub path: PathBuf,
    pub part1: Option<Part>,
    pub part2: Option<Part>,
}

impl Day {
    /// A package that declares no runnable parts.
    pub fn bare(name: impl Into<PackageName>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            part1: None,
            part2: None,
        }
    }

    /// Declared parts tagged with their slot number, slot 1 first.
    pub fn parts(&self) -> impl Iterator<Item = (u8, &Part)> {
        [(1, self.part1.as_ref()), (2, self.part2.as_ref())]
            .into_iter()
            .filter_map(|(slot, part)| part.map(|p| (slot, p)))
    }
}

/// Year → day → package, in the order directories were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub years: IndexMap<u16, IndexMap<u8, Day>>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package; a later entry for the same key replaces the earlier one
    /// and keeps its original position.
    pub fn insert(&mut self, year: u16, day: u8, package: Day) -> Option<Day> {
        self.years.entry(year).or_default().insert(day, package)
    }

    pub fn get(&self, year: u16, day: u8) -> Option<&Day> {
        self.years.get(&year).and_then(|days| days.get(&day))
    }

    /// Every package in discovery order.
    pub fn packages(&self) -> impl Iterator<Item = (u16, u8, &Day)> {
        self.years
            .iter()
            .flat_map(|(year, days)| days.iter().map(move |(day, pkg)| (*year, *day, pkg)))
    }

    pub fn day_count(&self) -> usize {
        self.years.values().map(IndexMap::len).sum()
    }

    pub fn part_count(&self) -> usize {
        self.packages().map(|(_, _, pkg)| pkg.parts().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.day_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
