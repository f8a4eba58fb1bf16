//! Aggregator manifest: the `library` package depending on every solution
//! and on the runner.

use std::path::{Path, PathBuf};

use serde::Serialize;
use toml::{Table, Value};

use advent_core::manifest::MANIFEST_FILE;
use advent_core::paths::{manifest_string, relative_path};
use advent_core::{Discovery, PackageName};

use crate::error::RenderError;

/// Fixed package name of the aggregator.
pub const LIBRARY_PACKAGE: &str = "library";

const HEADER: &str = "# Generated by `advent`. Regenerated on every run; do not edit.\n\n";

#[derive(Debug, Serialize)]
struct LibraryManifest {
    package: LibraryPackage,
    dependencies: Table,
}

#[derive(Debug, Serialize)]
struct LibraryPackage {
    name: &'static str,
    version: &'static str,
    edition: &'static str,
    publish: bool,
}

/// The runner package the aggregator links against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerPackage {
    pub name: PackageName,
    /// Absolute path to the runner directory.
    pub path: PathBuf,
}

/// Render `<library>/Cargo.toml`.
///
/// Dependencies are keyed by declared package name in discovery order, the
/// runner last; each carries a path relative to `library`.
pub fn render_library_manifest(
    discovery: &Discovery,
    runner: &RunnerPackage,
    library: &Path,
) -> Result<(PathBuf, String), RenderError> {
    let mut dependencies = Table::new();
    let packages = discovery
        .packages()
        .map(|(_, _, pkg)| (&pkg.name, pkg.path.as_path()))
        .chain(std::iter::once((&runner.name, runner.path.as_path())));

    for (name, path) in packages {
        let mut dep = Table::new();
        dep.insert(
            "path".to_string(),
            Value::String(manifest_string(&relative_path(path, library))),
        );
        if dependencies
            .insert(name.0.clone(), Value::Table(dep))
            .is_some()
        {
            tracing::warn!("package name `{name}` is declared more than once");
        }
    }

    let manifest = LibraryManifest {
        package: LibraryPackage {
            name: LIBRARY_PACKAGE,
            version: "0.1.0",
            edition: "2021",
            publish: false,
        },
        dependencies,
    };
    let body = toml::to_string(&manifest)?;
    Ok((library.join(MANIFEST_FILE), format!("{HEADER}{body}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Day;

    fn runner() -> RunnerPackage {
        RunnerPackage {
            name: PackageName::from("runner"),
            path: PathBuf::from("/ws/runner"),
        }
    }

    #[test]
    fn dependencies_are_relative_and_runner_last() {
        let mut discovery = Discovery::new();
        discovery.insert(2023, 2, Day::bare("d2", "/ws/solutions/2023/02"));
        discovery.insert(2023, 1, Day::bare("d1", "/ws/solutions/2023/01"));

        let (path, content) =
            render_library_manifest(&discovery, &runner(), Path::new("/ws/library")).unwrap();
        assert_eq!(path, PathBuf::from("/ws/library/Cargo.toml"));
        assert!(content.starts_with("# Generated by `advent`"));

        let table: Table = content.parse().expect("valid TOML");
        assert_eq!(table["package"]["name"].as_str(), Some("library"));
        assert_eq!(table["package"]["publish"].as_bool(), Some(false));

        let deps = table["dependencies"].as_table().unwrap();
        let names: Vec<&String> = deps.keys().collect();
        assert_eq!(names, ["d2", "d1", "runner"]);
        assert_eq!(deps["d1"]["path"].as_str(), Some("../solutions/2023/01"));
        assert_eq!(deps["runner"]["path"].as_str(), Some("../runner"));
    }

    #[test]
    fn empty_discovery_depends_on_runner_only() {
        let (_, content) =
            render_library_manifest(&Discovery::new(), &runner(), Path::new("/ws/library")).unwrap();
        let table: Table = content.parse().unwrap();
        assert_eq!(table["dependencies"].as_table().unwrap().len(), 1);
    }
}
