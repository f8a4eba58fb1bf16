//! Manifest reader.
//!
//! Loads `Cargo.toml` files as raw `toml::Table`s so callers can pick the
//! keys they care about and preserve everything else verbatim. Key order
//! follows the file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::ManifestError;
use crate::types::PackageName;

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// `<dir>/Cargo.toml`. Pure, no I/O.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

/// Load the manifest inside `dir`.
pub fn read_manifest(dir: &Path) -> Result<Table, ManifestError> {
    read_manifest_file(&manifest_path(dir))
}

/// Load a manifest from an explicit file path.
///
/// Returns [`ManifestError::NotFound`] if absent and
/// [`ManifestError::Parse`] (with path) if the TOML is malformed.
pub fn read_manifest_file(path: &Path) -> Result<Table, ManifestError> {
    read_manifest_source(path).map(|(_, table)| table)
}

/// Like [`read_manifest_file`] but also returns the raw text, for callers
/// that rewrite the file only when something actually changed.
pub fn read_manifest_source(path: &Path) -> Result<(String, Table), ManifestError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let table = contents.parse::<Table>().map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((contents, table))
}

/// `[package] name` of a loaded manifest.
pub fn package_name(manifest: &Table, path: &Path) -> Result<PackageName, ManifestError> {
    manifest
        .get("package")
        .and_then(|pkg| pkg.get("name"))
        .and_then(Value::as_str)
        .map(PackageName::from)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "package.name",
        })
}

/// Walk nested tables, e.g. `lookup(m, &["package", "metadata", "advent"])`.
pub fn lookup<'a>(manifest: &'a Table, keys: &[&str]) -> Option<&'a Value> {
    let (first, rest) = keys.split_first()?;
    rest.iter()
        .try_fold(manifest.get(*first)?, |value, key| value.get(*key))
}

/// Read the package name straight from `<dir>/Cargo.toml`.
pub fn read_package_name(dir: &Path) -> Result<PackageName, ManifestError> {
    let path = manifest_path(dir);
    let manifest = read_manifest_file(&path)?;
    package_name(&manifest, &path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_nested_tables() {
        let table: Table = "[package.metadata.advent.part1]\nfun = \"solve\"\n"
            .parse()
            .expect("parse");
        let fun = lookup(&table, &["package", "metadata", "advent", "part1", "fun"]);
        assert_eq!(fun.and_then(Value::as_str), Some("solve"));
        assert!(lookup(&table, &["package", "name"]).is_none());
        assert!(lookup(&table, &[]).is_none());
    }

    #[test]
    fn package_name_requires_string() {
        let table: Table = "[package]\nname = 3\n".parse().expect("parse");
        let err = package_name(&table, Path::new("/x/Cargo.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::MissingField { field: "package.name", .. }));
    }
}
