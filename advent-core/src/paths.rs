//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: members of a workspace may point at
//! directories that no longer exist and still need to be classified.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without following symlinks.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `base.join(path)` normalised; absolute `path`s are only normalised.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Absolute form of `path` relative to the current directory.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(resolve(&std::env::current_dir()?, path))
    }
}

/// Relative path leading from directory `base` to `path`.
///
/// Both inputs should be absolute and normalised. Identical paths give `.`;
/// a path that cannot be expressed relative to `base` is returned as is.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    match pathdiff::diff_paths(path, base) {
        Some(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Some(rel) => rel,
        None => path.to_path_buf(),
    }
}

/// Render a path the way manifests store it: `/` separators on every platform.
pub fn manifest_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
