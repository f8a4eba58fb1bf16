//! Unified diff support for `advent diff`.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::writer::{normalize_line_endings, read_existing};
use crate::SyncError;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare rendered outputs with what is on disk. Files that would not change
/// are left out. No files are written.
///
/// Headers show paths relative to `root` when possible.
pub fn diff_outputs(outputs: &[(PathBuf, String)], root: &Path) -> Result<Vec<FileDiff>, SyncError> {
    let mut diffs = Vec::new();
    for (path, rendered) in outputs {
        let rendered = normalize_line_endings(rendered);
        let existing = read_existing(path)?.unwrap_or_default();
        if existing == rendered {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path: path.clone(),
            unified_diff: unified,
        });
    }
    Ok(diffs)
}
