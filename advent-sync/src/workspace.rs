//! Workspace member reconciliation.
//!
//! Members resolving inside the solutions tree, plus the aggregator itself,
//! belong to `advent` and are regenerated from discovery on every run.
//! Every other member is kept as written and in its original order, ahead of
//! the regenerated block.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use toml_edit::{Array, DocumentMut, Item};

use advent_core::paths::{manifest_string, relative_path, resolve};
use advent_core::{Discovery, SyncPaths};

use crate::error::SyncError;

/// Members `advent` maintains: one per discovered package in discovery
/// order, then the aggregator unless already listed.
pub fn owned_members(discovery: &Discovery, paths: &SyncPaths) -> Vec<String> {
    let workspace_dir = paths.workspace_dir();
    let mut members: Vec<String> = discovery
        .packages()
        .map(|(_, _, pkg)| manifest_string(&relative_path(&pkg.path, workspace_dir)))
        .collect();
    let library = manifest_string(&relative_path(&paths.library, workspace_dir));
    if !members.contains(&library) {
        members.push(library);
    }
    members
}

/// `true` if `member` is one `advent` regenerates.
pub fn is_owned(member: &Value, paths: &SyncPaths) -> bool {
    let Some(member) = member.as_str() else {
        return false;
    };
    let resolved = resolve(paths.workspace_dir(), Path::new(member));
    resolved.starts_with(&paths.solutions) || resolved == paths.library
}

/// Foreign members in their original order followed by `owned`.
pub fn reconcile_members(existing: &[Value], owned: Vec<String>, paths: &SyncPaths) -> Vec<Value> {
    existing
        .iter()
        .filter(|member| !is_owned(member, paths))
        .cloned()
        .chain(owned.into_iter().map(Value::String))
        .collect()
}

/// Render the workspace manifest with its member list reconciled.
///
/// `source` is the current file text and `manifest` its parse. Only the
/// value of `workspace.members` is replaced; comments, key order and the
/// layout of every other entry are kept. When the member list is already up
/// to date `source` is returned untouched.
pub fn render_workspace_manifest(
    source: &str,
    manifest: Table,
    discovery: &Discovery,
    paths: &SyncPaths,
) -> Result<(PathBuf, String), SyncError> {
    let path = paths.workspace_manifest.clone();
    let workspace = manifest
        .get("workspace")
        .and_then(Value::as_table)
        .ok_or_else(|| SyncError::NotAWorkspace { path: path.clone() })?;

    let existing = match workspace.get("members") {
        None => Vec::new(),
        Some(Value::Array(members)) => members.clone(),
        Some(_) => return Err(SyncError::InvalidMembers { path }),
    };
    let members = reconcile_members(&existing, owned_members(discovery, paths), paths);

    if members == existing {
        tracing::debug!("workspace members already up to date");
        return Ok((path, source.to_string()));
    }
    tracing::info!(
        before = existing.len(),
        after = members.len(),
        "updating workspace members"
    );
    let content = replace_members(source, &members, &path)?;
    Ok((path, content))
}

fn replace_members(source: &str, members: &[Value], path: &Path) -> Result<String, SyncError> {
    let edit_err = |source: toml_edit::TomlError| SyncError::Edit {
        path: path.to_path_buf(),
        source,
    };
    let mut document: DocumentMut = source.parse().map_err(edit_err)?;
    let workspace = document
        .get_mut("workspace")
        .and_then(Item::as_table_like_mut)
        .ok_or_else(|| SyncError::NotAWorkspace {
            path: path.to_path_buf(),
        })?;

    let mut array = members
        .iter()
        .map(|member| match member {
            Value::String(member) => Ok(toml_edit::Value::from(member.as_str())),
            other => other.to_string().parse::<toml_edit::Value>().map_err(edit_err),
        })
        .collect::<Result<Array, _>>()?;
    if !array.is_empty() {
        for value in array.iter_mut() {
            value.decor_mut().set_prefix("\n    ");
        }
        array.set_trailing("\n");
        array.set_trailing_comma(true);
    }

    match workspace.get_mut("members") {
        Some(item) => {
            // keeps the spacing and any trailing comment of the old value
            let decor = item.as_value().map(|old| old.decor().clone()).unwrap_or_default();
            let mut value = toml_edit::Value::Array(array);
            *value.decor_mut() = decor;
            *item = Item::Value(value);
        }
        None => {
            workspace.insert("members", Item::Value(toml_edit::Value::Array(array)));
        }
    }
    Ok(document.to_string())
}
