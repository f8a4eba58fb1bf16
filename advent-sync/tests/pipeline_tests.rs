//! End-to-end sync runs against a temporary workspace.

use std::fs;
use std::path::Path;

use advent_core::{ManifestError, SyncPaths};
use advent_sync::{pipeline, SyncError, WriteResult};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

/// Workspace with a runner, `tools/x`, a stale `solutions/2022/01` member and
/// two current days under `solutions/2023`.
fn workspace() -> (TempDir, SyncPaths) {
    let ws = TempDir::new().expect("tempdir");
    let root = ws.path();
    write(
        &root.join("Cargo.toml"),
        "[workspace]\nresolver = \"2\"\nmembers = [\"tools/x\", \"solutions/2022/01\", \"library\"]\n",
    );
    write(
        &root.join("runner").join("Cargo.toml"),
        "[package]\nname = \"runner\"\nversion = \"0.1.0\"\n",
    );
    write(
        &root.join("solutions/2023/01/Cargo.toml"),
        "[package]\nname = \"d1\"\nversion = \"0.1.0\"\n\n[package.metadata.advent.part1]\nfun = \"solve\"\nkind = \"numeric\"\n",
    );
    write(
        &root.join("solutions/2023/02/Cargo.toml"),
        "[package]\nname = \"d2\"\nversion = \"0.1.0\"\n",
    );
    let paths = SyncPaths::with_defaults(root);
    (ws, paths)
}

fn members(paths: &SyncPaths) -> Vec<String> {
    let table: toml::Table = fs::read_to_string(&paths.workspace_manifest)
        .expect("read")
        .parse()
        .expect("parse");
    table["workspace"]["members"]
        .as_array()
        .expect("members")
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn full_run_generates_library_and_members() {
    let (_ws, paths) = workspace();
    let report = pipeline::run(&paths, false).expect("run");

    assert_eq!(report.years, 1);
    assert_eq!(report.days, 2);
    assert_eq!(report.parts, 1);
    assert_eq!(report.writes.len(), 3);
    assert!(report.writes.iter().all(|w| matches!(w, WriteResult::Written { .. })));

    let lib_manifest: toml::Table = fs::read_to_string(paths.library.join("Cargo.toml"))
        .expect("library manifest")
        .parse()
        .expect("toml");
    let deps = lib_manifest["dependencies"].as_table().expect("deps");
    assert!(deps.contains_key("d1"));
    assert!(deps.contains_key("d2"));
    assert_eq!(deps["runner"]["path"].as_str(), Some("../runner"));

    let main = fs::read_to_string(paths.library.join("src").join("main.rs")).expect("main.rs");
    assert!(main.contains("add_year(2023,"));
    assert!(main.contains("::runner::Part::Numeric(::d1::solve)"));
    assert_eq!(main.matches("add_part_").count(), 1);

    let mut got = members(&paths);
    let tail = got.split_off(1);
    assert_eq!(got, ["tools/x"]);
    assert_eq!(tail.len(), 3);
    assert!(tail.contains(&"solutions/2023/01".to_string()));
    assert!(tail.contains(&"solutions/2023/02".to_string()));
    assert_eq!(tail.last().map(String::as_str), Some("library"));
    assert!(!tail.contains(&"solutions/2022/01".to_string()));

    let resolver = fs::read_to_string(&paths.workspace_manifest).expect("read");
    assert!(resolver.contains("resolver = \"2\""));
}

#[test]
fn second_run_is_byte_identical_and_writes_nothing() {
    let (_ws, paths) = workspace();
    pipeline::run(&paths, false).expect("first run");
    let snapshot: Vec<String> = [
        paths.workspace_manifest.clone(),
        paths.library.join("Cargo.toml"),
        paths.library.join("src").join("main.rs"),
    ]
    .iter()
    .map(|p| fs::read_to_string(p).expect("read"))
    .collect();

    let report = pipeline::run(&paths, false).expect("second run");
    assert!(report.writes.iter().all(|w| !w.is_change()), "{:?}", report.writes);
    assert_eq!(fs::read_to_string(&paths.workspace_manifest).unwrap(), snapshot[0]);
    assert_eq!(fs::read_to_string(paths.library.join("Cargo.toml")).unwrap(), snapshot[1]);
    assert_eq!(
        fs::read_to_string(paths.library.join("src").join("main.rs")).unwrap(),
        snapshot[2]
    );
}

#[test]
fn dry_run_writes_nothing() {
    let (_ws, paths) = workspace();
    let before = fs::read_to_string(&paths.workspace_manifest).unwrap();
    let report = pipeline::run(&paths, true).expect("dry run");
    assert!(report.writes.iter().all(|w| matches!(w, WriteResult::WouldWrite { .. })));
    assert!(!paths.library.exists());
    assert_eq!(fs::read_to_string(&paths.workspace_manifest).unwrap(), before);
}

#[test]
fn diff_lists_changes_then_nothing_after_run() {
    let (_ws, paths) = workspace();
    let diffs = pipeline::diff(&paths).expect("diff");
    assert_eq!(diffs.len(), 3);
    assert!(diffs.iter().any(|d| d.unified_diff.contains("+++ b/library/src/main.rs")));
    assert!(!paths.library.exists(), "diff must not write");

    pipeline::run(&paths, false).expect("run");
    assert!(pipeline::diff(&paths).expect("diff").is_empty());
}

#[test]
fn missing_runner_aborts_before_writing() {
    let (_ws, paths) = workspace();
    fs::remove_file(paths.runner.join("Cargo.toml")).expect("rm");
    let before = fs::read_to_string(&paths.workspace_manifest).unwrap();

    let err = pipeline::run(&paths, false).unwrap_err();
    assert!(
        matches!(err, SyncError::Manifest(ManifestError::NotFound { .. })),
        "got: {err}"
    );
    assert!(!paths.library.exists());
    assert_eq!(fs::read_to_string(&paths.workspace_manifest).unwrap(), before);
}

#[test]
fn malformed_workspace_manifest_is_fatal() {
    let (_ws, paths) = workspace();
    fs::write(&paths.workspace_manifest, "[workspace\n").unwrap();
    let err = pipeline::run(&paths, false).unwrap_err();
    assert!(
        matches!(err, SyncError::Manifest(ManifestError::Parse { .. })),
        "got: {err}"
    );
    assert!(!paths.library.exists());
}

#[test]
fn misdeclared_part_aborts_and_keeps_previous_output() {
    let (_ws, paths) = workspace();
    pipeline::run(&paths, false).expect("first run");
    let main_before = fs::read_to_string(paths.library.join("src").join("main.rs")).unwrap();

    write(
        &paths.solutions.join("2023/03/Cargo.toml"),
        "[package]\nname = \"d3\"\n\n[package.metadata.advent.part1]\nfun = \"solve\"\nspeed = \"fast\"\n",
    );
    let err = pipeline::run(&paths, false).unwrap_err();
    assert!(matches!(err, SyncError::Detect(_)), "got: {err}");
    assert_eq!(
        fs::read_to_string(paths.library.join("src").join("main.rs")).unwrap(),
        main_before
    );
}

#[test]
fn unreadable_day_is_skipped_not_fatal() {
    let (_ws, paths) = workspace();
    write(&paths.solutions.join("2023/04/Cargo.toml"), "not = [valid");
    let report = pipeline::run(&paths, false).expect("run");
    assert_eq!(report.days, 2);
    assert!(!members(&paths).contains(&"solutions/2023/04".to_string()));
}

#[test]
fn removed_day_disappears_from_members_and_library() {
    let (_ws, paths) = workspace();
    pipeline::run(&paths, false).expect("first run");
    fs::remove_dir_all(paths.solutions.join("2023/02")).unwrap();

    let report = pipeline::run(&paths, false).expect("second run");
    assert_eq!(report.days, 1);
    assert_eq!(members(&paths), ["tools/x", "solutions/2023/01", "library"]);
    let lib = fs::read_to_string(paths.library.join("Cargo.toml")).unwrap();
    assert!(!lib.contains("d2"));
}
