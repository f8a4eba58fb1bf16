//! Runs the `advent` binary against temporary workspaces.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn workspace() -> TempDir {
    let ws = TempDir::new().expect("tempdir");
    let root = ws.path();
    write(
        &root.join("Cargo.toml"),
        "[workspace]\nresolver = \"2\"\nmembers = [\"runner\"]\n",
    );
    write(
        &root.join("runner/Cargo.toml"),
        "[package]\nname = \"runner\"\nversion = \"0.1.0\"\n",
    );
    write(
        &root.join("solutions/2021/01/Cargo.toml"),
        "[package]\nname = \"sonar\"\nversion = \"0.1.0\"\n\n\
         [package.metadata.advent.part1]\nfun = \"count_increases\"\n\n\
         [package.metadata.advent.part2]\nfun = \"count_windows\"\nlong_running = true\n",
    );
    ws
}

fn advent(ws: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("advent").expect("advent binary");
    cmd.arg("--workspace")
        .arg(ws.path().join("Cargo.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn update_generates_library_and_members() {
    let ws = workspace();
    advent(&ws)
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 day(s) across 1 year(s), 2 part(s)"));

    let main = fs::read_to_string(ws.path().join("library/src/main.rs")).unwrap();
    assert!(main.contains("::runner::Part::Numeric(::sonar::count_windows)"));

    let table: toml::Table = fs::read_to_string(ws.path().join("Cargo.toml"))
        .unwrap()
        .parse()
        .unwrap();
    let members: Vec<&str> = table["workspace"]["members"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(members, ["runner", "solutions/2021/01", "library"]);
}

#[test]
fn update_dry_run_writes_nothing() {
    let ws = workspace();
    advent(&ws)
        .args(["update", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run]"));
    assert!(!ws.path().join("library").exists());
}

#[test]
fn diff_reports_up_to_date_after_update() {
    let ws = workspace();
    advent(&ws)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("+++ b/library/Cargo.toml"));
    advent(&ws).arg("update").assert().success();
    advent(&ws)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn init_scaffolds_and_registers_day() {
    let ws = workspace();
    advent(&ws).args(["init", "2021", "2"]).assert().success();

    assert!(ws.path().join("solutions/2021/2/src/lib.rs").exists());
    let main = fs::read_to_string(ws.path().join("library/src/main.rs")).unwrap();
    assert!(main.contains("::aoc_2021_2::part1"));
}

#[test]
fn init_rejects_existing_day() {
    let ws = workspace();
    advent(&ws)
        .args(["init", "2021", "1", "--no-update"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2021.1"));
}

#[test]
fn missing_runner_fails() {
    let ws = workspace();
    fs::remove_dir_all(ws.path().join("runner")).unwrap();
    advent(&ws).arg("update").assert().failure();
    assert!(!ws.path().join("library").exists());
}

#[cfg(unix)]
#[test]
fn passthrough_forwards_cargo_exit_code() {
    let ws = workspace();
    advent(&ws)
        .args(["--cargo", "true", "build"])
        .assert()
        .success();
    assert!(ws.path().join("library/src/main.rs").exists());

    advent(&ws)
        .args(["--cargo", "false", "build"])
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn passthrough_hands_arguments_over_verbatim() {
    let ws = workspace();
    advent(&ws)
        .args(["--cargo", "echo", "build", "--release", "-v", "--workspace", "x"])
        .assert()
        .success()
        .stdout("build --release -v --workspace x\n");
}

#[cfg(unix)]
#[test]
fn own_command_names_are_not_forwarded() {
    let ws = workspace();
    advent(&ws)
        .args(["--cargo", "echo", "update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 day(s)"))
        .stdout(predicate::str::contains("update\n").not());
}
