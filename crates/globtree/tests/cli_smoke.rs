use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("globtree")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn ls_prints_json_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("src")).expect("mkdir");
    fs::write(temp.path().join("src/main.rs"), b"fn main() {}").expect("write");

    Command::cargo_bin("globtree")
        .expect("binary exists")
        .args(["ls", "--root"])
        .arg(temp.path())
        .args(["--glob", "**/*.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"src\""))
        .stdout(predicate::str::contains("\"type\": \"folder\""))
        .stdout(predicate::str::contains("\"main.rs\""));
}

#[test]
fn resolve_prints_absolute_path() {
    let temp = tempfile::tempdir().expect("tempdir");

    Command::cargo_bin("globtree")
        .expect("binary exists")
        .args(["resolve", "--root"])
        .arg(temp.path())
        .args(["--file-count", "single", "a/b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a/b.txt"));
}

#[test]
fn resolve_rejects_escape_attempts() {
    let temp = tempfile::tempdir().expect("tempdir");

    Command::cargo_bin("globtree")
        .expect("binary exists")
        .args(["resolve", "--root"])
        .arg(temp.path())
        .args(["--file-count", "single", "../../etc/passwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside of root"));
}

#[test]
fn resolve_rejects_too_many_in_single_mode() {
    let temp = tempfile::tempdir().expect("tempdir");

    Command::cargo_bin("globtree")
        .expect("binary exists")
        .args(["resolve", "--root"])
        .arg(temp.path())
        .args(["--file-count", "single", "a.txt", "b.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one selection"));
}

#[test]
fn segments_round_trip() {
    let temp = tempfile::tempdir().expect("tempdir");
    let absolute = temp.path().join("docs/intro.md");

    Command::cargo_bin("globtree")
        .expect("binary exists")
        .args(["segments", "--root"])
        .arg(temp.path())
        .arg(absolute)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"docs\""))
        .stdout(predicate::str::contains("\"intro.md\""));
}
