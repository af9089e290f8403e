//! Smoke tests for the hts binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn process_rejects_missing_input() {
    let mut cmd = Command::cargo_bin("hts").unwrap();
    cmd.arg("process")
        .arg("does-not-exist.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_requires_a_table_dump() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.pdf");
    std::fs::write(&input, b"%PDF-1.4").unwrap();

    let mut cmd = Command::cargo_bin("hts").unwrap();
    cmd.arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Table dump not found"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("hts").unwrap();
    cmd.current_dir(dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload_dir"))
        .stdout(predicate::str::contains("allowed_extensions"));
}

#[test]
fn config_init_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut cmd = Command::cargo_bin("hts").unwrap();
    cmd.arg("config")
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("on_collision"));
}

#[test]
fn list_handles_an_empty_folder() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("hts").unwrap();
    cmd.arg("list")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No report PDFs found"));
}
