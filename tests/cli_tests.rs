//! End-to-end tests running the cprt binary.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{current_year, setup_mixed_tree, write_file};

fn cprt() -> Command {
  Command::cargo_bin("cprt").expect("binary built")
}

#[test]
fn test_updates_mixed_tree() {
  let owner = "Acme, Inc.";
  let dir = setup_mixed_tree(owner).unwrap();
  let year = current_year();

  cprt()
    .args(["--company", owner, "-e", "py", "-e", "txt"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated copyright notice in: ").count(2));

  assert_eq!(
    fs::read_to_string(dir.path().join("a.py")).unwrap(),
    format!("x = 1  # Copyright 2018-{year} {owner}\n")
  );
  assert_eq!(
    fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
    format!("Copyright 2018-{year} {owner}\n")
  );
  assert_eq!(
    fs::read_to_string(dir.path().join("b.py")).unwrap(),
    format!("s = \"# Copyright 2018 {owner}\"\n")
  );
}

#[test]
fn test_empty_directory_exits_zero_with_no_output() {
  let dir = tempfile::tempdir().unwrap();

  cprt()
    .args(["--company", "Acme"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_custom_regex_fails_fast() {
  let dir = tempfile::tempdir().unwrap();
  write_file(dir.path(), "notes.txt", "Copyright 2018 Acme\n").unwrap();

  cprt()
    .args(["--pattern", r"^Copyright (\d{4}", "--company", "Acme", "-e", "txt"])
    .arg(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid custom regex pattern:"));

  // No file may be touched on a pre-flight failure.
  assert_eq!(
    fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
    "Copyright 2018 Acme\n"
  );
}

#[test]
fn test_custom_regex_without_capture_group_fails_fast() {
  let dir = tempfile::tempdir().unwrap();

  cprt()
    .args(["--pattern", r"^Copyright \d{4}", "--company", "Acme"])
    .arg(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("capture group"));
}

#[test]
fn test_missing_directory_fails() {
  cprt()
    .args(["--company", "Acme"])
    .arg("/no/such/directory")
    .assert()
    .failure()
    .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_per_file_errors_do_not_change_exit_code() {
  let owner = "Acme";
  let dir = tempfile::tempdir().unwrap();
  let year = current_year();
  write_file(dir.path(), "bad.py", "def broken(:\n").unwrap();
  write_file(dir.path(), "good.txt", "Copyright 2018 Acme\n").unwrap();

  cprt()
    .args(["--company", owner, "-e", "py", "-e", "txt"])
    .arg(dir.path())
    .assert()
    .success()
    .stderr(predicate::str::contains("Error processing"));

  assert_eq!(
    fs::read_to_string(dir.path().join("good.txt")).unwrap(),
    format!("Copyright 2018-{year} Acme\n")
  );
}

#[test]
fn test_default_extensions_cover_md() {
  let dir = tempfile::tempdir().unwrap();
  let year = current_year();
  write_file(dir.path(), "README.md", "Copyright 2019 Acme\n").unwrap();

  cprt().args(["--company", "Acme"]).arg(dir.path()).assert().success();

  assert_eq!(
    fs::read_to_string(dir.path().join("README.md")).unwrap(),
    format!("Copyright 2019-{year} Acme\n")
  );
}

#[test]
fn test_quiet_suppresses_update_lines() {
  let owner = "Acme";
  let dir = tempfile::tempdir().unwrap();
  write_file(dir.path(), "notes.txt", "Copyright 2018 Acme\n").unwrap();

  cprt()
    .args(["--quiet", "--company", owner, "-e", "txt"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}
