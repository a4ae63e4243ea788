#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Datelike;
use tempfile::TempDir;

/// The year rewritten notices are expected to end with.
pub fn current_year() -> i32 {
  chrono::Local::now().year()
}

/// Writes a file under `dir`, creating parent directories as needed.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Creates the canonical mixed-tree fixture:
/// - `a.py` with a trailing notice comment
/// - `notes.txt` with a single-year notice line
/// - `b.py` with a notice-shaped string literal that must stay untouched
pub fn setup_mixed_tree(owner: &str) -> Result<TempDir> {
  let dir = tempfile::tempdir()?;
  write_file(
    dir.path(),
    "a.py",
    &format!("x = 1  # Copyright 2018-2022 {owner}\n"),
  )?;
  write_file(dir.path(), "notes.txt", &format!("Copyright 2018 {owner}\n"))?;
  write_file(
    dir.path(),
    "b.py",
    &format!("s = \"# Copyright 2018 {owner}\"\n"),
  )?;
  Ok(dir)
}
