//! # Processor Module
//!
//! This module is the driver: it enumerates files, fans out one async task
//! per file, routes each file to the structural or line editor by kind, and
//! writes results back only when content changed.
//!
//! The module is organized into submodules:
//! - [`file_collector`] - directory traversal and editor routing
//! - [`file_io`] - async file reading and writing
//!
//! Per-file errors are caught at the task boundary, reported to stderr and
//! never propagate to the fan-in join; only pre-flight configuration errors
//! abort a run.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

pub use file_collector::{FileCollector, FileKind};
pub use file_io::FileIO;
use anyhow::Result;
use futures::future;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::config::RunConfig;
use crate::editor::{EditOutcome, LineEditor, StructuralEditor};
use crate::info_log;
use crate::rewriter::NoticeRewriter;

/// Counts for one completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Files matched by the extension filter and scheduled.
  pub files_scanned: usize,
  /// Files whose content changed and was written back.
  pub files_updated: usize,
  /// Files skipped because of a read, parse or write error.
  pub files_failed: usize,
}

/// Terminal state of one file task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileStatus {
  Updated,
  Unchanged,
  Failed,
}

/// Transient state for one file while its task runs. Owned exclusively by
/// that task from open to write-back; never persisted beyond the run.
struct FileRecord {
  path: PathBuf,
  kind: FileKind,
  original: String,
}

impl FileRecord {
  /// Runs the editor matching this file's kind over its content.
  fn edit(&self, rewriter: &NoticeRewriter<'_>) -> Result<EditOutcome> {
    match self.kind {
      FileKind::Source => StructuralEditor::new(rewriter).edit(&self.original),
      FileKind::Text => Ok(LineEditor::new(rewriter).edit(&self.original)),
    }
  }
}

/// Drives a run over a directory tree.
///
/// The `Processor` holds the immutable [`RunConfig`] and shares it
/// read-only across all concurrent file tasks. Tasks are launched together
/// and awaited together; completion order is unspecified.
pub struct Processor {
  config: RunConfig,
}

impl Processor {
  /// Creates a processor for one run.
  pub const fn new(config: RunConfig) -> Self {
    Self { config }
  }

  /// The run configuration.
  pub const fn config(&self) -> &RunConfig {
    &self.config
  }

  /// Processes every included file under `directory`.
  ///
  /// One task is created per discovered file; a semaphore caps how many
  /// are in flight at once. Each task suspends at its read and write
  /// boundaries only, so the whole run cooperates on a single-threaded
  /// scheduler.
  ///
  /// # Errors
  ///
  /// Returns an error only when directory traversal itself fails. Per-file
  /// failures are reported to stderr and counted in the summary instead.
  pub async fn run(&self, directory: &Path) -> Result<RunSummary> {
    let collector = FileCollector::new(&self.config.extensions);
    let files = collector.collect(directory)?;
    let files_scanned = files.len();

    // A zero limit would deadlock the fan-out; treat it as one.
    let semaphore = Semaphore::new(self.config.concurrency.max(1));
    let tasks = files.into_iter().map(|(path, kind)| {
      let semaphore = &semaphore;
      async move {
        let _permit = match semaphore.acquire().await {
          Ok(permit) => permit,
          // The semaphore is never closed during a run.
          Err(_) => return FileStatus::Failed,
        };
        self.process_file(path, kind).await
      }
    });

    let statuses = future::join_all(tasks).await;

    let summary = RunSummary {
      files_scanned,
      files_updated: statuses.iter().filter(|s| **s == FileStatus::Updated).count(),
      files_failed: statuses.iter().filter(|s| **s == FileStatus::Failed).count(),
    };
    debug!(
      "Run complete: {} scanned, {} updated, {} failed",
      summary.files_scanned, summary.files_updated, summary.files_failed
    );
    Ok(summary)
  }

  /// Processes a single file from open to write-back.
  ///
  /// Every failure mode is handled here: the error is reported to stderr
  /// and the file is skipped without affecting the rest of the run.
  async fn process_file(&self, path: PathBuf, kind: FileKind) -> FileStatus {
    let original = match FileIO::read_to_string(&path).await {
      Ok(content) => content,
      Err(e) => {
        eprintln!("Error reading {}: {e}", path.display());
        return FileStatus::Failed;
      }
    };

    let record = FileRecord { path, kind, original };
    let rewriter = self.config.rewriter();

    let outcome = match record.edit(&rewriter) {
      Ok(outcome) => outcome,
      Err(e) => {
        eprintln!("Error processing {}: {e}", record.path.display());
        return FileStatus::Failed;
      }
    };

    if !outcome.changed {
      return FileStatus::Unchanged;
    }

    if let Err(e) = FileIO::write(&record.path, &outcome.content).await {
      eprintln!("Error writing {}: {e}", record.path.display());
      return FileStatus::Failed;
    }

    info_log!("Updated copyright notice in: {}", record.path.display());
    FileStatus::Updated
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::config::{DEFAULT_CONCURRENCY, RunConfig};
  use crate::patterns::PatternSet;

  fn config(owner: &str, year: i32, extensions: &[&str]) -> RunConfig {
    RunConfig {
      owner: owner.to_owned(),
      current_year: year,
      patterns: PatternSet::new(owner, None).unwrap(),
      extensions: extensions.iter().map(|e| (*e).to_owned()).collect(),
      concurrency: DEFAULT_CONCURRENCY,
    }
  }

  #[tokio::test]
  async fn test_run_updates_both_file_kinds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x = 1  # Copyright 2018-2022 Acme, Inc.\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "Copyright 2018 Acme, Inc.\n").unwrap();

    let processor = Processor::new(config("Acme, Inc.", 2025, &["py", "txt"]));
    let summary = processor.run(dir.path()).await.unwrap();

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_updated, 2);
    assert_eq!(summary.files_failed, 0);
    assert_eq!(
      fs::read_to_string(dir.path().join("a.py")).unwrap(),
      "x = 1  # Copyright 2018-2025 Acme, Inc.\n"
    );
    assert_eq!(
      fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
      "Copyright 2018-2025 Acme, Inc.\n"
    );
  }

  #[tokio::test]
  async fn test_string_literal_in_python_untouched() {
    let dir = tempdir().unwrap();
    let source = "s = \"# Copyright 2018 Acme, Inc.\"\n";
    fs::write(dir.path().join("b.py"), source).unwrap();

    let processor = Processor::new(config("Acme, Inc.", 2025, &["py"]));
    let summary = processor.run(dir.path()).await.unwrap();

    assert_eq!(summary.files_updated, 0);
    assert_eq!(fs::read_to_string(dir.path().join("b.py")).unwrap(), source);
  }

  #[tokio::test]
  async fn test_unchanged_files_are_not_rewritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "Copyright 2018-2025 Acme\n").unwrap();
    let mtime = fs::metadata(&path).unwrap().modified().unwrap();

    let processor = Processor::new(config("Acme", 2025, &["txt"]));
    let summary = processor.run(dir.path()).await.unwrap();

    assert_eq!(summary.files_updated, 0);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), mtime);
  }

  #[tokio::test]
  async fn test_malformed_python_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.py"), "def broken(:\n").unwrap();
    fs::write(dir.path().join("good.txt"), "Copyright 2020 Acme\n").unwrap();

    let processor = Processor::new(config("Acme", 2025, &["py", "txt"]));
    let summary = processor.run(dir.path()).await.unwrap();

    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.files_updated, 1);
    assert_eq!(
      fs::read_to_string(dir.path().join("good.txt")).unwrap(),
      "Copyright 2020-2025 Acme\n"
    );
  }

  #[tokio::test]
  async fn test_empty_directory() {
    let dir = tempdir().unwrap();
    let processor = Processor::new(config("Acme", 2025, &["py", "txt"]));
    let summary = processor.run(dir.path()).await.unwrap();
    assert_eq!(summary, RunSummary::default());
  }
}
