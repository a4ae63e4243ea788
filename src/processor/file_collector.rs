//! # File Collector Module
//!
//! This module enumerates the files a run will touch: a recursive walk of
//! the target directory, filtered by the configured extension set and
//! classified by which editor handles each file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Which rewrite strategy a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  /// Python source, handled by the structural editor.
  Source,
  /// Any other included extension, handled by the line editor.
  Text,
}

/// Collects and classifies the files under a directory.
pub struct FileCollector {
  /// Included extensions, lowercase, without the dot.
  extensions: HashSet<String>,
}

impl FileCollector {
  /// Creates a collector for the given extension set.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let extensions = extensions
      .into_iter()
      .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
      .collect();
    Self { extensions }
  }

  /// Walks `dir` recursively and returns every included file with its
  /// kind. Symlinks are skipped; unreadable directory entries are reported
  /// to stderr and do not stop the walk.
  pub fn collect(&self, dir: &Path) -> Result<Vec<(PathBuf, FileKind)>> {
    debug!("Scanning directory: {}", dir.display());
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          eprintln!("Error reading directory entry: {e}");
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();
      match self.classify(&path) {
        Some(kind) => files.push((path, kind)),
        None => trace!("Skipping: {} (extension not included)", path.display()),
      }
    }

    debug!("Found {} files to process", files.len());
    Ok(files)
  }

  /// Returns the file's kind when its extension is included, `None`
  /// otherwise. `.py` always routes to the structural editor.
  pub fn classify(&self, path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if !self.extensions.contains(&ext) {
      return None;
    }
    if ext == "py" { Some(FileKind::Source) } else { Some(FileKind::Text) }
  }
}
