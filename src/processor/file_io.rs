//! # File I/O Module
//!
//! This module provides the async file operations for the processor. Reads
//! and writes are the suspension points of each file task; everything in
//! between runs synchronously on the single-threaded scheduler.

use std::path::Path;

use anyhow::{Result, anyhow};
use tokio::fs;

/// Async file I/O for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads a file as UTF-8 text.
  ///
  /// # Errors
  ///
  /// Returns an error when the file cannot be opened or read, or when its
  /// contents are not valid UTF-8. The caller reports the error and skips
  /// the file.
  pub async fn read_to_string(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    String::from_utf8(bytes).map_err(|e| anyhow!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()))
  }

  /// Writes content back in place.
  pub async fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).await?;
    Ok(())
  }
}
