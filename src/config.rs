//! # Config Module
//!
//! This module defines the immutable run configuration. It is built once
//! from CLI arguments, then shared read-only with every component for the
//! duration of the run; there is no process-wide mutable state.

use crate::patterns::PatternSet;
use crate::rewriter::NoticeRewriter;

/// Extensions scanned when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py", "txt", "md"];

/// Default cap on concurrently in-flight file tasks. Keeps the fan-out
/// clear of OS file-descriptor limits on large trees.
pub const DEFAULT_CONCURRENCY: usize = 64;

/// Immutable configuration for one run.
#[derive(Debug)]
pub struct RunConfig {
  /// Owner string: seeds the default patterns and is the literal
  /// replacement owner when the custom pattern matched.
  pub owner: String,

  /// The year notices are extended to.
  pub current_year: i32,

  /// The compiled notice patterns, shared by both editors.
  pub patterns: PatternSet,

  /// Included file extensions, lowercase, without the dot.
  pub extensions: Vec<String>,

  /// Maximum number of file tasks in flight at once.
  pub concurrency: usize,
}

impl RunConfig {
  /// Borrows a rewriter over this configuration.
  pub fn rewriter(&self) -> NoticeRewriter<'_> {
    NoticeRewriter::new(&self.patterns, self.current_year, &self.owner)
  }
}
