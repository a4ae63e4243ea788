//! # Line Editor Module
//!
//! This module rewrites copyright notices in plain-text files, one line at
//! a time. It is the fallback strategy for file kinds without a structural
//! parser: matching is anchored at the first byte of each line, and a
//! matched line is replaced wholesale with the rewritten notice (only the
//! line terminator survives). This is a more invasive edit than the
//! structural editor's comment-token splice.

use super::EditOutcome;
use crate::rewriter::NoticeRewriter;

/// Line-oriented editor for plain-text files.
pub struct LineEditor<'a> {
  rewriter: &'a NoticeRewriter<'a>,
}

impl<'a> LineEditor<'a> {
  /// Creates an editor backed by the run's rewriter.
  pub const fn new(rewriter: &'a NoticeRewriter<'a>) -> Self {
    Self { rewriter }
  }

  /// Rewrites matching lines in `content`, passing every other line through
  /// unchanged. Line terminators (`\n` or `\r\n`) are preserved verbatim,
  /// including a missing terminator on the final line.
  pub fn edit(&self, content: &str) -> EditOutcome {
    let mut edited = String::with_capacity(content.len());
    let mut changed = false;

    for segment in content.split_inclusive('\n') {
      let (line, terminator) = split_terminator(segment);
      let outcome = self.rewriter.rewrite(line);
      if outcome.changed {
        changed = true;
        edited.push_str(&outcome.text);
      } else {
        edited.push_str(line);
      }
      edited.push_str(terminator);
    }

    EditOutcome { changed, content: edited }
  }
}

/// Splits a line segment into its content and its terminator.
fn split_terminator(segment: &str) -> (&str, &str) {
  if let Some(line) = segment.strip_suffix("\r\n") {
    (line, "\r\n")
  } else if let Some(line) = segment.strip_suffix('\n') {
    (line, "\n")
  } else {
    (segment, "")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::patterns::PatternSet;

  fn edit(content: &str, owner: &str, year: i32) -> EditOutcome {
    let patterns = PatternSet::new(owner, None).unwrap();
    let rewriter = NoticeRewriter::new(&patterns, year, owner);
    LineEditor::new(&rewriter).edit(content)
  }

  #[test]
  fn test_matching_line_replaced() {
    let content = "Copyright 2018 Acme, Inc.\n\nSome notes.\n";
    let outcome = edit(content, "Acme, Inc.", 2025);
    assert!(outcome.changed);
    assert_eq!(outcome.content, "Copyright 2018-2025 Acme, Inc.\n\nSome notes.\n");
  }

  #[test]
  fn test_range_line_extended() {
    let content = "Copyright 2018-2022 Acme\n";
    let outcome = edit(content, "Acme", 2025);
    assert_eq!(outcome.content, "Copyright 2018-2025 Acme\n");
  }

  #[test]
  fn test_non_matching_lines_pass_through() {
    let content = "README\n=====\n\nNothing to see here.\n";
    let outcome = edit(content, "Acme", 2025);
    assert!(!outcome.changed);
    assert_eq!(outcome.content, content);
  }

  #[test]
  fn test_indented_notice_does_not_match() {
    // Matching is anchored at the first byte of the line.
    let content = "    Copyright 2018 Acme\n";
    let outcome = edit(content, "Acme", 2025);
    assert!(!outcome.changed);
    assert_eq!(outcome.content, content);
  }

  #[test]
  fn test_missing_final_newline_preserved() {
    let content = "Copyright 2018 Acme";
    let outcome = edit(content, "Acme", 2025);
    assert_eq!(outcome.content, "Copyright 2018-2025 Acme");
  }

  #[test]
  fn test_crlf_terminator_preserved() {
    let content = "Copyright 2018 Acme\r\nnext line\r\n";
    let outcome = edit(content, "Acme", 2025);
    assert_eq!(outcome.content, "Copyright 2018-2025 Acme\r\nnext line\r\n");
  }

  #[test]
  fn test_whole_line_replaced_on_match() {
    // Text after the notice on a matched line is not preserved.
    let content = "Copyright 2018 Acme -- draft, do not distribute\n";
    let outcome = edit(content, "Acme", 2025);
    assert_eq!(outcome.content, "Copyright 2018-2025 Acme\n");
  }

  #[test]
  fn test_already_current_line_untouched() {
    let content = "Copyright 2018-2025 Acme\n";
    let outcome = edit(content, "Acme", 2025);
    assert!(!outcome.changed);
  }

  #[test]
  fn test_empty_content() {
    let outcome = edit("", "Acme", 2025);
    assert!(!outcome.changed);
    assert_eq!(outcome.content, "");
  }
}
