//! # Rewriter Module
//!
//! This module produces the replacement text for a matched copyright
//! notice. The rewriter is a pure function of its inputs: it never touches
//! the filesystem and never fabricates a notice where none matched.

use std::borrow::Cow;

use crate::patterns::PatternSet;

/// The result of offering a piece of text to the rewriter.
#[derive(Debug, PartialEq, Eq)]
pub struct RewriteOutcome<'a> {
  /// `true` only when `text` differs from the input. Rewriting an
  /// already-current notice in the same calendar year reports no change.
  pub changed: bool,

  /// The replacement text, or the input borrowed unchanged when no pattern
  /// matched.
  pub text: Cow<'a, str>,
}

/// Rewrites recognized copyright notices to extend their year range.
///
/// Borrows the run's shared [`PatternSet`]; one rewriter can serve any
/// number of comments or lines within a file task.
pub struct NoticeRewriter<'a> {
  patterns: &'a PatternSet,
  current_year: i32,
  owner: &'a str,
}

impl<'a> NoticeRewriter<'a> {
  /// Creates a rewriter for one run.
  ///
  /// `owner` is the run-configured owner string, used as the literal
  /// replacement owner whenever the custom pattern matched (the custom
  /// pattern captures no owner group).
  pub const fn new(patterns: &'a PatternSet, current_year: i32, owner: &'a str) -> Self {
    Self {
      patterns,
      current_year,
      owner,
    }
  }

  /// Rewrites `text` if it carries a recognized notice.
  ///
  /// On a match the replacement is `Copyright <start>-<current_year> <owner>`:
  /// a single-year notice is promoted to a range, and an existing range is
  /// extended from its original start year (the prior end year is
  /// discarded). Text trailing the recognized notice is not preserved.
  ///
  /// Without a match the input is returned borrowed and unchanged.
  pub fn rewrite<'t>(&self, text: &'t str) -> RewriteOutcome<'t> {
    let Some(m) = self.patterns.match_notice(text) else {
      return RewriteOutcome {
        changed: false,
        text: Cow::Borrowed(text),
      };
    };

    let owner = m.owner.as_deref().unwrap_or(self.owner);
    let replacement = format!("Copyright {}-{} {}", m.start_year, self.current_year, owner);

    if replacement == text {
      RewriteOutcome {
        changed: false,
        text: Cow::Borrowed(text),
      }
    } else {
      RewriteOutcome {
        changed: true,
        text: Cow::Owned(replacement),
      }
    }
  }
}
