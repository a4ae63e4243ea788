//! # Patterns Module
//!
//! This module builds and holds the regexes that recognize a copyright
//! notice and extract its start year and owner.
//!
//! Two modes exist, and exactly one is active per run:
//! - Default mode derives a range-form and a single-form regex from the
//!   escaped owner literal.
//! - Custom mode uses a single user-supplied regex verbatim for both file
//!   kinds; its first capture group is interpreted as the start year.

use regex::Regex;
use thiserror::Error;

/// Errors raised while constructing a [`PatternSet`].
///
/// These are configuration errors: they are fatal, surface before any file
/// is touched, and never fall back to the default patterns.
#[derive(Debug, Error)]
pub enum PatternError {
  /// The custom regex failed to compile.
  #[error("{0}")]
  Invalid(#[from] regex::Error),

  /// The custom regex compiled but has no capture group for the start year.
  #[error("pattern must contain a capture group for the start year")]
  MissingCaptureGroup,
}

/// The result of matching a notice: the captured start year and, when the
/// default patterns matched, the captured owner.
///
/// The start year is kept as captured; no numeric range validation is
/// performed, so a start year later than the current year is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMatch {
  /// Four-digit start year, as captured.
  pub start_year: String,

  /// Owner captured by the default patterns. `None` in custom mode, which
  /// captures no owner group.
  pub owner: Option<String>,
}

/// The compiled patterns that recognize an existing copyright notice.
///
/// Immutable after construction and shared read-only across all concurrent
/// file tasks for one run.
#[derive(Debug)]
pub enum PatternSet {
  /// Owner-derived pattern pair. The range form must be tried before the
  /// single form so a range notice is never mis-parsed as a single one.
  Default {
    /// Matches `Copyright <Y1>-<Y2> <owner>` at the start of the text.
    range: Regex,
    /// Matches `Copyright <Y1> <owner>` at the start of the text.
    single: Regex,
  },

  /// User-supplied regex, applied verbatim with group 1 as the start year.
  Custom(Regex),
}

impl PatternSet {
  /// Builds the pattern set for a run.
  ///
  /// When `custom` is given it fully overrides the default pair for both
  /// the structural and the line editor.
  ///
  /// # Errors
  ///
  /// Returns a [`PatternError`] if the custom regex fails to compile or
  /// contains no capture group.
  pub fn new(owner: &str, custom: Option<&str>) -> Result<Self, PatternError> {
    if let Some(pattern) = custom {
      let regex = Regex::new(pattern)?;
      // captures_len counts the implicit whole-match group 0
      if regex.captures_len() < 2 {
        return Err(PatternError::MissingCaptureGroup);
      }
      return Ok(Self::Custom(regex));
    }

    let escaped = regex::escape(owner);
    let range = Regex::new(&format!(r"^Copyright (\d{{4}})-(\d{{4}}) ({escaped})"))?;
    let single = Regex::new(&format!(r"^Copyright (\d{{4}}) ({escaped})"))?;
    Ok(Self::Default { range, single })
  }

  /// Matches `text` against the active patterns, anchored at the start.
  ///
  /// Callers are expected to pass normalized text: comment markers and
  /// leading whitespace already stripped, trailing whitespace removed.
  /// Substring matches elsewhere in the text are ignored by design.
  pub fn match_notice(&self, text: &str) -> Option<NoticeMatch> {
    match self {
      Self::Default { range, single } => {
        if let Some(caps) = range.captures(text) {
          return Some(NoticeMatch {
            start_year: caps[1].to_owned(),
            owner: Some(caps[3].to_owned()),
          });
        }
        single.captures(text).map(|caps| NoticeMatch {
          start_year: caps[1].to_owned(),
          owner: Some(caps[2].to_owned()),
        })
      }
      Self::Custom(regex) => {
        // The user regex is taken verbatim, so anchoring is enforced here:
        // the leftmost match must begin at byte 0.
        let caps = regex.captures(text)?;
        if caps.get(0)?.start() != 0 {
          return None;
        }
        caps.get(1).map(|start| NoticeMatch {
          start_year: start.as_str().to_owned(),
          owner: None,
        })
      }
    }
  }

  /// Returns `true` when a user-supplied pattern is active.
  pub const fn is_custom(&self) -> bool {
    matches!(self, Self::Custom(_))
  }
}
