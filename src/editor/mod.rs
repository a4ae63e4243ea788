//! # Editor Module
//!
//! This module contains the two rewrite strategies:
//! - [`StructuralEditor`] - format-preserving rewrite of comment tokens in
//!   Python sources, driven by a tree-sitter parse
//! - [`LineEditor`] - line-oriented rewrite for plain-text files
//!
//! Both strategies share the [`NoticeRewriter`] and differ only in how they
//! locate candidate text and how much of the surrounding bytes they promise
//! to preserve.
//!
//! [`NoticeRewriter`]: crate::rewriter::NoticeRewriter

mod line;
mod structural;

pub use line::LineEditor;
pub use structural::StructuralEditor;

/// The result of editing one file's content.
#[derive(Debug, PartialEq, Eq)]
pub struct EditOutcome {
  /// `true` when `content` differs from the input.
  pub changed: bool,

  /// The edited content. Equal to the input when nothing matched.
  pub content: String,
}

/// The closed set of comment-bearing token shapes the structural editor
/// visits. The distinction is structural only; both kinds are rewritten the
/// same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
  /// A comment that is the only content on its line.
  Standalone,
  /// A comment trailing code on the same line.
  Trailing,
}
