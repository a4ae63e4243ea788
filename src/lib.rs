//! # cprt
//!
//! A tool that updates copyright notices in files within a directory tree,
//! extending each notice's year range to the current year without
//! disturbing any other content or formatting.
//!
//! Two rewrite strategies are paired:
//!
//! * A format-preserving structural rewrite for Python sources: the file is
//!   parsed with tree-sitter and only comment tokens are ever replaced, so
//!   a notice-shaped string literal is left alone and every other byte of
//!   the file survives unchanged.
//! * A line-oriented rewrite for plain-text files, where a matching line is
//!   replaced with the rewritten notice.
//!
//! Files are processed concurrently (one async task per file on a
//! single-threaded scheduler), modified in place only when content changed,
//! and per-file failures never abort the run.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use cprt::config::RunConfig;
//! use cprt::patterns::PatternSet;
//! use cprt::processor::Processor;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RunConfig {
//!         owner: "Acme, Inc.".to_owned(),
//!         current_year: 2025,
//!         patterns: PatternSet::new("Acme, Inc.", None)?,
//!         extensions: vec!["py".to_owned(), "txt".to_owned()],
//!         concurrency: cprt::config::DEFAULT_CONCURRENCY,
//!     };
//!
//!     let summary = Processor::new(config).run(Path::new("src")).await?;
//!     println!("updated {} files", summary.files_updated);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`patterns`] - notice recognition and start-year extraction
//! * [`rewriter`] - replacement-text production
//! * [`editor`] - the structural and line rewrite strategies
//! * [`processor`] - file enumeration, dispatch and write-back
//! * [`logging`] - logging utilities for user-facing output

pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod patterns;
pub mod processor;
pub mod rewriter;
