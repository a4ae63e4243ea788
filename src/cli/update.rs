//! # Update Command
//!
//! This module implements the one command cprt has: scan a directory and
//! extend the year range of every recognized copyright notice to the
//! current year.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_EXTENSIONS, RunConfig};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::patterns::PatternSet;
use crate::processor::Processor;
use crate::verbose_log;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
  /// Root of the recursive scan. Must exist and be a directory.
  #[arg(value_name = "DIRECTORY")]
  pub directory: PathBuf,

  /// Custom regex with one capture group for the start year.
  /// Example: "^Copyright (\d{4})"
  #[arg(long, short = 'p', value_name = "REGEX")]
  pub pattern: Option<String>,

  /// Company name to match in copyright notices and to use in rewritten
  /// text.
  #[arg(long, short = 'c', value_name = "NAME", default_value = "ANSYS, Inc.")]
  pub company: String,

  /// File extensions (without dot) to include (repeatable).
  /// Python files always go through the structural editor; everything else
  /// is rewritten line by line.
  ///
  /// [default: py, txt, md]
  #[arg(long = "ext", short = 'e', value_name = "EXT")]
  pub extensions: Vec<String>,

  /// Maximum number of files processed concurrently
  #[arg(long, value_name = "N", default_value_t = DEFAULT_CONCURRENCY)]
  pub concurrency: usize,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the update command with the given arguments.
///
/// Configuration errors (missing directory, invalid custom pattern) are
/// fatal and exit non-zero before any file task is scheduled; per-file
/// errors are reported to stderr by the processor and leave the exit code
/// untouched.
pub async fn run_update(args: UpdateArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if !args.directory.is_dir() {
    eprintln!("ERROR: {} is not a directory", args.directory.display());
    process::exit(1);
  }

  // Pre-flight: compile the patterns before any file is touched. An invalid
  // custom regex must never fall back to the defaults.
  let patterns = match PatternSet::new(&args.company, args.pattern.as_deref()) {
    Ok(patterns) => patterns,
    Err(e) => {
      eprintln!("Invalid custom regex pattern: {e}");
      process::exit(1);
    }
  };
  if patterns.is_custom() {
    debug!("Custom pattern overrides the default pair for all file kinds");
  }

  let extensions = if args.extensions.is_empty() {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect()
  } else {
    args.extensions
  };

  let config = RunConfig {
    owner: args.company,
    current_year: chrono::Local::now().year(),
    patterns,
    extensions,
    concurrency: args.concurrency.max(1),
  };
  debug!(
    "Scanning {} for extensions {:?}, owner {:?}, year {}",
    args.directory.display(),
    config.extensions,
    config.owner,
    config.current_year
  );

  let processor = Processor::new(config);
  let summary = processor.run(&args.directory).await?;

  verbose_log!(
    "Scanned {} files: {} updated, {} failed",
    summary.files_scanned,
    summary.files_updated,
    summary.files_failed
  );

  Ok(())
}
