//! # cprt
//!
//! A tool that updates copyright notice year ranges in files within a
//! directory tree.

use anyhow::Result;
use cprt::cli::{Cli, run_update};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_update(cli.args).await
}
