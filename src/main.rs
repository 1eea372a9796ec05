//! # add-header
//!
//! Adds or updates a comment-framed header at the top of files.

use std::process::ExitCode;

use add_header::cli::{Cli, run};
use anyhow::Result;

fn main() -> Result<ExitCode> {
  let cli = Cli::parse_args();

  run(cli.run_args)
}
