//! # Run Command
//!
//! This module implements the add/update header command: it resolves the
//! options, renders the header once and rewrites every target file in order.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{Config, ConfigError, load_config};
use crate::diff::DiffManager;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_all_files_ok, print_blank_line, print_files, print_hint, print_start_message, print_summary};
use crate::processor::{FileCollector, Processor, ProcessorConfig};
use crate::report::{FileAction, ProcessingSummary};
use crate::templates::HeaderTemplate;

/// Exit status used for usage errors, matching clap.
const USAGE_ERROR: u8 = 2;

/// Arguments for adding or updating headers
#[derive(Args, Debug)]
pub struct RunArgs {
  /// Files to add the header to. Glob patterns are expanded.
  #[arg(required = true, value_name = "FILEPATHS")]
  pub targets: Vec<String>,

  /// The file holding the header text
  #[arg(long, value_name = "PATH")]
  pub header_filepath: Option<PathBuf>,

  /// A single comment prefix or a triplet separated by vertical bars
  /// (<comment-start>|<comment-prefix>|<comment-end>). E.g., a Java comment
  /// block would be: '/*| *| */' [default: #]
  #[arg(long, value_name = "STYLE", help_heading = "Header")]
  pub comment_style: Option<String>,

  /// Put the comment start token on its own line
  #[arg(long, help_heading = "Header")]
  pub newline_after_comment_start: bool,

  /// Put the comment end token on its own line
  #[arg(long, help_heading = "Header")]
  pub newline_before_comment_end: bool,

  /// Insert the header after the first line containing this string, e.g. a
  /// shebang
  #[arg(long, value_name = "STRING", help_heading = "Header")]
  pub start_header_after: Option<String>,

  /// The string marking where an existing header stops [default: "ignore
  /// below"]
  #[arg(long, value_name = "STRING", help_heading = "Header")]
  pub ignore_below_string: Option<String>,

  /// Stop replacing an existing header at the ignore-below string
  #[arg(long, help_heading = "Header")]
  pub stop_at_ignore_below: bool,

  /// Wrap header lines at word boundaries to at most this many characters
  #[arg(long, value_name = "INT", help_heading = "Header")]
  pub max_line_length: Option<usize>,

  /// Exit with status 1 if any file was modified
  #[arg(long)]
  pub fail_on_fix: bool,

  /// Only report files that would be modified; exit with status 1 if any
  #[arg(long)]
  pub check: bool,

  /// Show a diff of every change
  #[arg(long)]
  pub show_diff: bool,

  /// Path to config file (default: .add-header.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and modified paths
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

impl RunArgs {
  /// The header options given on the command line, as a config layer.
  fn overrides(&self) -> Config {
    Config {
      header_filepath: self.header_filepath.clone(),
      comment_style: self.comment_style.clone(),
      newline_after_comment_start: self.newline_after_comment_start,
      newline_before_comment_end: self.newline_before_comment_end,
      start_header_after: self.start_header_after.clone(),
      ignore_below_string: self.ignore_below_string.clone(),
      stop_at_ignore_below: self.stop_at_ignore_below,
      max_line_length: self.max_line_length,
      fail_on_fix: self.fail_on_fix,
    }
  }
}

/// Run with the given arguments and return the process exit status.
pub fn run(args: RunArgs) -> Result<ExitCode> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the logging macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;

  let file_config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;
  if file_config.is_some() {
    debug!("Using configuration file for defaults");
  }

  let settings = match file_config.unwrap_or_default().merge(args.overrides()).resolve() {
    Ok(settings) => settings,
    Err(ConfigError::MissingHeaderFile) => {
      eprintln!("ERROR: {}", ConfigError::MissingHeaderFile);
      return Ok(ExitCode::from(USAGE_ERROR));
    }
    Err(e) => return Err(e.into()),
  };
  debug!("Resolved settings: {:?}", settings);

  let template = HeaderTemplate::load(&settings.header_filepath)
    .with_context(|| format!("Failed to load header from {}", settings.header_filepath.display()))?;

  let files = FileCollector::collect(&args.targets)?;

  let processor = Processor::new(
    &template,
    ProcessorConfig {
      check_only: args.check,
      diff_manager: DiffManager::new(args.show_diff),
      ..settings.processor_config()
    },
  );

  print_start_message(files.len(), args.check);

  let start_time = Instant::now();
  let reports = processor.process(&files)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());
  let modified = summary.files_modified();

  print_blank_line();
  if modified == 0 {
    print_all_files_ok();
  } else {
    print_files(&reports, FileAction::Added, args.check, &current_dir);
    if summary.files_added > 0 && summary.files_updated > 0 {
      print_blank_line();
    }
    print_files(&reports, FileAction::Updated, args.check, &current_dir);
  }

  print_blank_line();
  print_summary(&summary);

  if modified == 0 {
    return Ok(ExitCode::SUCCESS);
  }

  if args.check {
    print_blank_line();
    print_hint("Run without --check to add or update the headers.");
    return Ok(ExitCode::FAILURE);
  }

  if settings.fail_on_fix {
    info_log!("Header fixed in {} file(s); exiting with status 1 (--fail-on-fix)", modified);
    return Ok(ExitCode::FAILURE);
  }

  Ok(ExitCode::SUCCESS)
}
