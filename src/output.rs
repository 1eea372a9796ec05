//! # Output Module
//!
//! This module centralizes all user-facing output for the add-header tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! In quiet mode only the paths of modified files are printed, one per line,
//! so the output can be piped into other tools.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::display_path;
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Would be modified in check mode
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Processing N files..." or "Checking N files..." message.
pub fn print_start_message(file_count: usize, check_only: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_only { "Checking" } else { "Processing" };
  println!("{} {} {}...", verb, file_count, files_word(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files with the given modifying action.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files, or all of them in verbose
/// mode. In check mode the heading says the files would be modified. Files
/// that needed no change are never listed.
pub fn print_files(reports: &[FileReport], action: FileAction, check_only: bool, base: &Path) {
  if !action.modifies() {
    return;
  }

  let files: Vec<&FileReport> = reports.iter().filter(|report| report.action == action).collect();
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    // In quiet mode, just print the file paths (for scripting)
    for file in &files {
      println!("{}", display_path(&file.path, base));
    }
    return;
  }

  let count = files.len();
  let Some(heading) = files_heading(action, check_only, count) else {
    return;
  };
  println!("{}", heading);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", display_path(&file.path, base));
  }

  if !show_all && count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Heading for a list of modified files; `None` for unmodified ones.
fn files_heading(action: FileAction, check_only: bool, count: usize) -> Option<String> {
  let heading = match (action, check_only) {
    (FileAction::NoActionNeeded, _) => return None,
    (FileAction::Added, false) => format!(
      "{} Added header to {} {}:",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      count,
      files_word(count)
    ),
    (FileAction::Updated, false) => format!(
      "{} Updated header in {} {}:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      count,
      files_word(count)
    ),
    (FileAction::Added, true) => format!(
      "{} {} {} missing the header:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      count,
      files_word(count)
    ),
    (FileAction::Updated, true) => format!(
      "{} {} {} with an outdated header:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      count,
      files_word(count)
    ),
  };
  Some(heading)
}

/// Print the success message when every file already has the header.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have the current header.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y added, Z updated"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  println!("{}", summary_line(summary, is_verbose()));
}

fn summary_line(summary: &ProcessingSummary, with_timing: bool) -> String {
  let mut line = format!(
    "Summary: {} OK, {} added, {} updated",
    summary.files_ok.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.files_added.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.files_updated.if_supports_color(Stream::Stdout, |s| s.cyan()),
  );

  if with_timing {
    line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  line
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

const fn files_word(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[test]
  fn test_summary_line_without_timing() {
    owo_colors::set_override(false);
    let summary = ProcessingSummary {
      total_files: 4,
      files_ok: 2,
      files_added: 1,
      files_updated: 1,
      processing_time: Duration::from_millis(1500),
    };

    assert_eq!(summary_line(&summary, false), "Summary: 2 OK, 1 added, 1 updated");
    assert_eq!(summary_line(&summary, true), "Summary: 2 OK, 1 added, 1 updated (1.50s)");
  }

  #[test]
  fn test_files_heading() {
    owo_colors::set_override(false);

    assert_eq!(
      files_heading(FileAction::Added, false, 1).as_deref(),
      Some("\u{2713} Added header to 1 file:")
    );
    assert_eq!(
      files_heading(FileAction::Updated, true, 3).as_deref(),
      Some("\u{21bb} 3 files with an outdated header:")
    );
    assert_eq!(files_heading(FileAction::NoActionNeeded, false, 2), None);
    assert_eq!(files_heading(FileAction::NoActionNeeded, true, 2), None);
  }

  #[test]
  fn test_files_word() {
    assert_eq!(files_word(1), "file");
    assert_eq!(files_word(0), "files");
    assert_eq!(files_word(3), "files");
  }
}
