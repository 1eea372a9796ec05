//! # Report Module
//!
//! Records what happened to each file during a run and summarises it.

use std::path::PathBuf;
use std::time::Duration;

use crate::processor::HeaderState;

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// A header was inserted (or would be, in check mode)
  Added,
  /// A stale header was replaced (or would be, in check mode)
  Updated,
  /// The file already started with the current header
  NoActionNeeded,
}

impl FileAction {
  /// The action implied by a file's header state.
  pub const fn for_state(state: HeaderState) -> Self {
    match state {
      HeaderState::NoHeader => Self::Added,
      HeaderState::StaleHeader => Self::Updated,
      HeaderState::CurrentHeader => Self::NoActionNeeded,
    }
  }

  /// Whether the action changes the file's content.
  pub const fn modifies(self) -> bool {
    matches!(self, Self::Added | Self::Updated)
  }
}

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// Header state found before processing
  pub state: HeaderState,
  /// Action taken on the file
  pub action: FileAction,
  /// Whether new content was written to disk
  pub written: bool,
}

/// Counts over all file reports of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  pub total_files: usize,
  pub files_ok: usize,
  pub files_added: usize,
  pub files_updated: usize,
  pub processing_time: Duration,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: reports.len(),
      processing_time,
      ..Self::default()
    };

    for report in reports {
      match report.action {
        FileAction::Added => summary.files_added += 1,
        FileAction::Updated => summary.files_updated += 1,
        FileAction::NoActionNeeded => summary.files_ok += 1,
      }
    }

    summary
  }

  /// Number of files that were (or would be) modified.
  pub const fn files_modified(&self) -> usize {
    self.files_added + self.files_updated
  }
}
