//! # Processor Module
//!
//! This module contains the per-file header detection and rewrite logic.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Whole-file reads and atomic replacement
//! - [`content_transformer`] - Prefix region split, classification and stale header scan
//! - [`file_collector`] - Expansion of command-line targets into files
//!
//! The [`Processor`] renders the header once and then walks the target files
//! in order, rewriting each one whose header is missing or stale.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use content_transformer::{
  ContentTransformer, HeaderState, SplitContent, is_simple_last_header_line, is_triplet_end_line, line_contains_marker,
  starts_with_detection_token, starts_with_rendered_header,
};
pub use file_collector::{FileCollector, display_path, is_glob_pattern, normalize_path};
pub use file_io::FileIO;
use tracing::{debug, warn};

use crate::comment_style::CommentStyle;
use crate::diff::DiffManager;
use crate::report::{FileAction, FileReport};
use crate::templates::{HeaderRenderer, HeaderTemplate, RenderOptions, RenderedHeader};
use crate::verbose_log;

/// Default marker that ends a stale header when `stop_at_ignore_below` is set.
pub const DEFAULT_IGNORE_BELOW: &str = "ignore below";

/// Configuration for creating a Processor instance.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
  pub comment_style: CommentStyle,
  pub render_options: RenderOptions,

  /// Keep every line up to and including the first one containing this
  /// marker above the header.
  pub start_header_after: Option<String>,

  pub ignore_below_string: String,
  pub stop_at_ignore_below: bool,

  /// Classify and report only; never write.
  pub check_only: bool,

  pub diff_manager: DiffManager,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with the given style and defaults for
  /// everything else.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(comment_style)
  /// }
  /// ```
  pub fn new(comment_style: CommentStyle) -> Self {
    Self {
      comment_style,
      render_options: RenderOptions::default(),
      start_header_after: None,
      ignore_below_string: DEFAULT_IGNORE_BELOW.to_string(),
      stop_at_ignore_below: false,
      check_only: false,
      diff_manager: DiffManager::default(),
    }
  }
}

/// Result of computing a file's new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  /// Header state of the original content
  pub state: HeaderState,
  /// The new content, or `None` when the file is left as it is
  pub content: Option<String>,
  /// A stale header was found but its end could not be located, so the
  /// whole searchable content was replaced
  pub boundary_missing: bool,
}

/// Processor for adding and updating headers in files.
pub struct Processor {
  header: RenderedHeader,
  transformer: ContentTransformer,
  check_only: bool,
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a processor, rendering the header once for the whole run.
  pub fn new(template: &HeaderTemplate, config: ProcessorConfig) -> Self {
    let renderer = HeaderRenderer::new(config.comment_style.clone(), config.render_options);
    let header = renderer.render(template);
    debug!("Rendered header:\n{}", header);

    let ignore_below = config.stop_at_ignore_below.then_some(config.ignore_below_string);
    let transformer = ContentTransformer::new(config.comment_style, config.start_header_after, ignore_below);

    Self {
      header,
      transformer,
      check_only: config.check_only,
      diff_manager: config.diff_manager,
    }
  }

  pub const fn header(&self) -> &RenderedHeader {
    &self.header
  }

  /// Computes the rewritten form of `content` without touching any file.
  ///
  /// The output is the prefix region, then the rendered header, then either
  /// the full searchable content (no header) or whatever followed the stale
  /// header.
  pub fn rewrite(&self, content: &str) -> Rewrite {
    let split = self.transformer.split_prefix_region(content);
    let state = self.transformer.classify(split.searchable, &self.header);

    let (body, boundary_missing) = match state {
      HeaderState::CurrentHeader => {
        return Rewrite {
          state,
          content: None,
          boundary_missing: false,
        };
      }
      HeaderState::NoHeader => (split.searchable, false),
      HeaderState::StaleHeader => match self.transformer.retained_body(split.searchable) {
        Some(body) => (body, false),
        None => ("", true),
      },
    };

    let mut new_content = String::with_capacity(split.prefix_region.len() + self.header.as_str().len() + body.len());
    new_content.push_str(split.prefix_region);
    new_content.push_str(self.header.as_str());
    new_content.push_str(body);

    Rewrite {
      state,
      content: (new_content != content).then_some(new_content),
      boundary_missing,
    }
  }

  /// Processes one file: reads it, rewrites it in memory and, unless in
  /// check mode, replaces it on disk.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or written.
  pub fn process_file(&self, path: &Path) -> Result<FileReport> {
    verbose_log!("Processing file: {}", path.display());

    let content = FileIO::read_full_content(path)?;
    let rewrite = self.rewrite(&content);
    debug!("{}: {:?}", path.display(), rewrite.state);

    if rewrite.boundary_missing {
      warn!(
        "{}: end of the existing header not found; replacing all content after the prefix region",
        path.display()
      );
    }

    let Some(new_content) = rewrite.content else {
      return Ok(FileReport {
        path: path.to_path_buf(),
        state: rewrite.state,
        action: FileAction::NoActionNeeded,
        written: false,
      });
    };

    self.diff_manager.display_diff(path, &content, &new_content);

    let written = !self.check_only;
    if written {
      FileIO::write_atomic(path, &new_content)?;
      verbose_log!("Wrote header to: {}", path.display());
    }

    Ok(FileReport {
      path: path.to_path_buf(),
      state: rewrite.state,
      action: FileAction::for_state(rewrite.state),
      written,
    })
  }

  /// Processes files one at a time in the given order.
  ///
  /// The first failure aborts the run; files processed before it keep their
  /// new content.
  pub fn process(&self, files: &[PathBuf]) -> Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
      reports.push(self.process_file(path)?);
    }
    Ok(reports)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn processor(style: &str, header: &str, configure: impl FnOnce(&mut ProcessorConfig)) -> Processor {
    let mut config = ProcessorConfig::new(CommentStyle::parse(style).expect("valid style"));
    configure(&mut config);
    Processor::new(&HeaderTemplate::from_text(header), config)
  }

  #[test]
  fn test_rewrite_inserts_missing_header() {
    let p = processor("#", "Copyright", |_| {});
    let rewrite = p.rewrite("import os\n");

    assert_eq!(rewrite.state, HeaderState::NoHeader);
    assert_eq!(rewrite.content.as_deref(), Some("# Copyright\nimport os\n"));
  }

  #[test]
  fn test_rewrite_leaves_current_header() {
    let p = processor("#", "Copyright", |_| {});
    let rewrite = p.rewrite("# Copyright\nimport os\n");

    assert_eq!(rewrite.state, HeaderState::CurrentHeader);
    assert_eq!(rewrite.content, None);
  }

  #[test]
  fn test_rewrite_replaces_stale_header() {
    let p = processor("#", "Copyright 2025", |_| {});
    let rewrite = p.rewrite("# Copyright 2020\n# Old Corp\nimport os\n");

    assert_eq!(rewrite.state, HeaderState::StaleHeader);
    assert_eq!(rewrite.content.as_deref(), Some("# Copyright 2025\nimport os\n"));
  }

  #[test]
  fn test_rewrite_keeps_prefix_region() {
    let p = processor("#", "Copyright", |c| c.start_header_after = Some("#!/bin/sh".to_string()));
    let rewrite = p.rewrite("#!/bin/sh\necho hi\n");

    assert_eq!(rewrite.state, HeaderState::NoHeader);
    assert_eq!(rewrite.content.as_deref(), Some("#!/bin/sh\n# Copyright\necho hi\n"));
  }

  #[test]
  fn test_rewrite_stale_header_after_prefix_region() {
    let p = processor("#", "New", |c| c.start_header_after = Some("#!/bin/sh".to_string()));
    let rewrite = p.rewrite("#!/bin/sh\n# Old\necho hi\n");

    assert_eq!(rewrite.state, HeaderState::StaleHeader);
    assert_eq!(rewrite.content.as_deref(), Some("#!/bin/sh\n# New\necho hi\n"));
  }

  #[test]
  fn test_rewrite_stale_header_with_ignore_below() {
    let p = processor("#", "New", |c| c.stop_at_ignore_below = true);
    let rewrite = p.rewrite("# Old\n# ignore below\n# kept comment\ncode\n");

    assert_eq!(rewrite.content.as_deref(), Some("# New\n# ignore below\n# kept comment\ncode\n"));
  }

  #[test]
  fn test_rewrite_custom_ignore_below_string() {
    let p = processor("#", "New", |c| {
      c.stop_at_ignore_below = true;
      c.ignore_below_string = "END HEADER".to_string();
    });
    let rewrite = p.rewrite("# Old\n# END HEADER\n# kept\n");

    assert_eq!(rewrite.content.as_deref(), Some("# New\n# END HEADER\n# kept\n"));
    assert!(!rewrite.boundary_missing);
  }

  #[test]
  fn test_rewrite_stale_triplet_header() {
    let p = processor("/*| *| */", "New\nText", |c| {
      c.render_options.newline_after_comment_start = true;
      c.render_options.newline_before_comment_end = true;
    });
    let rewrite = p.rewrite("/*\n * Old\n */\nint x;\n");

    assert_eq!(rewrite.state, HeaderState::StaleHeader);
    assert_eq!(rewrite.content.as_deref(), Some("/*\n * New\n * Text\n */\nint x;\n"));
  }

  #[test]
  fn test_rewrite_header_only_file_loses_content_without_marker() {
    let p = processor("#", "New", |_| {});
    let rewrite = p.rewrite("# Old 1\n# Old 2\n");

    assert_eq!(rewrite.state, HeaderState::StaleHeader);
    assert!(rewrite.boundary_missing);
    assert_eq!(rewrite.content.as_deref(), Some("# New\n"));
  }

  #[test]
  fn test_rewrite_is_idempotent() {
    let p = processor("/*| *| */", "Copyright 2025\nAll rights reserved.", |c| {
      c.render_options.max_line_length = Some(18);
    });
    let first = p.rewrite("/* Old */\nint x;\n").content.expect("first run rewrites");
    let second = p.rewrite(&first);

    assert_eq!(second.state, HeaderState::CurrentHeader);
    assert_eq!(second.content, None);
  }

  #[test]
  fn test_rewrite_empty_header_is_not_a_change() {
    let p = processor("#", "", |_| {});
    let rewrite = p.rewrite("code\n");

    assert_eq!(rewrite.state, HeaderState::NoHeader);
    assert_eq!(rewrite.content, None);
  }
}
