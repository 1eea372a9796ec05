//! # Content Transformer Module
//!
//! This module holds the pure string logic of header detection:
//! - splitting off the prefix region that must stay above the header
//! - classifying the remaining content as missing, stale or current
//! - locating where a stale header ends
//!
//! The individual tests are exposed as small named predicates so each rule
//! can be exercised on its own.

use crate::comment_style::CommentStyle;
use crate::templates::RenderedHeader;

/// Header status of a file's searchable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
  /// The content does not start with the style's detection token.
  NoHeader,
  /// The content starts with the detection token but not with the rendered
  /// header.
  StaleHeader,
  /// The content already starts with the rendered header.
  CurrentHeader,
}

/// A file's content split around the prefix region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitContent<'a> {
  /// Lines that stay above the header, verbatim. Empty when there is none.
  pub prefix_region: &'a str,
  /// Everything after the prefix region.
  pub searchable: &'a str,
}

/// Returns `true` if `line` contains the literal `marker`.
pub fn line_contains_marker(line: &str, marker: &str) -> bool {
  line.contains(marker)
}

/// Returns `true` if `content` begins with the style's detection token.
pub fn starts_with_detection_token(content: &str, style: &CommentStyle) -> bool {
  content.starts_with(style.detection_token())
}

/// Returns `true` if `content` begins with the full rendered header.
pub fn starts_with_rendered_header(content: &str, header: &RenderedHeader) -> bool {
  content.starts_with(header.as_str())
}

/// Returns `true` if `line` closes a triplet comment: it starts with the end
/// token, or ends with it once trailing whitespace is removed.
pub fn is_triplet_end_line(line: &str, end: &str) -> bool {
  line.starts_with(end) || line.trim_end().ends_with(end)
}

/// Returns `true` if `line` is the last line of a simple-style header: it is
/// prefixed and is followed by a line that is not.
///
/// A prefixed line with no following line never qualifies.
pub fn is_simple_last_header_line(line: &str, next: Option<&str>, prefix: &str) -> bool {
  line.starts_with(prefix) && next.is_some_and(|next| !next.starts_with(prefix))
}

/// Header detection bound to one run's settings.
#[derive(Debug, Clone)]
pub struct ContentTransformer {
  style: CommentStyle,
  start_header_after: Option<String>,
  ignore_below: Option<String>,
}

impl ContentTransformer {
  /// Creates a transformer.
  ///
  /// # Parameters
  ///
  /// * `style` - The comment style the header is framed with
  /// * `start_header_after` - Marker whose line (and everything above it) is
  ///   kept above the header
  /// * `ignore_below` - Marker that ends a stale header; `None` disables the
  ///   marker rule
  pub fn new(style: CommentStyle, start_header_after: Option<String>, ignore_below: Option<String>) -> Self {
    Self {
      style,
      start_header_after: start_header_after.filter(|marker| !marker.is_empty()),
      ignore_below: ignore_below.filter(|marker| !marker.is_empty()),
    }
  }

  /// Splits `content` after the first line containing the start-header-after
  /// marker.
  ///
  /// If no marker is configured, or the marker never appears, the whole
  /// content is searchable and the prefix region is empty.
  pub fn split_prefix_region<'a>(&self, content: &'a str) -> SplitContent<'a> {
    let unsplit = SplitContent {
      prefix_region: "",
      searchable: content,
    };
    let Some(marker) = self.start_header_after.as_deref() else {
      return unsplit;
    };

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
      offset += line.len();
      if line_contains_marker(line, marker) {
        let (prefix_region, searchable) = content.split_at(offset);
        return SplitContent {
          prefix_region,
          searchable,
        };
      }
    }

    unsplit
  }

  /// Classifies the searchable content against the rendered header.
  pub fn classify(&self, searchable: &str, header: &RenderedHeader) -> HeaderState {
    if !starts_with_detection_token(searchable, &self.style) {
      HeaderState::NoHeader
    } else if starts_with_rendered_header(searchable, header) {
      HeaderState::CurrentHeader
    } else {
      HeaderState::StaleHeader
    }
  }

  /// Finds the content that follows a stale header.
  ///
  /// Lines are walked from the top. The first line containing the
  /// ignore-below marker (when enabled) starts the retained body and is kept.
  /// Otherwise the first line that closes the header is dropped and the body
  /// starts on the next line. Every line before the boundary is discarded.
  ///
  /// Returns `None` when no boundary is found, in which case nothing is
  /// retained.
  pub fn retained_body<'a>(&self, searchable: &'a str) -> Option<&'a str> {
    let lines: Vec<&str> = searchable.split_inclusive('\n').collect();
    let mut offset = 0;

    for (i, line) in lines.iter().enumerate() {
      if let Some(marker) = self.ignore_below.as_deref()
        && line_contains_marker(line, marker)
      {
        return Some(&searchable[offset..]);
      }

      offset += line.len();

      let closes = match &self.style {
        CommentStyle::Triplet { end, .. } => is_triplet_end_line(line, end),
        CommentStyle::Simple { prefix } => is_simple_last_header_line(line, lines.get(i + 1).copied(), prefix),
      };
      if closes {
        return Some(&searchable[offset..]);
      }
    }

    None
  }
}
