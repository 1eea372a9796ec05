//! # Diff Module
//!
//! Renders line diffs between a file's original content and its rewritten
//! content, so `--show-diff` can show what a header change does.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Renders and prints diffs of header changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,
}

impl DiffManager {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Prints the diff for `path` to stderr if diffs are enabled.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if !self.show_diff {
      return;
    }

    eprintln!("Diff for {}:", path.display());
    for line in render_diff(original, new).lines() {
      let colored = match line.chars().next() {
        Some('+') => line.if_supports_color(Stream::Stderr, |l| l.green()).to_string(),
        Some('-') => line.if_supports_color(Stream::Stderr, |l| l.red()).to_string(),
        _ => line.to_string(),
      };
      eprintln!("{colored}");
    }
    eprintln!();
  }
}

/// Renders a `+`/`-`/` ` prefixed line diff of `original` against `new`.
///
/// Every rendered line ends with a newline, including the last line of
/// content that had none.
pub fn render_diff(original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);
  let mut rendered = String::new();

  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => '-',
      ChangeTag::Insert => '+',
      ChangeTag::Equal => ' ',
    };
    rendered.push(sign);
    rendered.push_str(change.value());
    if change.missing_newline() {
      rendered.push('\n');
    }
  }

  rendered
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_diff_inserted_header() {
    let rendered = render_diff("print()\n", "# Copyright\nprint()\n");

    assert_eq!(rendered, "+# Copyright\n print()\n");
  }

  #[test]
  fn test_render_diff_replaced_header() {
    let rendered = render_diff("# Old\ncode\n", "# New\ncode\n");

    assert_eq!(rendered, "-# Old\n+# New\n code\n");
  }

  #[test]
  fn test_render_diff_missing_trailing_newline() {
    let rendered = render_diff("code", "# New\ncode");

    assert_eq!(rendered, "+# New\n code\n");
  }
}
