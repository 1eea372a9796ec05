//! # Templates Module
//!
//! This module loads the header template and renders it into the exact text
//! that is placed at the top of every target file.
//!
//! The module includes:
//! - [`HeaderTemplate`] for loading the raw header text
//! - [`RenderOptions`] for the framing and wrapping switches
//! - [`HeaderRenderer`] for turning a template into a [`RenderedHeader`]
//!
//! ## Example
//!
//! ```rust
//! use add_header::comment_style::CommentStyle;
//! use add_header::templates::{HeaderRenderer, HeaderTemplate, RenderOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = HeaderTemplate::from_text("Copyright");
//! let style = CommentStyle::parse("/*| *| */")?;
//! let renderer = HeaderRenderer::new(style, RenderOptions::default());
//!
//! assert_eq!(renderer.render(&template).as_str(), "/* Copyright */\n");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::comment_style::CommentStyle;
use crate::verbose_log;

/// Raw header text, loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  text: String,
}

impl HeaderTemplate {
  /// Loads the header template from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The file does not exist
  /// - The file cannot be read
  /// - The file content is not valid UTF-8
  pub fn load(path: &Path) -> Result<Self> {
    verbose_log!("Loading header template from: {}", path.display());

    let text = fs::read_to_string(path).with_context(|| format!("Failed to read header file: {}", path.display()))?;

    verbose_log!("Template content:\n{}", text);

    Ok(Self { text })
  }

  pub fn from_text(text: &str) -> Self {
    Self { text: text.to_string() }
  }

  /// The template split into lines, without line terminators.
  pub fn lines(&self) -> Vec<&str> {
    self.text.lines().collect()
  }
}

/// Switches that control how the header is framed and wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
  /// Put the triplet start token on a line of its own.
  pub newline_after_comment_start: bool,

  /// Put the triplet end token on a line of its own.
  pub newline_before_comment_end: bool,

  /// Greedily re-flow every header line so no physical line is longer than
  /// this many characters.
  pub max_line_length: Option<usize>,
}

/// The fully framed header text. Identical for every file in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
  text: String,
}

impl RenderedHeader {
  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }
}

impl fmt::Display for RenderedHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

/// One logical header line before wrapping.
#[derive(Debug, PartialEq, Eq)]
enum Framed {
  /// A bare start or end token, emitted verbatim.
  Token(String),
  /// Text whose first physical line must not receive the comment prefix.
  Bare(String),
  /// Text whose every physical line receives the comment prefix.
  Prefixed(String),
}

/// Renders a [`HeaderTemplate`] with a comment style.
#[derive(Debug, Clone)]
pub struct HeaderRenderer {
  style: CommentStyle,
  options: RenderOptions,
}

impl HeaderRenderer {
  pub const fn new(style: CommentStyle, options: RenderOptions) -> Self {
    Self { style, options }
  }

  /// Renders the template into its framed, newline-terminated form.
  ///
  /// The first and last template lines receive the triplet start and end
  /// tokens; a single-line template receives both. Interior lines, and every
  /// wrapped continuation line, carry the comment prefix.
  pub fn render(&self, template: &HeaderTemplate) -> RenderedHeader {
    let lead = self.style.line_lead();
    let mut text = String::new();

    for framed in self.frame(&template.lines()) {
      let physical = match framed {
        Framed::Token(token) => vec![token],
        Framed::Bare(line) => self.layout(&line, "", &lead),
        Framed::Prefixed(line) => self.layout(&line, &lead, &lead),
      };
      for line in physical {
        text.push_str(&line);
        text.push('\n');
      }
    }

    RenderedHeader { text }
  }

  fn frame(&self, lines: &[&str]) -> Vec<Framed> {
    let CommentStyle::Triplet { start, end, .. } = &self.style else {
      return lines.iter().map(|line| Framed::Prefixed((*line).to_string())).collect();
    };
    let inline_end = self.style.inline_end().unwrap_or_default();
    let last = lines.len().saturating_sub(1);
    let mut framed = Vec::with_capacity(lines.len() + 2);

    for (i, line) in lines.iter().enumerate() {
      let mut text = (*line).to_string();
      let closes = i == last;
      if closes && !self.options.newline_before_comment_end {
        text.push_str(&inline_end);
      }

      if i == 0 {
        if self.options.newline_after_comment_start {
          framed.push(Framed::Token(start.clone()));
          framed.push(Framed::Prefixed(text));
        } else {
          framed.push(Framed::Bare(format!("{start} {text}")));
        }
      } else {
        framed.push(Framed::Prefixed(text));
      }

      if closes && self.options.newline_before_comment_end {
        framed.push(Framed::Token(end.clone()));
      }
    }

    framed
  }

  fn layout(&self, line: &str, first_lead: &str, lead: &str) -> Vec<String> {
    match self.options.max_line_length {
      Some(max) => wrap_words(line, first_lead, lead, max),
      None => vec![format!("{first_lead}{line}")],
    }
  }
}

/// Greedily packs the whitespace-separated words of `text` into lines of at
/// most `max` characters.
///
/// The first line starts with `first_lead`, continuation lines with `lead`.
/// Words are never split: a word longer than the remaining room on an empty
/// line is placed there anyway and that line exceeds `max`.
pub fn wrap_words(text: &str, first_lead: &str, lead: &str, max: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = first_lead.to_string();
  let mut has_words = false;

  for word in text.split_whitespace() {
    if !has_words {
      current.push_str(word);
      has_words = true;
      continue;
    }

    if char_width(&current) + 1 + char_width(word) <= max {
      current.push(' ');
      current.push_str(word);
    } else {
      lines.push(std::mem::replace(&mut current, format!("{lead}{word}")));
    }
  }

  if has_words {
    lines.push(current);
  } else {
    lines.push(current.trim_end().to_string());
  }

  lines
}

fn char_width(s: &str) -> usize {
  s.chars().count()
}
