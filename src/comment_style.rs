//! # Comment Style Module
//!
//! Parses the `--comment-style` descriptor into a [`CommentStyle`].
//!
//! A descriptor is either a single prefix applied to every header line
//! (`#`, `//`, `--`) or a triplet of `START|PREFIX|END` tokens separated by
//! vertical bars, e.g. `/*| *| */` for a C-style block comment.

use std::fmt;
use std::str::FromStr;

/// Separator between the start, prefix and end tokens of a triplet style.
pub const TRIPLET_DELIMITER: char = '|';

/// Error type for comment style parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
  /// A triplet descriptor did not split into exactly three fields.
  #[error("Invalid comment style '{style}': expected <start>|<prefix>|<end>, found {fields} fields")]
  MalformedTriplet { style: String, fields: usize },
}

/// How header lines are framed as comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentStyle {
  /// Every line carries the same prefix; there is no block terminator.
  Simple { prefix: String },

  /// A block comment with distinct start, per-line prefix and end tokens.
  Triplet { start: String, prefix: String, end: String },
}

impl CommentStyle {
  /// Parse a style descriptor.
  ///
  /// # Errors
  ///
  /// Returns [`StyleError::MalformedTriplet`] if the descriptor contains the
  /// delimiter but does not split into exactly three fields.
  pub fn parse(descriptor: &str) -> Result<Self, StyleError> {
    if !descriptor.contains(TRIPLET_DELIMITER) {
      return Ok(Self::Simple {
        prefix: descriptor.to_string(),
      });
    }

    let fields: Vec<&str> = descriptor.split(TRIPLET_DELIMITER).collect();
    match fields.as_slice() {
      [start, prefix, end] => Ok(Self::Triplet {
        start: (*start).to_string(),
        prefix: (*prefix).to_string(),
        end: (*end).to_string(),
      }),
      _ => Err(StyleError::MalformedTriplet {
        style: descriptor.to_string(),
        fields: fields.len(),
      }),
    }
  }

  /// The per-line comment prefix.
  pub fn prefix(&self) -> &str {
    match self {
      Self::Simple { prefix } | Self::Triplet { prefix, .. } => prefix,
    }
  }

  /// The token a file must start with to be considered as already having a
  /// header: the start token for triplets, the prefix for simple styles.
  pub fn detection_token(&self) -> &str {
    match self {
      Self::Simple { prefix } => prefix,
      Self::Triplet { start, .. } => start,
    }
  }

  /// The block terminator. Always `Some` for triplets, never for simple
  /// styles.
  pub fn end(&self) -> Option<&str> {
    match self {
      Self::Simple { .. } => None,
      Self::Triplet { end, .. } => Some(end),
    }
  }

  pub const fn is_triplet(&self) -> bool {
    matches!(self, Self::Triplet { .. })
  }

  /// The prefix followed by one space, or nothing for an empty prefix.
  pub fn line_lead(&self) -> String {
    let prefix = self.prefix();
    if prefix.is_empty() {
      String::new()
    } else {
      format!("{prefix} ")
    }
  }

  /// The end token as appended to the last content line: guaranteed to be
  /// separated from the text by a space.
  pub fn inline_end(&self) -> Option<String> {
    self.end().map(|end| {
      if end.starts_with(' ') {
        end.to_string()
      } else {
        format!(" {end}")
      }
    })
  }
}

impl Default for CommentStyle {
  fn default() -> Self {
    Self::Simple {
      prefix: "#".to_string(),
    }
  }
}

impl FromStr for CommentStyle {
  type Err = StyleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for CommentStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Simple { prefix } => write!(f, "{prefix}"),
      Self::Triplet { start, prefix, end } => {
        write!(f, "{start}{TRIPLET_DELIMITER}{prefix}{TRIPLET_DELIMITER}{end}")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_simple_style() {
    let style = CommentStyle::parse("#").expect("simple style should parse");

    assert_eq!(
      style,
      CommentStyle::Simple {
        prefix: "#".to_string()
      }
    );
    assert_eq!(style.detection_token(), "#");
    assert_eq!(style.end(), None);
    assert!(!style.is_triplet());
  }

  #[test]
  fn test_parse_triplet_style() {
    let style = CommentStyle::parse("/*| *| */").expect("triplet should parse");

    assert_eq!(
      style,
      CommentStyle::Triplet {
        start: "/*".to_string(),
        prefix: " *".to_string(),
        end: " */".to_string(),
      }
    );
    assert_eq!(style.detection_token(), "/*");
    assert_eq!(style.prefix(), " *");
    assert_eq!(style.end(), Some(" */"));
  }

  #[test]
  fn test_parse_triplet_with_empty_prefix() {
    let style = CommentStyle::parse("<!--||-->").expect("triplet should parse");

    assert_eq!(style.prefix(), "");
    assert_eq!(style.line_lead(), "");
    assert_eq!(style.inline_end().as_deref(), Some(" -->"));
  }

  #[test]
  fn test_parse_malformed_triplet() {
    let err = CommentStyle::parse("/*| */").expect_err("two fields should fail");
    assert_eq!(
      err,
      StyleError::MalformedTriplet {
        style: "/*| */".to_string(),
        fields: 2,
      }
    );

    let err = "a|b|c|d".parse::<CommentStyle>().expect_err("four fields should fail");
    assert!(matches!(err, StyleError::MalformedTriplet { fields: 4, .. }));
  }

  #[test]
  fn test_line_lead() {
    assert_eq!(CommentStyle::parse("//").expect("parse").line_lead(), "// ");
    assert_eq!(CommentStyle::parse("").expect("parse").line_lead(), "");
  }

  #[test]
  fn test_inline_end_keeps_leading_space() {
    let style = CommentStyle::parse("/*| *|*/").expect("parse");
    assert_eq!(style.inline_end().as_deref(), Some(" */"));

    let style = CommentStyle::parse("/*| *| */").expect("parse");
    assert_eq!(style.inline_end().as_deref(), Some(" */"));
  }

  #[test]
  fn test_display_round_trips_descriptor() {
    assert_eq!(CommentStyle::parse("/**| *| */").expect("parse").to_string(), "/**| *| */");
    assert_eq!(CommentStyle::default().to_string(), "#");
  }
}
