//! # add-header
//!
//! Adds or updates a comment-framed header, such as a license or copyright
//! notice, at the top of source files.
//!
//! `add-header` is meant to run as a pre-commit hook. For each file it
//! decides whether the header is missing, stale or current, replaces or
//! inserts it while keeping any content that must stay above it (a shebang,
//! for instance), and leaves everything below the header untouched.
//!
//! ## Features
//!
//! * Simple comment styles (`#`, `//`, `--`) and block styles given as
//!   `start|prefix|end` triplets (`/*| *| */`)
//! * Stale header replacement, optionally bounded by an "ignore below" marker
//! * Header insertion after a marker line such as `#!/bin/sh`
//! * Word wrapping of header lines to a maximum length
//! * `--fail-on-fix` and `--check` for use in CI
//!
//! ## Usage as a Library
//!
//! ```rust
//! use add_header::comment_style::CommentStyle;
//! use add_header::processor::{HeaderState, Processor, ProcessorConfig};
//! use add_header::templates::HeaderTemplate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = HeaderTemplate::from_text("Copyright (c) 2025 Example Corp");
//! let config = ProcessorConfig::new(CommentStyle::parse("#")?);
//! let processor = Processor::new(&template, config);
//!
//! let rewrite = processor.rewrite("print('hello')\n");
//! assert_eq!(rewrite.state, HeaderState::NoHeader);
//! assert_eq!(
//!   rewrite.content.as_deref(),
//!   Some("# Copyright (c) 2025 Example Corp\nprint('hello')\n")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! * [`comment_style`] - Comment style parsing
//! * [`templates`] - Header loading and rendering
//! * [`processor`] - Header detection and file rewriting
//! * [`config`] - Config file support
//! * [`logging`] - Logging utilities for verbose output

pub mod cli;
pub mod comment_style;
pub mod config;
pub mod diff;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
