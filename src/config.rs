//! # Configuration Module
//!
//! This module provides configuration support for add-header. Every
//! command-line option can also be set in a `.add-header.toml` file, which
//! keeps long pre-commit hook invocations short.
//!
//! The file can be given with `--config` or the `ADD_HEADER_CONFIG`
//! environment variable, or it is picked up from the current directory.
//! Values given on the command line take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::comment_style::{CommentStyle, StyleError};
use crate::processor::{DEFAULT_IGNORE_BELOW, ProcessorConfig};
use crate::templates::RenderOptions;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".add-header.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "ADD_HEADER_CONFIG";

/// The comment style used when none is configured.
pub const DEFAULT_COMMENT_STYLE: &str = "#";

/// Header options as read from a config file or collected from the command
/// line. Every field is optional so two layers can be merged.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub header_filepath: Option<PathBuf>,
  pub comment_style: Option<String>,
  pub newline_after_comment_start: bool,
  pub newline_before_comment_end: bool,
  pub start_header_after: Option<String>,
  pub ignore_below_string: Option<String>,
  pub stop_at_ignore_below: bool,
  pub max_line_length: Option<usize>,
  pub fail_on_fix: bool,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// The comment style descriptor is malformed.
  #[error(transparent)]
  InvalidCommentStyle(#[from] StyleError),

  /// An option has a value outside its allowed range.
  #[error("Invalid value for '{option}': {message}")]
  InvalidValue { option: &'static str, message: String },

  /// No header file was given on the command line or in the config file.
  #[error("Missing required argument: --header-filepath <PATH>")]
  MissingHeaderFile,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub header_filepath: PathBuf,
  pub comment_style: CommentStyle,
  pub render_options: RenderOptions,
  pub start_header_after: Option<String>,
  pub ignore_below_string: String,
  pub stop_at_ignore_below: bool,
  pub fail_on_fix: bool,
}

impl Config {
  /// Load configuration from a file.
  ///
  /// A relative `header-filepath` is resolved against the directory holding
  /// the config file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    if let Some(header) = config.header_filepath.as_mut()
      && header.is_relative()
      && let Some(dir) = path.parent()
    {
      *header = dir.join(&*header);
    }

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - The comment style, if set, parses
  /// - `max-line-length`, if set, is positive
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(style) = &self.comment_style {
      CommentStyle::parse(style)?;
    }

    if self.max_line_length == Some(0) {
      return Err(ConfigError::InvalidValue {
        option: "max-line-length",
        message: "must be greater than 0".to_string(),
      });
    }

    Ok(())
  }

  /// Layer `overrides` on top of this configuration: set values in
  /// `overrides` win, enabled flags in either layer stay enabled.
  pub fn merge(self, overrides: Config) -> Self {
    Self {
      header_filepath: overrides.header_filepath.or(self.header_filepath),
      comment_style: overrides.comment_style.or(self.comment_style),
      newline_after_comment_start: overrides.newline_after_comment_start || self.newline_after_comment_start,
      newline_before_comment_end: overrides.newline_before_comment_end || self.newline_before_comment_end,
      start_header_after: overrides.start_header_after.or(self.start_header_after),
      ignore_below_string: overrides.ignore_below_string.or(self.ignore_below_string),
      stop_at_ignore_below: overrides.stop_at_ignore_below || self.stop_at_ignore_below,
      max_line_length: overrides.max_line_length.or(self.max_line_length),
      fail_on_fix: overrides.fail_on_fix || self.fail_on_fix,
    }
  }

  /// Resolve into the settings for a run, filling in defaults.
  pub fn resolve(self) -> Result<Settings, ConfigError> {
    self.validate()?;

    let header_filepath = self.header_filepath.ok_or(ConfigError::MissingHeaderFile)?;
    let comment_style = CommentStyle::parse(self.comment_style.as_deref().unwrap_or(DEFAULT_COMMENT_STYLE))?;

    Ok(Settings {
      header_filepath,
      comment_style,
      render_options: RenderOptions {
        newline_after_comment_start: self.newline_after_comment_start,
        newline_before_comment_end: self.newline_before_comment_end,
        max_line_length: self.max_line_length,
      },
      start_header_after: self.start_header_after,
      ignore_below_string: self
        .ignore_below_string
        .unwrap_or_else(|| DEFAULT_IGNORE_BELOW.to_string()),
      stop_at_ignore_below: self.stop_at_ignore_below,
      fail_on_fix: self.fail_on_fix,
    })
  }
}

impl Settings {
  /// The processor configuration for these settings.
  pub fn processor_config(&self) -> ProcessorConfig {
    ProcessorConfig {
      render_options: self.render_options,
      start_header_after: self.start_header_after.clone(),
      ignore_below_string: self.ignore_below_string.clone(),
      stop_at_ignore_below: self.stop_at_ignore_below,
      ..ProcessorConfig::new(self.comment_style.clone())
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `ADD_HEADER_CONFIG` environment variable
/// 3. `.add-header.toml` in `current_dir`
///
/// An explicit path is returned even if it does not exist, so that loading
/// it reports the error.
pub fn discover_config_path(explicit_path: Option<&Path>, current_dir: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check the current directory
  let local_config = current_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// # Returns
///
/// The loaded configuration, or `None` if discovery is disabled or no config
/// file is found.
pub fn load_config(explicit_path: Option<&Path>, current_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, current_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
