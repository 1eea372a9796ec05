//! # File Collector Module
//!
//! Turns the positional targets given on the command line into the ordered
//! list of files to process.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;

/// Characters that make a target a glob pattern rather than a path.
const GLOB_METACHARACTERS: [char; 3] = ['*', '?', '['];

/// Collects target files from paths and glob patterns.
pub struct FileCollector;

impl FileCollector {
  /// Expands `targets` into a list of files.
  ///
  /// - An existing path is used as given.
  /// - A target containing glob metacharacters is expanded; a pattern that
  ///   matches no file is an error.
  /// - Anything else is passed through and fails later when it is read.
  ///
  /// Files are returned in first-seen order with duplicates removed.
  pub fn collect(targets: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(targets.len());

    for target in targets {
      for path in Self::expand(target)? {
        if seen.insert(normalize_path(&path)) {
          files.push(path);
        } else {
          trace!("Skipping duplicate target: {}", path.display());
        }
      }
    }

    Ok(files)
  }

  fn expand(target: &str) -> Result<Vec<PathBuf>> {
    let path = PathBuf::from(target);
    if path.exists() || !is_glob_pattern(target) {
      return Ok(vec![path]);
    }

    let mut matches = Vec::new();
    for entry in glob::glob(target).with_context(|| format!("Invalid glob pattern: {}", target))? {
      let entry = entry.with_context(|| format!("Failed to expand glob pattern: {}", target))?;
      if entry.is_file() {
        matches.push(entry);
      }
    }

    if matches.is_empty() {
      anyhow::bail!("No files match pattern: {}", target);
    }

    Ok(matches)
  }
}

/// Returns `true` if `target` contains glob metacharacters.
pub fn is_glob_pattern(target: &str) -> bool {
  target.contains(GLOB_METACHARACTERS)
}

/// Removes `.` components so `./a.txt` and `a.txt` compare equal.
pub fn normalize_path(path: &Path) -> PathBuf {
  path
    .components()
    .filter(|component| !matches!(component, Component::CurDir))
    .collect()
}

/// Renders `path` relative to `base` when possible, for display.
pub fn display_path(path: &Path, base: &Path) -> String {
  let normalized = normalize_path(path);
  if normalized.is_absolute()
    && let Some(relative) = pathdiff::diff_paths(&normalized, base)
  {
    return relative.to_string_lossy().to_string();
  }
  normalized.to_string_lossy().to_string()
}
