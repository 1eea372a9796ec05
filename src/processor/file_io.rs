//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Files are read whole and replaced atomically: the new content goes to a
//! temporary file in the same directory which is then renamed over the
//! target, so an interrupted run never leaves a half-written file behind.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::trace;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be opened or is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace the file's content atomically.
  ///
  /// A symlink is followed: the file it points to receives the new content
  /// and the link itself is left in place. The original file's permissions
  /// are carried over to the replacement.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to replace
  /// * `content` - The complete new content
  pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    if target != path {
      trace!("Resolved {} to {}", path.display(), target.display());
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let permissions = fs::metadata(&target)
      .with_context(|| format!("Failed to read metadata: {}", target.display()))?
      .permissions();

    let mut temp = NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    trace!("Writing {} bytes to {}", content.len(), temp.path().display());

    temp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;
    temp
      .as_file()
      .sync_all()
      .with_context(|| format!("Failed to flush temporary file for: {}", path.display()))?;
    fs::set_permissions(temp.path(), permissions)
      .with_context(|| format!("Failed to copy permissions for: {}", path.display()))?;

    temp
      .persist(&target)
      .with_context(|| format!("Failed to write file: {}", target.display()))?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_write_atomic_replaces_content() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("file.txt");
    fs::write(&path, "old content\n").expect("write file");

    FileIO::write_atomic(&path, "new content\n").expect("atomic write");

    assert_eq!(FileIO::read_full_content(&path).expect("read"), "new content\n");
    let leftovers: Vec<_> = fs::read_dir(dir.path()).expect("read dir").collect();
    assert_eq!(leftovers.len(), 1, "temporary file should have been renamed away");
  }

  #[cfg(unix)]
  #[test]
  fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("script.sh");
    fs::write(&path, "echo hi\n").expect("write file");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");

    FileIO::write_atomic(&path, "# header\necho hi\n").expect("atomic write");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_atomic_writes_through_symlink() {
    let dir = tempdir().expect("create temp dir");
    let real = dir.path().join("real.py");
    let link = dir.path().join("link.py");
    fs::write(&real, "x = 1\n").expect("write file");
    std::os::unix::fs::symlink(&real, &link).expect("create symlink");

    FileIO::write_atomic(&link, "# Copyright\nx = 1\n").expect("atomic write");

    assert!(fs::symlink_metadata(&link).expect("link metadata").file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).expect("read real"), "# Copyright\nx = 1\n");
    let entries: Vec<_> = fs::read_dir(dir.path()).expect("read dir").collect();
    assert_eq!(entries.len(), 2, "temporary file should have been renamed away");
  }

  #[test]
  fn test_write_atomic_missing_target_fails() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("missing.txt");

    assert!(FileIO::write_atomic(&path, "content").is_err());
    assert!(!path.exists());
  }

  #[test]
  fn test_read_missing_file_fails() {
    let err = FileIO::read_full_content(Path::new("/nonexistent/file.txt")).expect_err("should fail");

    assert!(err.to_string().contains("Failed to read file"));
  }
}
