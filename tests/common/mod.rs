#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use tempfile::TempDir;

pub const HEADER_FILENAME: &str = "HEADER.txt";

/// A temporary directory holding a header file and the files to process.
pub struct Workspace {
  pub dir: TempDir,
}

impl Workspace {
  /// Creates a workspace whose header file contains `header`.
  pub fn new(header: &str) -> Result<Self> {
    let dir = TempDir::new().context("Failed to create temp dir")?;
    fs::write(dir.path().join(HEADER_FILENAME), header).context("Failed to write header file")?;
    Ok(Self { dir })
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  pub fn header_path(&self) -> PathBuf {
    self.dir.path().join(HEADER_FILENAME)
  }

  /// Writes `content` to `name` inside the workspace and returns its path.
  pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
    let path = self.dir.path().join(name);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  pub fn read(&self, name: &str) -> Result<String> {
    let path = self.dir.path().join(name);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
  }

  /// An `add-header` command run from inside the workspace, with config
  /// discovery through the environment disabled.
  pub fn command(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("add-header")?;
    cmd
      .current_dir(self.dir.path())
      .env_remove("ADD_HEADER_CONFIG")
      .env_remove("RUST_LOG")
      .arg("--colors=never");
    Ok(cmd)
  }

  /// Like [`Workspace::command`], with `--header-filepath` already set.
  pub fn command_with_header(&self) -> Result<Command> {
    let mut cmd = self.command()?;
    cmd.arg("--header-filepath").arg(HEADER_FILENAME);
    Ok(cmd)
  }
}
