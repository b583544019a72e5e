#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;

/// Author passed to every CLI run so headers do not depend on git config.
pub const TEST_AUTHOR: &str = "Test Author";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Reads `root/relative` back as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// An `edheader` command rooted at `root` with colors off, a fixed author,
/// and no config file picked up from the environment.
pub fn edheader(root: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("edheader")?;
  cmd
    .current_dir(root)
    .env_remove("EDHEADER_CONFIG")
    .env_remove("RUST_LOG")
    .arg("--root")
    .arg(root)
    .arg("--colors=never")
    .arg("--author")
    .arg(TEST_AUTHOR);
  Ok(cmd)
}

/// The current local year, as used for default headers.
pub fn current_year() -> i32 {
  use chrono::Datelike;
  chrono::Local::now().year()
}
