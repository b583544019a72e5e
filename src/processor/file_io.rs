//! # File I/O Module
//!
//! Reading files whole and replacing them atomically, so an interrupted run
//! never leaves a half-written source file behind.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  pub fn read_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replaces `path` with `content`.
  ///
  /// The content goes to a temporary file in the same directory, which takes
  /// over the original's permissions and is then renamed over it.
  pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)
      .with_context(|| format!("Failed to create temporary file next to {}", path.display()))?;
    temp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write file: {}", path.display()))?;
    temp
      .as_file()
      .sync_all()
      .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    if let Ok(metadata) = std::fs::metadata(path) {
      std::fs::set_permissions(temp.path(), metadata.permissions())
        .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;
    }

    temp
      .persist(path)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }
}
