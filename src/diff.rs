//! # Diff Module
//!
//! This module renders unified diffs between a file's content before and
//! after a header change. Diffs can be printed to stderr, appended to a file,
//! or both.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::TextDiff;

/// Manages diff creation and rendering for header changes.
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that every diff is appended to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Renders the unified diff of `original` against `new` for `path`.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(original, new)
      .unified_diff()
      .context_radius(3)
      .header(&format!("a/{name}"), &format!("b/{name}"))
      .to_string()
  }

  /// Displays and/or saves the diff for one file.
  ///
  /// Diffs from several files are appended to the same save file, creating
  /// a single consolidated patch.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let diff = Self::render(path, original, new);

    if self.show_diff {
      for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.bold()));
        } else if line.starts_with('+') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
        } else if line.starts_with('-') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
        } else if line.starts_with("@@") {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.cyan()));
        } else {
          eprintln!("{line}");
        }
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(diff.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
