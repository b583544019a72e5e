//! # Discovery Module
//!
//! Recursive directory walk that produces the candidate file list when no
//! explicit paths are given, or when a directory is passed on the command
//! line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classifier::is_supported;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "coverage", ".git", ".turbo"];

/// Walks directory trees and collects files with a recognized extension.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
  /// User patterns matched against the path relative to `base`
  ignore: Vec<glob::Pattern>,
  base: Option<PathBuf>,
}

impl Discovery {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds glob patterns that exclude files, matched against the path
  /// relative to `base` with `/` separators.
  pub fn with_ignore_patterns(mut self, patterns: &[String], base: &Path) -> Result<Self> {
    for pattern in patterns {
      let compiled = glob::Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
      self.ignore.push(compiled);
    }
    self.base = Some(base.to_path_buf());
    Ok(self)
  }

  /// Returns every supported file under `root`, sorted by path within each
  /// directory so the order is stable for a given tree.
  ///
  /// # Errors
  ///
  /// Fails only when `root` itself is missing or not a directory. Unreadable
  /// entries below it are logged and skipped.
  pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
      bail!("Discovery root does not exist or is not a directory: {}", root.display());
    }

    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let walker = WalkDir::new(root)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| !is_excluded_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Skipping unreadable entry: {}", e);
          continue;
        }
      };

      if !entry.file_type().is_file() || !is_supported(entry.path()) {
        continue;
      }

      if self.is_ignored(entry.path()) {
        trace!("Skipping: {} (matches ignore pattern)", entry.path().display());
        continue;
      }

      files.push(entry.into_path());
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }

  fn is_ignored(&self, path: &Path) -> bool {
    if self.ignore.is_empty() {
      return false;
    }

    let relative = match &self.base {
      Some(base) => path.strip_prefix(base).unwrap_or(path),
      None => path,
    };
    let relative = relative.to_string_lossy().replace('\\', "/");

    self.ignore.iter().any(|pattern| pattern.matches(&relative))
  }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
  entry.depth() > 0
    && entry.file_type().is_dir()
    && entry
      .file_name()
      .to_str()
      .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Walks `root` with the fixed exclusion set and no user patterns.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
  Discovery::new().discover(root)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, "x\n").expect("write file");
  }

  #[test]
  fn test_discover_filters_by_extension() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.ts");
    touch(temp_dir.path(), "b.json");
    touch(temp_dir.path(), "nested/c.css");
    touch(temp_dir.path(), "README");

    let files = discover(temp_dir.path()).expect("discover");
    let names: Vec<_> = files
      .iter()
      .map(|p| p.strip_prefix(temp_dir.path()).expect("under root").to_path_buf())
      .collect();

    assert_eq!(names, vec![PathBuf::from("a.ts"), PathBuf::from("nested/c.css")]);
  }

  #[test]
  fn test_discover_skips_excluded_dirs() {
    let temp_dir = TempDir::new().expect("create temp dir");
    for dir in EXCLUDED_DIRS {
      touch(temp_dir.path(), &format!("{dir}/inner.js"));
    }
    touch(temp_dir.path(), "deep/node_modules/pkg/index.js");
    touch(temp_dir.path(), "kept.js");

    let files = discover(temp_dir.path()).expect("discover");
    assert_eq!(files, vec![temp_dir.path().join("kept.js")]);
  }

  #[test]
  fn test_root_named_like_excluded_dir_is_walked() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "dist/app.js");

    let files = discover(&temp_dir.path().join("dist")).expect("discover");
    assert_eq!(files.len(), 1);
  }

  #[test]
  fn test_missing_root_is_an_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    assert!(discover(&temp_dir.path().join("missing")).is_err());
  }

  #[test]
  fn test_ignore_patterns() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "src/app.js");
    touch(temp_dir.path(), "src/vendor/lib.min.js");

    let discovery = Discovery::new()
      .with_ignore_patterns(&["**/*.min.js".to_string()], temp_dir.path())
      .expect("valid pattern");
    let files = discovery.discover(temp_dir.path()).expect("discover");

    assert_eq!(files, vec![temp_dir.path().join("src/app.js")]);
  }

  #[test]
  fn test_invalid_ignore_pattern() {
    let result = Discovery::new().with_ignore_patterns(&["[".to_string()], Path::new("."));
    assert!(result.is_err());
  }

  #[test]
  fn test_order_is_deterministic() {
    let temp_dir = TempDir::new().expect("create temp dir");
    for name in ["z.js", "a.js", "m/b.js", "c.js"] {
      touch(temp_dir.path(), name);
    }

    let first = discover(temp_dir.path()).expect("discover");
    let second = discover(temp_dir.path()).expect("discover");
    assert_eq!(first, second);
  }
}
