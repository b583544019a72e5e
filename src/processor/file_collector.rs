//! # File Collector Module
//!
//! Turns the positional path arguments into the ordered, de-duplicated list
//! of files to process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::discovery::Discovery;

/// How a single path argument was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArgument {
  /// An existing file, used as-is
  File(PathBuf),
  /// An existing directory, walked with discovery
  Dir(PathBuf),
  /// A pattern containing glob metacharacters
  Glob(String),
  /// Nothing exists at this path; kept so the read failure is reported
  Missing(PathBuf),
}

impl PathArgument {
  pub fn parse(argument: &str) -> Self {
    let path = Path::new(argument);
    if path.is_file() {
      Self::File(path.to_path_buf())
    } else if path.is_dir() {
      Self::Dir(path.to_path_buf())
    } else if has_glob_metachars(argument) {
      Self::Glob(argument.to_string())
    } else {
      Self::Missing(path.to_path_buf())
    }
  }
}

fn has_glob_metachars(argument: &str) -> bool {
  argument.contains(['*', '?', '['])
}

/// File collector for path arguments and directory traversal.
pub struct FileCollector {
  discovery: Discovery,
}

impl FileCollector {
  pub const fn new(discovery: Discovery) -> Self {
    Self { discovery }
  }

  /// Walks a single directory, used when no path arguments are given.
  pub fn collect_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = absolutize_path(dir)?;
    self.discovery.discover(&dir)
  }

  /// Resolves every argument and returns the files in first-seen order.
  ///
  /// # Errors
  ///
  /// Fails on an invalid glob pattern or when a directory cannot be walked.
  pub fn collect(&self, arguments: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for argument in arguments {
      let resolved = match PathArgument::parse(argument) {
        PathArgument::File(path) | PathArgument::Missing(path) => vec![absolutize_path(&path)?],
        PathArgument::Dir(path) => self.collect_dir(&path)?,
        PathArgument::Glob(pattern) => self.expand_glob(&pattern)?,
      };

      for path in resolved {
        if seen.insert(path.clone()) {
          files.push(path);
        }
      }
    }

    debug!("Collected {} files from {} arguments", files.len(), arguments.len());
    Ok(files)
  }

  fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    for entry in entries {
      let path = match entry {
        Ok(path) => path,
        Err(e) => {
          warn!("Skipping unreadable glob match: {}", e);
          continue;
        }
      };

      if path.is_dir() {
        files.extend(self.collect_dir(&path)?);
      } else if path.is_file() {
        files.push(absolutize_path(&path)?);
      }
    }

    if files.is_empty() {
      debug!("Glob pattern matched no files: {}", pattern);
    }

    Ok(files)
  }
}

/// Converts a path to an absolute one, canonicalized when it exists.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  if let Ok(canonical) = path.canonicalize() {
    return Ok(canonical);
  }

  if path.is_absolute() {
    Ok(path.to_path_buf())
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    Ok(current_dir.join(path))
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn write(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, "x\n").expect("write file");
    path.canonicalize().expect("canonicalize")
  }

  fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
  }

  #[test]
  fn test_parse_arguments() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let file = write(temp_dir.path(), "a.ts");

    assert_eq!(PathArgument::parse(&arg(&file)), PathArgument::File(file.clone()));
    assert!(matches!(PathArgument::parse(&arg(temp_dir.path())), PathArgument::Dir(_)));
    assert!(matches!(PathArgument::parse("src/**/*.ts"), PathArgument::Glob(_)));
    assert!(matches!(
      PathArgument::parse(&arg(&temp_dir.path().join("nope.ts"))),
      PathArgument::Missing(_)
    ));
  }

  #[test]
  fn test_collect_dedups_in_order() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let b = write(temp_dir.path(), "src/b.ts");
    let a = write(temp_dir.path(), "src/a.ts");

    let collector = FileCollector::new(Discovery::new());
    let files = collector
      .collect(&[arg(&b), arg(&temp_dir.path().join("src")), arg(&b)])
      .expect("collect");

    assert_eq!(files, vec![b, a]);
  }

  #[test]
  fn test_explicit_file_is_kept_regardless_of_extension() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let json = write(temp_dir.path(), "package.json");

    let collector = FileCollector::new(Discovery::new());
    assert_eq!(collector.collect(&[arg(&json)]).expect("collect"), vec![json]);
  }

  #[test]
  fn test_glob_expansion() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let a = write(temp_dir.path(), "lib/a.js");
    write(temp_dir.path(), "lib/b.txt");

    let collector = FileCollector::new(Discovery::new());
    let pattern = format!("{}/lib/*.js", arg(temp_dir.path()));
    assert_eq!(collector.collect(&[pattern]).expect("collect"), vec![a]);
  }

  #[test]
  fn test_invalid_glob_is_an_error() {
    let collector = FileCollector::new(Discovery::new());
    assert!(collector.collect(&["src/[".to_string()]).is_err());
  }

  #[test]
  fn test_missing_path_is_kept() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let missing = temp_dir.path().join("gone.ts");

    let collector = FileCollector::new(Discovery::new());
    let files = collector.collect(&[arg(&missing)]).expect("collect");
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("gone.ts"));
  }

  #[test]
  fn test_absolutize_path_already_absolute() {
    let path = PathBuf::from("/absolute/path/that/does/not/exist");
    assert_eq!(absolutize_path(&path).expect("absolutize"), path);
  }
}
