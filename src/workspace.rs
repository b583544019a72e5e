//! # Workspace Module
//!
//! This module defines the project root that `{filename}` paths are made
//! relative to, and where `.edheader.toml` is looked up.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::git;

/// Project root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
  /// Root given with `--root`.
  Explicit { root: PathBuf },
  /// Workspace rooted at a git repository.
  Git { root: PathBuf },
  /// The current directory.
  Directory { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::Explicit { root } | Self::Git { root } | Self::Directory { root } => root.as_path(),
    }
  }

  pub const fn is_git(&self) -> bool {
    matches!(self, Self::Git { .. })
  }

  /// Name of the root directory, used as the default project name.
  pub fn name(&self) -> String {
    self
      .root()
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| "project".to_string())
  }
}

/// Resolve the project root: `--root` if given, else the enclosing git work
/// tree, else the current directory. The result is canonical.
pub fn resolve_workspace(explicit_root: Option<&Path>) -> Result<Workspace> {
  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  if let Some(root) = explicit_root {
    let root = current_dir.join(root);
    let root = root
      .canonicalize()
      .with_context(|| format!("Project root does not exist: {}", root.display()))?;
    return Ok(Workspace::Explicit { root });
  }

  if let Some(root) = git::discover_repo_root(&current_dir) {
    let root = root.canonicalize().unwrap_or(root);
    return Ok(Workspace::Git { root });
  }

  let root = current_dir.canonicalize().unwrap_or(current_dir);
  Ok(Workspace::Directory { root })
}
