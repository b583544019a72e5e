//! # Git Module
//!
//! Small read-only queries against the enclosing git repository: where its
//! work tree starts and who the configured user is.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

/// Returns the work tree root of the repository containing `start`, if any.
///
/// Bare repositories have no work tree and yield `None`.
pub fn discover_repo_root(start: &Path) -> Option<PathBuf> {
  match Repository::discover(start) {
    Ok(repo) => repo.workdir().map(Path::to_path_buf),
    Err(e) => {
      debug!("No git repository at {}: {}", start.display(), e.message());
      None
    }
  }
}

/// Returns `user.name` from the repository at `root`, falling back to the
/// global git configuration.
pub fn configured_user_name(root: &Path) -> Option<String> {
  let config = match Repository::discover(root) {
    Ok(repo) => repo.config().ok()?,
    Err(_) => git2::Config::open_default().ok()?,
  };

  config
    .get_string("user.name")
    .ok()
    .map(|name| name.trim().to_string())
    .filter(|name| !name.is_empty())
}
