//! # Header Engine Module
//!
//! Pure add / check / remove operations over a single file's content. The
//! engine never touches the filesystem; the [`processor`](crate::processor)
//! reads and writes files around it.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::classifier::classify;
use crate::config::HeaderConfig;
use crate::matcher::HeaderMatcher;
use crate::templates::TemplateManager;

/// Result of [`HeaderEngine::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
  /// The extension is not in the table; content is unchanged.
  Unsupported,
  /// A header is already there; content is unchanged.
  AlreadyPresent,
  /// The new content with the header prepended.
  Added(String),
}

/// Result of [`HeaderEngine::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
  /// No header was detected; content is unchanged.
  NothingToRemove,
  /// The content with the leading header stripped.
  Removed(String),
}

/// Adds, detects and removes headers for files under one project root.
pub struct HeaderEngine {
  templates: TemplateManager,
  matcher: HeaderMatcher,
  project_root: PathBuf,
}

impl HeaderEngine {
  /// Creates an engine that renders headers from `config` and computes
  /// `{filename}` relative to `project_root`.
  pub fn new(config: HeaderConfig, project_root: impl Into<PathBuf>) -> Self {
    Self {
      templates: TemplateManager::new(config),
      matcher: HeaderMatcher::new(),
      project_root: project_root.into(),
    }
  }

  /// Returns whether `content` starts with a header.
  pub fn check(&self, _path: &Path, content: &str) -> bool {
    self.matcher.has_header(content)
  }

  /// Prepends a freshly rendered header.
  ///
  /// Refuses to touch unsupported files and files that already carry a
  /// header; an existing header is never refreshed or stacked.
  pub fn add(&self, path: &Path, content: &str, description: &str) -> AddOutcome {
    let Some(kind) = classify(path) else {
      trace!("No template for {}", path.display());
      return AddOutcome::Unsupported;
    };

    if self.matcher.has_header(content) {
      return AddOutcome::AlreadyPresent;
    }

    let template = self.templates.render(kind);
    let header = TemplateManager::fill(&template, &self.relative_name(path), description);
    AddOutcome::Added(header + content)
  }

  /// Strips the leading header, if there is one.
  ///
  /// Every recognizer is tried regardless of the file's own type, so a header
  /// written in another comment dialect is removed as well.
  pub fn remove(&self, _path: &Path, content: &str) -> RemoveOutcome {
    if !self.matcher.has_header(content) {
      return RemoveOutcome::NothingToRemove;
    }

    RemoveOutcome::Removed(self.matcher.remove_header(content))
  }

  /// Path of `path` relative to the project root, always with `/`.
  pub fn relative_name(&self, path: &Path) -> String {
    let relative: Cow<'_, Path> = if path.is_absolute() {
      match path.strip_prefix(&self.project_root) {
        Ok(stripped) => Cow::Borrowed(stripped),
        Err(_) => pathdiff::diff_paths(path, &self.project_root)
          .map(Cow::Owned)
          .unwrap_or(Cow::Borrowed(path)),
      }
    } else {
      Cow::Borrowed(path)
    };

    let name = relative.to_string_lossy().replace('\\', "/");
    name.strip_prefix("./").map(str::to_string).unwrap_or(name)
  }
}
