//! # Processor Module
//!
//! This module drives the header engine over files on disk: it reads each
//! file, applies the selected [`Mode`], writes the result back, and turns
//! every outcome into a [`FileReport`].
//!
//! The module is organized into two submodules:
//! - [`file_io`] - Whole-file reads and atomic writes
//! - [`file_collector`] - Resolution of path arguments into a file list
//!
//! Files are processed one at a time, in the order they were collected. A
//! failure on one file is recorded in its report and never stops the run.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_collector::{FileCollector, PathArgument, absolutize_path};
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::classifier::is_supported;
use crate::diff::DiffManager;
use crate::engine::{AddOutcome, HeaderEngine, RemoveOutcome};
use crate::report::{FileReport, FileStatus};
use crate::verbose_log;

/// What a run does to each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
  /// Prepend a header where one is missing
  #[default]
  Add,
  /// Report header presence, never modify
  Check,
  /// Strip existing headers
  Remove,
}

impl Mode {
  pub const fn as_str(self) -> &'static str {
    match self {
      Mode::Add => "add",
      Mode::Check => "check",
      Mode::Remove => "remove",
    }
  }
}

impl std::fmt::Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub engine: HeaderEngine,
  pub mode: Mode,

  /// Value for `{description}` in add mode
  pub description: String,

  /// Compute results without writing them
  pub dry_run: bool,

  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     dry_run: true,
  ///     ..ProcessorConfig::new(engine, Mode::Remove)
  /// }
  /// ```
  pub fn new(engine: HeaderEngine, mode: Mode) -> Self {
    Self {
      engine,
      mode,
      description: String::new(),
      dry_run: false,
      diff_manager: None,
    }
  }
}

/// Processor for applying one [`Mode`] to a list of files.
pub struct Processor {
  engine: HeaderEngine,
  mode: Mode,
  description: String,
  dry_run: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,
}

impl Processor {
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      engine: config.engine,
      mode: config.mode,
      description: config.description,
      dry_run: config.dry_run,
      diff_manager: config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None)),
    }
  }

  /// Processes every file in order and returns one report per file.
  pub fn process_files(&self, files: &[PathBuf]) -> Vec<FileReport> {
    debug!("Processing {} files in {} mode", files.len(), self.mode);
    files.iter().map(|path| self.process_file(path)).collect()
  }

  /// Processes a single file.
  ///
  /// I/O failures are captured as [`FileStatus::Error`]; this never fails.
  pub fn process_file(&self, path: &Path) -> FileReport {
    let status = match self.mode {
      Mode::Add => self.add_header(path),
      Mode::Check => self.check_header(path),
      Mode::Remove => self.remove_header(path),
    };

    let status = status.unwrap_or_else(|e| {
      warn!("{}: {:#}", path.display(), e);
      FileStatus::Error(format!("{:#}", e))
    });

    trace!("{}: {}", path.display(), status);
    FileReport::new(path, status)
  }

  fn check_header(&self, path: &Path) -> Result<FileStatus> {
    let content = FileIO::read_content(path)?;

    if self.engine.check(path, &content) {
      Ok(FileStatus::HeaderPresent)
    } else {
      Ok(FileStatus::HeaderAbsent)
    }
  }

  fn add_header(&self, path: &Path) -> Result<FileStatus> {
    // Unsupported files are never read.
    if !is_supported(path) {
      return Ok(FileStatus::SkippedUnsupported);
    }

    let content = FileIO::read_content(path)?;
    match self.engine.add(path, &content, &self.description) {
      AddOutcome::Unsupported => Ok(FileStatus::SkippedUnsupported),
      AddOutcome::AlreadyPresent => Ok(FileStatus::SkippedAlreadyPresent),
      AddOutcome::Added(new_content) => {
        self.commit(path, &content, &new_content)?;
        verbose_log!("Added header to: {}", path.display());
        Ok(FileStatus::HeaderAdded)
      }
    }
  }

  fn remove_header(&self, path: &Path) -> Result<FileStatus> {
    let content = FileIO::read_content(path)?;
    match self.engine.remove(path, &content) {
      RemoveOutcome::NothingToRemove => Ok(FileStatus::SkippedNothingToRemove),
      RemoveOutcome::Removed(new_content) => {
        self.commit(path, &content, &new_content)?;
        verbose_log!("Removed header from: {}", path.display());
        Ok(FileStatus::HeaderRemoved)
      }
    }
  }

  /// Shows the change if requested, then writes it unless this is a dry run.
  fn commit(&self, path: &Path, original: &str, updated: &str) -> Result<()> {
    if self.diff_manager.is_enabled()
      && let Err(e) = self
        .diff_manager
        .display_diff(Path::new(&self.engine.relative_name(path)), original, updated)
    {
      warn!("Failed to display diff for {}: {}", path.display(), e);
    }

    if self.dry_run {
      trace!("Dry run, not writing {}", path.display());
      return Ok(());
    }

    FileIO::write_atomic(path, updated)
  }
}
