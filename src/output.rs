//! # Output Module
//!
//! This module centralizes all user-facing output for the edheader tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: One line per file, one tally line per run
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: In quiet mode `--check` prints only the paths missing a
//!   header

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::Mode;
use crate::report::{FileReport, FileStatus, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Skipped
  pub const SKIPPED: &str = "-";
}

/// Maximum number of files to show in the missing-header recap before
/// truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Print the initial "Checking N files..." style message.
pub fn print_start_message(mode: Mode, file_count: usize, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let action = match mode {
    Mode::Add => format!("Adding headers to {} {}", file_count, plural(file_count)),
    Mode::Check => format!("Checking {} {}", file_count, plural(file_count)),
    Mode::Remove => format!("Removing headers from {} {}", file_count, plural(file_count)),
  };

  if dry_run && mode != Mode::Check {
    println!("{}... {}", action, "(dry run)".if_supports_color(Stream::Stdout, |s| s.dimmed()));
  } else {
    println!("{}...", action);
  }
}

/// Print the message for a run that found nothing to do.
pub fn print_no_files() {
  if is_quiet() {
    return;
  }

  println!("No files found to process.");
}

/// Print one status line for a processed file.
///
/// Errors always go to stderr, even in quiet mode.
pub fn print_file_status(report: &FileReport, workspace_root: Option<&Path>) {
  let display_path = make_relative_path(&report.path, workspace_root);

  if let FileStatus::Error(message) = &report.status {
    eprintln!(
      "  {} {} ({})",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      display_path,
      message
    );
    return;
  }

  if is_quiet() {
    return;
  }

  let (symbol, note) = match &report.status {
    FileStatus::HeaderPresent => (success(), "header present"),
    FileStatus::HeaderAdded => (success(), "header added"),
    FileStatus::HeaderRemoved => (success(), "header removed"),
    FileStatus::HeaderAbsent => (
      symbols::FAILURE
        .if_supports_color(Stream::Stdout, |s| s.red())
        .to_string(),
      "missing header",
    ),
    FileStatus::SkippedUnsupported => (skipped(), "skipped: unsupported file type"),
    FileStatus::SkippedAlreadyPresent => (skipped(), "skipped: header already present"),
    FileStatus::SkippedNothingToRemove => (skipped(), "skipped: no header to remove"),
    FileStatus::Error(_) => return,
  };

  println!("  {} {} ({})", symbol, display_path, note);
}

fn success() -> String {
  symbols::SUCCESS
    .if_supports_color(Stream::Stdout, |s| s.green())
    .to_string()
}

fn skipped() -> String {
  symbols::SKIPPED
    .if_supports_color(Stream::Stdout, |s| s.dimmed())
    .to_string()
}

/// Reports of files that lack a header, in check mode.
pub fn missing_headers(reports: &[FileReport]) -> Vec<&FileReport> {
  reports
    .iter()
    .filter(|report| report.status == FileStatus::HeaderAbsent)
    .collect()
}

/// Print the list of files missing headers.
///
/// In quiet mode only the paths are printed, one per line. Otherwise a
/// heading is printed and the list is truncated unless verbose.
pub fn print_missing_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  if is_quiet() {
    for file in &sorted_files {
      println!("{}", make_relative_path(&file.path, workspace_root));
    }
    return;
  }

  let count = sorted_files.len();
  println!(
    "{} {} {} missing headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    plural(count)
  );

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in sorted_files.iter().take(limit) {
    println!("  {}", make_relative_path(&file.path, workspace_root));
  }

  if !show_all && count > limit {
    println!("  ... and {} more (use -v to see all)", count - limit);
  }
}

/// Print the final tally.
///
/// Format: "Done! X/Y files processed." In verbose mode, also shows the
/// per-status breakdown and timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let processed = if summary.all_processed() {
    summary
      .processed
      .if_supports_color(Stream::Stdout, |s| s.green())
      .to_string()
  } else {
    summary
      .processed
      .if_supports_color(Stream::Stdout, |s| s.yellow())
      .to_string()
  };

  let mut line = format!(
    "Done! {}/{} {} processed.",
    processed,
    summary.total_files,
    plural(summary.total_files)
  );

  if is_verbose() {
    line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", line);

  if is_verbose() {
    let skipped =
      summary.skipped_unsupported + summary.skipped_already_present + summary.skipped_nothing_to_remove;
    println!(
      "  {} skipped, {} missing, {} {}",
      skipped,
      summary.header_absent,
      summary.errors,
      if summary.errors == 1 { "error" } else { "errors" }
    );
  }
}

/// Make a path relative to the workspace root for display.
pub fn make_relative_path(path: &Path, workspace_root: Option<&Path>) -> String {
  let relative = match workspace_root {
    Some(root) => path.strip_prefix(root).unwrap_or(path),
    None => path,
  };
  relative.to_string_lossy().replace('\\', "/")
}
