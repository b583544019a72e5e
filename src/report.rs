//! # Report Module
//!
//! Per-file outcomes, the run summary, and machine-readable reports (JSON,
//! CSV) of both.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::processor::Mode;

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "detail")]
pub enum FileStatus {
  /// Check mode: a header is present
  HeaderPresent,
  /// Check mode: no header
  HeaderAbsent,
  /// Add mode: a header was written
  HeaderAdded,
  /// Remove mode: the header was stripped
  HeaderRemoved,
  /// Add mode: extension not recognized
  SkippedUnsupported,
  /// Add mode: file already had a header
  SkippedAlreadyPresent,
  /// Remove mode: file had no header
  SkippedNothingToRemove,
  /// The file could not be read or written
  Error(String),
}

impl FileStatus {
  /// Whether the file counts towards the "processed" tally.
  pub const fn is_processed(&self) -> bool {
    matches!(self, Self::HeaderPresent | Self::HeaderAdded | Self::HeaderRemoved)
  }

  /// Stable machine-readable name.
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::HeaderPresent => "header-present",
      Self::HeaderAbsent => "header-absent",
      Self::HeaderAdded => "header-added",
      Self::HeaderRemoved => "header-removed",
      Self::SkippedUnsupported => "skipped-unsupported",
      Self::SkippedAlreadyPresent => "skipped-already-present",
      Self::SkippedNothingToRemove => "skipped-nothing-to-remove",
      Self::Error(_) => "error",
    }
  }
}

impl std::fmt::Display for FileStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Error(message) => write!(f, "error: {message}"),
      other => f.write_str(other.as_str()),
    }
  }
}

/// Information about a processed file for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// What happened to it
  #[serde(flatten)]
  pub status: FileStatus,
}

impl FileReport {
  pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
    Self {
      path: path.into(),
      status,
    }
  }
}

/// Summary of the processing results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingSummary {
  /// Files considered
  pub total_files: usize,
  /// Files counted as processed for the active mode
  pub processed: usize,
  pub header_present: usize,
  pub header_absent: usize,
  pub header_added: usize,
  pub header_removed: usize,
  pub skipped_unsupported: usize,
  pub skipped_already_present: usize,
  pub skipped_nothing_to_remove: usize,
  pub errors: usize,
  /// Wall-clock time of the run
  #[serde(skip)]
  pub processing_time: Duration,
}

impl ProcessingSummary {
  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: files.len(),
      processing_time,
      ..Self::default()
    };

    for file in files {
      if file.status.is_processed() {
        summary.processed += 1;
      }

      let counter = match file.status {
        FileStatus::HeaderPresent => &mut summary.header_present,
        FileStatus::HeaderAbsent => &mut summary.header_absent,
        FileStatus::HeaderAdded => &mut summary.header_added,
        FileStatus::HeaderRemoved => &mut summary.header_removed,
        FileStatus::SkippedUnsupported => &mut summary.skipped_unsupported,
        FileStatus::SkippedAlreadyPresent => &mut summary.skipped_already_present,
        FileStatus::SkippedNothingToRemove => &mut summary.skipped_nothing_to_remove,
        FileStatus::Error(_) => &mut summary.errors,
      };
      *counter += 1;
    }

    summary
  }

  /// True when every considered file was processed.
  pub const fn all_processed(&self) -> bool {
    self.processed == self.total_files
  }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

/// Error returned when parsing a string into a ReportFormat fails
#[derive(Debug, thiserror::Error)]
#[error("Invalid report format: {0}")]
pub struct ParseReportFormatError(pub String);

impl std::str::FromStr for ReportFormat {
  type Err = ParseReportFormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "json" => Ok(ReportFormat::Json),
      "csv" => Ok(ReportFormat::Csv),
      _ => Err(ParseReportFormatError(s.to_string())),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  project: &'a str,
  mode: &'a str,
  generated_at: String,
  processing_time_seconds: f64,
  summary: &'a ProcessingSummary,
  files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
  path: String,
  #[serde(flatten)]
  status: &'a FileStatus,
}

/// Writes reports of a finished run.
pub struct ReportGenerator<'a> {
  format: ReportFormat,
  output_path: &'a Path,
  /// Paths in the report are written relative to this root
  project_root: &'a Path,
  project_name: &'a str,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(format: ReportFormat, output_path: &'a Path, project_root: &'a Path, project_name: &'a str) -> Self {
    Self {
      format,
      output_path,
      project_root,
      project_name,
    }
  }

  /// Render the report and write it to the output path.
  pub fn generate(&self, mode: Mode, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let content = self.render(mode, files, summary)?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write {} report to {}", self.format, self.output_path.display()))
  }

  /// Render the report without writing it.
  pub fn render(&self, mode: Mode, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    match self.format {
      ReportFormat::Json => self.render_json(mode, files, summary),
      ReportFormat::Csv => Ok(self.render_csv(mode, files, summary)),
    }
  }

  fn render_json(&self, mode: Mode, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    let report = JsonReport {
      project: self.project_name,
      mode: mode.as_str(),
      generated_at: Local::now().to_rfc3339(),
      processing_time_seconds: summary.processing_time.as_secs_f64(),
      summary,
      files: files
        .iter()
        .map(|file| JsonFile {
          path: self.display_path(&file.path),
          status: &file.status,
        })
        .collect(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
  }

  fn render_csv(&self, mode: Mode, files: &[FileReport], summary: &ProcessingSummary) -> String {
    let mut csv = String::from("file_path,status,detail\n");

    for file in files {
      let detail = match &file.status {
        FileStatus::Error(message) => csv_field(message),
        _ => String::new(),
      };
      csv.push_str(&format!(
        "{},{},{}\n",
        csv_field(&self.display_path(&file.path)),
        file.status.as_str(),
        detail
      ));
    }

    csv.push_str("\n# Summary\n");
    csv.push_str(&format!("Project,{}\n", csv_field(self.project_name)));
    csv.push_str(&format!("Mode,{}\n", mode.as_str()));
    csv.push_str(&format!("Total files,{}\n", summary.total_files));
    csv.push_str(&format!("Processed,{}\n", summary.processed));
    csv.push_str(&format!("Errors,{}\n", summary.errors));
    csv.push_str(&format!(
      "Processing time (seconds),{:.2}\n",
      summary.processing_time.as_secs_f64()
    ));

    csv
  }

  fn display_path(&self, path: &Path) -> String {
    path
      .strip_prefix(self.project_root)
      .unwrap_or(path)
      .to_string_lossy()
      .replace('\\', "/")
  }
}

/// Quotes a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
  if value.contains([',', '"', '\n']) {
    format!("\"{}\"", value.replace('"', "\"\""))
  } else {
    value.to_string()
  }
}
