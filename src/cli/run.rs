//! # Run Command
//!
//! Resolves the workspace and configuration, collects files, processes them
//! and prints the results.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::classifier::supported_extensions;
use crate::config::{CliOverrides, Defaults, load_config, resolve_header_config};
use crate::diff::DiffManager;
use crate::discovery::Discovery;
use crate::engine::HeaderEngine;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  missing_headers, print_file_status, print_missing_files, print_no_files, print_start_message, print_summary,
};
use crate::processor::{FileCollector, Mode, Processor, ProcessorConfig};
use crate::report::{FileReport, ProcessingSummary, ReportFormat, ReportGenerator};
use crate::workspace::resolve_workspace;
use crate::{git, info_log};

/// Directory walked when neither paths nor `source-dir` are given.
const DEFAULT_SOURCE_DIR: &str = "src";

/// Arguments for a run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Files, directories or glob patterns to process. Directories are
  /// processed recursively. Defaults to the project's source directory.
  #[arg(value_name = "PATHS")]
  pub paths: Vec<String>,

  /// Report whether each file has a header without modifying anything
  #[arg(long, group = "mode")]
  pub check: bool,

  /// Remove existing headers
  #[arg(long, group = "mode")]
  pub remove: bool,

  /// Description written into new headers
  #[arg(long, short = 'd', value_name = "TEXT")]
  pub description: Option<String>,

  /// Project root used for relative file names (default: git work tree or
  /// current directory)
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Copyright holder (default: git user.name)
  #[arg(long)]
  pub author: Option<String>,

  /// License identifier (default: MIT)
  #[arg(long)]
  pub license: Option<String>,

  /// Copyright year (default: current year)
  #[arg(long, value_parser = clap::value_parser!(i32).range(1..=9999))]
  pub year: Option<i32>,

  /// Project name (default: name of the project root directory)
  #[arg(long)]
  pub project_name: Option<String>,

  /// Path to config file (default: .edheader.toml in the project root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// File patterns to exclude from discovery (supports glob patterns)
  #[arg(long, short = 'i', value_name = "GLOB")]
  pub ignore: Vec<String>,

  /// Compute changes without writing them
  #[arg(long)]
  pub dry_run: bool,

  /// Print a diff of every change to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Append a diff of every change to a file
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Write a CSV report to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl RunArgs {
  pub const fn mode(&self) -> Mode {
    if self.check {
      Mode::Check
    } else if self.remove {
      Mode::Remove
    } else {
      Mode::Add
    }
  }
}

/// Runs edheader with the given arguments.
///
/// Returns `Ok(false)` when a check run found files without a header; the
/// caller turns that into a failing exit status.
///
/// # Errors
///
/// Fails on run-level problems only: an unreadable or invalid config file, an
/// invalid glob, or a discovery root that does not exist.
pub fn run(args: RunArgs) -> Result<bool> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let mode = args.mode();
  let workspace = resolve_workspace(args.root.as_deref())?;
  let workspace_root = workspace.root().to_path_buf();
  debug!(
    "Using project root: {} (git repository: {})",
    workspace_root.display(),
    workspace.is_git()
  );

  let file_config = load_config(args.config.as_deref(), &workspace_root, args.no_config)?;

  let defaults = Defaults {
    author: git::configured_user_name(&workspace_root),
    year: chrono::Local::now().year(),
    project_name: workspace.name(),
  };
  let overrides = CliOverrides {
    author: args.author,
    license: args.license,
    year: args.year,
    project_name: args.project_name,
  };
  let header_config = resolve_header_config(defaults, &file_config, overrides);
  debug!("Header values: {:?}", header_config);
  let project_name = header_config.project_name.clone();

  let mut ignore_patterns = file_config.ignore.clone();
  ignore_patterns.extend(args.ignore);
  let discovery = Discovery::new().with_ignore_patterns(&ignore_patterns, &workspace_root)?;
  let collector = FileCollector::new(discovery);

  let files = if args.paths.is_empty() {
    let source_dir = file_config
      .source_dir
      .clone()
      .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    collector.collect_dir(&workspace_root.join(source_dir))?
  } else {
    collector.collect(&args.paths)?
  };

  if files.is_empty() {
    debug!("Supported extensions: {}", supported_extensions());
    print_no_files();
    return Ok(true);
  }

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  let description = args.description.or(file_config.description).unwrap_or_default();

  let processor = Processor::new(ProcessorConfig {
    description,
    dry_run: args.dry_run,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(HeaderEngine::new(header_config, &workspace_root), mode)
  });

  print_start_message(mode, files.len(), args.dry_run);

  let start_time = Instant::now();
  let mut reports = Vec::with_capacity(files.len());
  for file in &files {
    let report = processor.process_file(file);
    print_file_status(&report, Some(&workspace_root));
    reports.push(report);
  }
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  if mode == Mode::Check {
    print_missing_files(&missing_headers(&reports), Some(&workspace_root));
  }
  print_summary(&summary);

  if args.dry_run && mode != Mode::Check {
    info_log!("Dry run: no files were modified.");
  }

  let report_targets = [
    (ReportFormat::Json, args.report_json),
    (ReportFormat::Csv, args.report_csv),
  ];
  for (format, path) in report_targets {
    if let Some(path) = path {
      write_report(format, &path, &workspace_root, &project_name, mode, &reports, &summary);
    }
  }

  Ok(mode != Mode::Check || summary.all_processed())
}

/// Report failures are printed and otherwise ignored.
fn write_report(
  format: ReportFormat,
  path: &std::path::Path,
  workspace_root: &std::path::Path,
  project_name: &str,
  mode: Mode,
  reports: &[FileReport],
  summary: &ProcessingSummary,
) {
  let generator = ReportGenerator::new(format, path, workspace_root, project_name);
  match generator.generate(mode, reports, summary) {
    Ok(()) => info_log!("{} report written to {}", format, path.display()),
    Err(e) => eprintln!("ERROR: {:#}", e),
  }
}
