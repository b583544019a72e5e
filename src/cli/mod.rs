//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod run;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use run::{RunArgs, run};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "edheader",
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Supported extensions:
  .js .mjs .cjs .jsx .ts .tsx .mts .cts .css .scss .less .html .htm .sh .bash

Examples:
  # Add headers to every supported file under src/
  edheader

  # Add a header with a description to one file
  edheader -d \"Entry point\" src/index.ts

  # Fail if any file is missing a header
  edheader --check

  # List only the files missing a header
  edheader --check -q

  # Preview header removal without touching files
  edheader --remove --dry-run --show-diff src/

  # Skip generated code and write a JSON report
  edheader --ignore \"**/*.min.js\" --report-json headers.json src/ scripts/
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub args: RunArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
