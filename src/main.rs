//! # edheader
//!
//! A tool that adds, checks and removes `@file`/`@license`/`@copyright`
//! headers in web and shell source files.

use anyhow::Result;
use edheader::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  if !run(cli.args)? {
    std::process::exit(1);
  }

  Ok(())
}
