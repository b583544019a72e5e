//! # Logging Module
//!
//! Output is split across two channels:
//!
//! - `tracing` diagnostics, filtered by `-v`/`-q` or `RUST_LOG`, on stderr
//! - progress notes from [`verbose_log!`] (stderr, `-v` only) and
//!   [`info_log!`] (stdout, silenced by `-q`)
//!
//! Per-file status lines live in [`crate::output`], not here.
//!
//! ```rust
//! use edheader::logging::{ColorMode, set_verbose};
//! use edheader::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Reading {}", "src/index.ts");
//! info_log!("JSON report written to {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_normal, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// `eprintln!` that only fires under `-v`.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Run-level note on stdout, such as the dry-run reminder. Dropped under `-q`.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Backs [`info_log!`]; yellow when stdout takes colour.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
