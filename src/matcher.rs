//! # Header Matcher Module
//!
//! Detects and strips an existing header at the very start of a file.
//!
//! A header is a leading comment whose body mentions one of the field markers
//! `@license`, `@copyright` or `@file`. Comments without a marker are ordinary
//! comments and are never touched. Recognition is structural: each
//! [`Recognizer`] knows how its comment opens and closes and reports how many
//! bytes the header (plus the blank line after it) occupies.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::Dialect;

static FIELD_MARKER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"@(?:license|copyright|file)").expect("field marker regex must compile"));

/// Returns `true` if `text` contains one of the header field markers.
pub fn contains_field_marker(text: &str) -> bool {
  FIELD_MARKER.is_match(text)
}

/// A structural recognizer for one comment dialect.
pub trait Recognizer: Send + Sync {
  /// The dialect this recognizer understands.
  fn dialect(&self) -> Dialect;

  /// Returns the length of the header at the start of `content`, including
  /// the whitespace that separates it from the code, if there is one.
  fn find(&self, content: &str) -> Option<usize>;
}

/// Recognizes `open ... close` comments such as `/* */` and `<!-- -->`.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedRecognizer {
  dialect: Dialect,
  open: &'static str,
  close: &'static str,
}

impl DelimitedRecognizer {
  pub const fn block() -> Self {
    Self {
      dialect: Dialect::BlockComment,
      open: "/*",
      close: "*/",
    }
  }

  pub const fn markup() -> Self {
    Self {
      dialect: Dialect::MarkupComment,
      open: "<!--",
      close: "-->",
    }
  }
}

impl Recognizer for DelimitedRecognizer {
  fn dialect(&self) -> Dialect {
    self.dialect
  }

  fn find(&self, content: &str) -> Option<usize> {
    let rest = content.strip_prefix(self.open)?;
    let close_at = rest.find(self.close)?;
    if !contains_field_marker(&rest[..close_at]) {
      return None;
    }

    let comment_end = self.open.len() + close_at + self.close.len();
    Some(comment_end + after_close_len(&content[comment_end..]))
  }
}

/// Recognizes the run of `#` lines at the top of a file, shebang included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRecognizer;

impl Recognizer for ShellRecognizer {
  fn dialect(&self) -> Dialect {
    Dialect::ShellComment
  }

  fn find(&self, content: &str) -> Option<usize> {
    let mut end = 0;
    let mut has_marker = false;
    for line in content.split_inclusive('\n') {
      if !line.starts_with('#') {
        break;
      }
      has_marker |= contains_field_marker(line);
      end += line.len();
    }

    has_marker.then(|| end + separator_len(&content[end..]))
  }
}

/// Length of the first line of `rest` if it is whitespace-only.
///
/// Rendered headers end with exactly one blank separator line, so only one
/// is consumed and any blank lines that belong to the file survive.
fn separator_len(rest: &str) -> usize {
  rest
    .split_inclusive('\n')
    .next()
    .filter(|line| line.trim().is_empty())
    .map_or(0, str::len)
}

/// Length of the whitespace between a closing token and the code after it.
///
/// Consumes the remainder of the closing line when it is blank, then the
/// separator line. Indentation of the first code line is kept.
fn after_close_len(rest: &str) -> usize {
  let same_line = rest.len() - rest.trim_start_matches([' ', '\t', '\r']).len();
  match rest[same_line..].strip_prefix('\n') {
    Some(next) => same_line + 1 + separator_len(next),
    None if same_line == rest.len() => rest.len(),
    // Code continues on the closing line, e.g. `*/ run();`.
    None => same_line,
  }
}

/// Ordered set of recognizers applied to any file regardless of its type.
pub struct HeaderMatcher {
  recognizers: Vec<Box<dyn Recognizer>>,
}

impl Default for HeaderMatcher {
  fn default() -> Self {
    Self::new()
  }
}

impl HeaderMatcher {
  /// Block, markup and shell recognizers, in that order.
  pub fn new() -> Self {
    Self {
      recognizers: vec![
        Box::new(DelimitedRecognizer::block()),
        Box::new(DelimitedRecognizer::markup()),
        Box::new(ShellRecognizer),
      ],
    }
  }

  /// The first recognizer that matches, with the header length.
  pub fn find(&self, content: &str) -> Option<(Dialect, usize)> {
    self
      .recognizers
      .iter()
      .find_map(|r| r.find(content).map(|len| (r.dialect(), len)))
  }

  /// Returns `true` if any recognizer matches at the start of `content`.
  pub fn has_header(&self, content: &str) -> bool {
    self.find(content).is_some()
  }

  /// Strips the leading header, if present. Everything else is returned
  /// byte-for-byte.
  ///
  /// Only one blank line after the header is consumed, not all trailing
  /// whitespace, so content that starts with blank lines survives a round
  /// trip.
  pub fn remove_header(&self, content: &str) -> String {
    match self.find(content) {
      Some((_, len)) => content[len..].to_string(),
      None => content.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BLOCK_HEADER: &str = "/**\n * @file src/a.ts\n * @license MIT\n * @copyright 2025 Jane\n */\n\n";

  #[test]
  fn test_block_header_detected_and_removed() {
    let matcher = HeaderMatcher::new();
    let content = format!("{BLOCK_HEADER}export const x = 1;\n");

    assert!(matcher.has_header(&content));
    assert_eq!(matcher.remove_header(&content), "export const x = 1;\n");
  }

  #[test]
  fn test_plain_block_comment_is_not_a_header() {
    let matcher = HeaderMatcher::new();
    let content = "/* eslint-disable */\nconst a = 1;\n";

    assert!(!matcher.has_header(content));
    assert_eq!(matcher.remove_header(content), content);
  }

  #[test]
  fn test_marker_after_first_comment_is_ignored() {
    let matcher = HeaderMatcher::new();
    let content = "/* plain */\nconst a = 1; /* @license MIT */\n";
    assert!(!matcher.has_header(content));
  }

  #[test]
  fn test_single_star_block_comment() {
    let matcher = HeaderMatcher::new();
    let content = "/* @copyright 2020 Someone */\nbody { }\n";

    assert_eq!(matcher.find(content).map(|(d, _)| d), Some(Dialect::BlockComment));
    assert_eq!(matcher.remove_header(content), "body { }\n");
  }

  #[test]
  fn test_header_must_start_the_file() {
    let matcher = HeaderMatcher::new();
    assert!(!matcher.has_header("\n/** @license MIT */\n"));
    assert!(!matcher.has_header("const a = 1;\n/** @license MIT */\n"));
  }

  #[test]
  fn test_unterminated_comment() {
    let matcher = HeaderMatcher::new();
    assert!(!matcher.has_header("/** @license MIT\nconst a = 1;\n"));
  }

  #[test]
  fn test_markup_header() {
    let matcher = HeaderMatcher::new();
    let content = "<!--\n  @file index.html\n  @license MIT\n-->\n\n<!doctype html>\n";

    assert_eq!(matcher.find(content).map(|(d, _)| d), Some(Dialect::MarkupComment));
    assert_eq!(matcher.remove_header(content), "<!doctype html>\n");
  }

  #[test]
  fn test_shell_header_without_shebang() {
    let matcher = HeaderMatcher::new();
    let content = "# @file run.sh\n# @license MIT\n\necho hi\n";

    assert_eq!(matcher.find(content).map(|(d, _)| d), Some(Dialect::ShellComment));
    assert_eq!(matcher.remove_header(content), "echo hi\n");
  }

  #[test]
  fn test_shell_header_includes_shebang() {
    let matcher = HeaderMatcher::new();
    let content = "#!/bin/bash\n# @file run.sh\n# @license MIT\n\n#!/bin/sh\nset -e\n";

    assert!(matcher.has_header(content));
    assert_eq!(matcher.remove_header(content), "#!/bin/sh\nset -e\n");
  }

  #[test]
  fn test_shell_comments_without_marker() {
    let matcher = HeaderMatcher::new();
    let content = "#!/bin/sh\n# Usage: run.sh <arg>\n\necho hi\n";
    assert!(!matcher.has_header(content));
  }

  #[test]
  fn test_shell_run_stops_at_blank_line() {
    let matcher = HeaderMatcher::new();
    let content = "# @license MIT\n\n# usage notes\necho hi\n";
    assert_eq!(matcher.remove_header(content), "# usage notes\necho hi\n");
  }

  #[test]
  fn test_remove_is_idempotent() {
    let matcher = HeaderMatcher::new();
    let content = format!("{BLOCK_HEADER}/* regular comment */\ncode();\n");

    let once = matcher.remove_header(&content);
    let twice = matcher.remove_header(&once);
    assert_eq!(once, "/* regular comment */\ncode();\n");
    assert_eq!(once, twice);
  }

  #[test]
  fn test_other_dialects_are_recognized_in_any_file() {
    // Removal does not consult the file type.
    let matcher = HeaderMatcher::new();
    assert!(matcher.has_header("<!-- @license MIT -->\nexport {};\n"));
  }

  #[test]
  fn test_indentation_of_first_code_line_is_kept() {
    let matcher = HeaderMatcher::new();
    let content = "/** @file a.js */\n\n    indented();\n";
    assert_eq!(matcher.remove_header(content), "    indented();\n");
  }

  #[test]
  fn test_header_only_file() {
    let matcher = HeaderMatcher::new();
    assert_eq!(matcher.remove_header(BLOCK_HEADER), "");
    assert_eq!(matcher.remove_header("/** @license MIT */"), "");
    assert_eq!(matcher.remove_header("/** @license MIT */  \n  "), "");
  }

  #[test]
  fn test_only_the_separator_line_is_consumed() {
    let matcher = HeaderMatcher::new();
    assert_eq!(matcher.remove_header(&format!("{BLOCK_HEADER}\n\nlate();\n")), "\n\nlate();\n");
    assert_eq!(matcher.remove_header("# @file a.sh\n\n\necho\n"), "\necho\n");
  }

  #[test]
  fn test_code_on_closing_line() {
    let matcher = HeaderMatcher::new();
    assert_eq!(matcher.remove_header("/** @license MIT */ run();\n"), "run();\n");
  }

  #[test]
  fn test_field_marker() {
    assert!(contains_field_marker(" * @license MIT"));
    assert!(contains_field_marker("@copyright"));
    assert!(contains_field_marker("@file x"));
    assert!(!contains_field_marker("license copyright file"));
    assert!(!contains_field_marker("@License"));
  }
}
