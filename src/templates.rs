//! # Templates Module
//!
//! This module renders the fixed header layouts. Each [`TemplateKind`] has
//! exactly one layout; rendering substitutes the configured license, year and
//! author, and leaves two placeholders for the engine to fill per file:
//!
//! - `{filename}` - the file's path relative to the project root
//! - `{description}` - an optional free-text description
//!
//! ## Example
//!
//! ```rust
//! use edheader::classifier::TemplateKind;
//! use edheader::config::HeaderConfig;
//! use edheader::templates::TemplateManager;
//!
//! let config = HeaderConfig::new("Jane Doe", "MIT", 2025, "demo");
//! let manager = TemplateManager::new(config);
//!
//! let template = manager.render(TemplateKind::Style);
//! assert!(template.contains("@file {filename}"));
//!
//! let header = TemplateManager::fill(&template, "src/app.css", "");
//! assert!(header.starts_with("/**\n * @file src/app.css\n"));
//! ```

use crate::classifier::TemplateKind;
use crate::config::HeaderConfig;

/// Placeholder for the root-relative file path.
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Placeholder for the optional description.
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Interpreter line the shell template starts with.
pub const SHELL_SHEBANG: &str = "#!/bin/bash";

/// Renders header templates for a fixed [`HeaderConfig`].
#[derive(Debug, Clone)]
pub struct TemplateManager {
  config: HeaderConfig,
}

impl TemplateManager {
  pub const fn new(config: HeaderConfig) -> Self {
    Self { config }
  }

  /// Returns the header text for `kind` with `{filename}` and
  /// `{description}` left unresolved.
  ///
  /// Every layout ends with the closing line followed by one blank line.
  pub fn render(&self, kind: TemplateKind) -> String {
    let HeaderConfig {
      author, license, year, ..
    } = &self.config;

    match kind {
      TemplateKind::Script => format!(
        "/**\n * @file {FILENAME_PLACEHOLDER}\n * @description {DESCRIPTION_PLACEHOLDER}\n * @license {license}\n * @copyright {year} {author}\n */\n\n"
      ),
      TemplateKind::Style => format!(
        "/**\n * @file {FILENAME_PLACEHOLDER}\n * @license {license}\n * @copyright {year} {author}\n */\n\n"
      ),
      TemplateKind::Markup => format!(
        "<!--\n  @file {FILENAME_PLACEHOLDER}\n  @license {license}\n  @copyright {year} {author}\n-->\n\n"
      ),
      TemplateKind::Shell => format!(
        "{SHELL_SHEBANG}\n# @file {FILENAME_PLACEHOLDER}\n# @license {license}\n# @copyright {year} {author}\n\n"
      ),
    }
  }

  /// Resolves both placeholders and trims trailing spaces from every line,
  /// so an empty description does not leave a dangling blank.
  pub fn fill(template: &str, filename: &str, description: &str) -> String {
    let filled = template
      .replacen(FILENAME_PLACEHOLDER, filename, 1)
      .replacen(DESCRIPTION_PLACEHOLDER, description, 1);

    let mut result = String::with_capacity(filled.len());
    for line in filled.split_inclusive('\n') {
      let (body, newline) = match line.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (line, ""),
      };
      result.push_str(body.trim_end_matches([' ', '\t']));
      result.push_str(newline);
    }
    result
  }
}
