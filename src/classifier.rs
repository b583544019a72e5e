//! # Classifier Module
//!
//! Maps a file path to the header template it should receive. The lookup is a
//! case-insensitive exact match on the extension (including the leading dot)
//! against a fixed table; anything not in the table is unsupported.

use std::path::Path;

/// Structural comment family a header is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
  /// `/** ... */`
  BlockComment,
  /// `<!-- ... -->`
  MarkupComment,
  /// `# ...` lines
  ShellComment,
}

/// Which header layout a file gets.
///
/// This is one level finer than [`Dialect`]: script and style files share the
/// block-comment syntax but style headers carry no `@description` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
  /// JavaScript and TypeScript sources
  Script,
  /// CSS, SCSS and Less stylesheets
  Style,
  /// HTML documents
  Markup,
  /// Shell scripts
  Shell,
}

impl TemplateKind {
  /// The comment dialect the template is rendered in.
  pub const fn dialect(self) -> Dialect {
    match self {
      Self::Script | Self::Style => Dialect::BlockComment,
      Self::Markup => Dialect::MarkupComment,
      Self::Shell => Dialect::ShellComment,
    }
  }
}

/// Every recognized extension, lower-cased and with its leading dot.
pub const EXTENSION_TABLE: &[(&str, TemplateKind)] = &[
  (".js", TemplateKind::Script),
  (".mjs", TemplateKind::Script),
  (".cjs", TemplateKind::Script),
  (".jsx", TemplateKind::Script),
  (".ts", TemplateKind::Script),
  (".tsx", TemplateKind::Script),
  (".mts", TemplateKind::Script),
  (".cts", TemplateKind::Script),
  (".css", TemplateKind::Style),
  (".scss", TemplateKind::Style),
  (".less", TemplateKind::Style),
  (".html", TemplateKind::Markup),
  (".htm", TemplateKind::Markup),
  (".sh", TemplateKind::Shell),
  (".bash", TemplateKind::Shell),
];

/// Returns the template kind for `path`, or `None` when the extension is not
/// supported. Callers treat `None` as "skip", never as an error.
pub fn classify(path: &Path) -> Option<TemplateKind> {
  let extension = path.extension()?.to_str()?.to_lowercase();

  EXTENSION_TABLE
    .iter()
    .find(|(ext, _)| ext.strip_prefix('.') == Some(extension.as_str()))
    .map(|(_, kind)| *kind)
}

/// Convenience wrapper over [`classify`].
pub fn is_supported(path: &Path) -> bool {
  classify(path).is_some()
}

/// Comma separated list of recognized extensions, for help output.
pub fn supported_extensions() -> String {
  EXTENSION_TABLE.iter().map(|(ext, _)| *ext).collect::<Vec<_>>().join(", ")
}
