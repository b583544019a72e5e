//! # Header engine tests
//!
//! Properties of add / check / remove across every supported file type.

use std::path::{Path, PathBuf};

use edheader::classifier::{EXTENSION_TABLE, TemplateKind, classify};
use edheader::config::HeaderConfig;
use edheader::engine::{AddOutcome, HeaderEngine, RemoveOutcome};

const ROOT: &str = "/work/demo";

fn engine() -> HeaderEngine {
  HeaderEngine::new(HeaderConfig::new("Jane Doe", "MIT", 2025, "demo"), ROOT)
}

fn sample_content(kind: TemplateKind) -> &'static str {
  match kind {
    TemplateKind::Script => "import { a } from './a';\n\nexport const b = a + 1;\n",
    TemplateKind::Style => ".button {\n  color: red;\n}\n",
    TemplateKind::Markup => "<!doctype html>\n<html>\n  <body></body>\n</html>\n",
    TemplateKind::Shell => "#!/usr/bin/env bash\nset -euo pipefail\necho done\n",
  }
}

fn every_supported_path() -> Vec<(PathBuf, TemplateKind)> {
  EXTENSION_TABLE
    .iter()
    .map(|(ext, kind)| (Path::new(ROOT).join(format!("src/file{ext}")), *kind))
    .collect()
}

fn added(engine: &HeaderEngine, path: &Path, content: &str) -> String {
  match engine.add(path, content, "") {
    AddOutcome::Added(new_content) => new_content,
    other => panic!("expected a header for {}, got {:?}", path.display(), other),
  }
}

#[test]
fn test_added_header_is_detected() {
  let engine = engine();
  for (path, kind) in every_supported_path() {
    let with_header = added(&engine, &path, sample_content(kind));
    assert!(engine.check(&path, &with_header), "{}", path.display());
  }
}

#[test]
fn test_second_add_is_a_no_op() {
  let engine = engine();
  for (path, kind) in every_supported_path() {
    let once = added(&engine, &path, sample_content(kind));
    assert_eq!(engine.add(&path, &once, ""), AddOutcome::AlreadyPresent, "{}", path.display());
  }
}

#[test]
fn test_remove_restores_original_content() {
  let engine = engine();
  for (path, kind) in every_supported_path() {
    let mut originals = vec![sample_content(kind)];
    if kind == TemplateKind::Shell {
      originals.extend(["echo hi\n", "# not a header\necho hi\n"]);
    }

    for original in originals {
      let with_header = added(&engine, &path, original);
      assert_eq!(
        engine.remove(&path, &with_header),
        RemoveOutcome::Removed(original.to_string()),
        "{}: {original:?}",
        path.display()
      );
    }
  }
}

#[test]
fn test_round_trip_on_awkward_content() {
  let engine = engine();
  let path = Path::new("/work/demo/src/odd.ts");
  for content in [
    "",
    "\n",
    "\n\nconst a = 1;\n",
    "no trailing newline",
    "    indented();\n",
    "/* eslint-disable */\nrun();\n",
    "// @ts-check\nrun();\n",
    "const s = '/* @license not a header */';\n",
    "windows();\r\nline();\r\n",
    "ünïcödé();\n",
  ] {
    let with_header = added(&engine, path, content);
    assert_eq!(
      engine.remove(path, &with_header),
      RemoveOutcome::Removed(content.to_string()),
      "{content:?}"
    );
  }
}

#[test]
fn test_comment_without_marker_is_not_a_header() {
  let engine = engine();
  let path = Path::new("/work/demo/src/a.ts");

  for content in [
    "/**\n * Utility helpers.\n * @module utils\n */\nexport {};\n",
    "/* license: MIT */\nexport {};\n",
    "<!-- @todo fix -->\n<p></p>\n",
    "# copyright somebody\necho hi\n",
  ] {
    assert!(!engine.check(path, content), "{content:?}");
    assert_eq!(engine.remove(path, content), RemoveOutcome::NothingToRemove);
  }
}

#[test]
fn test_unsupported_extension_is_untouched() {
  let engine = engine();
  for name in ["package.json", "README.md", "Makefile", "main.rs", "style.sass"] {
    let path = Path::new(ROOT).join(name);
    assert_eq!(classify(&path), None, "{name}");
    assert_eq!(engine.add(&path, "content\n", ""), AddOutcome::Unsupported, "{name}");
  }
}

#[test]
fn test_extension_match_ignores_case() {
  let engine = engine();
  let path = Path::new("/work/demo/src/Legacy.JS");
  let with_header = added(&engine, path, "legacy();\n");
  assert!(with_header.starts_with("/**\n * @file src/Legacy.JS\n"));
}

#[test]
fn test_removal_ignores_file_type() {
  let engine = engine();
  let path = Path::new("/work/demo/src/a.ts");
  let content = "<!--\n  @file page.html\n  @license MIT\n-->\n\nexport {};\n";

  assert_eq!(
    engine.remove(path, content),
    RemoveOutcome::Removed("export {};\n".to_string())
  );
}

#[test]
fn test_headers_per_kind() {
  let engine = engine();

  let style = added(&engine, Path::new("/work/demo/src/a.css"), "a {}\n");
  assert_eq!(
    style,
    "/**\n * @file src/a.css\n * @license MIT\n * @copyright 2025 Jane Doe\n */\n\na {}\n"
  );

  let markup = added(&engine, Path::new("/work/demo/index.htm"), "<p></p>\n");
  assert_eq!(
    markup,
    "<!--\n  @file index.htm\n  @license MIT\n  @copyright 2025 Jane Doe\n-->\n\n<p></p>\n"
  );

  let shell = added(&engine, Path::new("/work/demo/bin/setup.bash"), "echo hi\n");
  assert_eq!(
    shell,
    "#!/bin/bash\n# @file bin/setup.bash\n# @license MIT\n# @copyright 2025 Jane Doe\n\necho hi\n"
  );
}
