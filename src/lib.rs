//! # edheader
//!
//! A tool that keeps a standardized header block at the top of JavaScript,
//! TypeScript, stylesheet, HTML and shell source files.
//!
//! A header names the file relative to the project root and carries its
//! license and copyright line:
//!
//! ```text
//! /**
//!  * @file src/index.ts
//!  * @description Entry point
//!  * @license MIT
//!  * @copyright 2025 Jane Doe
//!  */
//! ```
//!
//! `edheader` adds missing headers, checks for their presence, and strips
//! them again. It never stacks a second header on a file that already has
//! one, and removing a freshly added header restores the original content
//! byte for byte.
//!
//! ## Usage as a Library
//!
//! The [`engine`] works on strings and never touches the filesystem:
//!
//! ```rust
//! use std::path::Path;
//!
//! use edheader::config::HeaderConfig;
//! use edheader::engine::{AddOutcome, HeaderEngine, RemoveOutcome};
//!
//! let config = HeaderConfig::new("Jane Doe", "MIT", 2025, "demo");
//! let engine = HeaderEngine::new(config, "/work/demo");
//! let path = Path::new("/work/demo/src/index.ts");
//!
//! let AddOutcome::Added(with_header) = engine.add(path, "export {};\n", "") else {
//!     panic!("expected a header to be added");
//! };
//! assert!(engine.check(path, &with_header));
//! assert_eq!(
//!     engine.remove(path, &with_header),
//!     RemoveOutcome::Removed("export {};\n".to_string())
//! );
//! ```
//!
//! ## Modules
//!
//! * [`classifier`] - Extension to template kind and comment dialect
//! * [`templates`] - Header layouts and placeholder filling
//! * [`matcher`] - Structural header recognition and removal
//! * [`engine`] - Add / check / remove over file content
//! * [`discovery`] - Recursive file discovery
//! * [`processor`] - Applying a mode to files on disk
//! * [`config`] - Header values and the `.edheader.toml` file
//! * [`logging`] - Output modes and the tracing subscriber

pub mod classifier;
pub mod cli;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod engine;
pub mod git;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
pub mod workspace;
