//! # Configuration Module
//!
//! This module holds the values every rendered header is built from and the
//! optional `.edheader.toml` file that supplies them.
//!
//! Configuration can be specified in a `.edheader.toml` file in the project
//! root, in a file named by the `EDHEADER_CONFIG` environment variable, or
//! with `--config`. Command-line flags take precedence over all of them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".edheader.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "EDHEADER_CONFIG";

/// License used when nothing else is configured.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Author used when neither the config nor git provide one.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Values substituted into every header.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
  /// Copyright holder
  pub author: String,
  /// SPDX identifier or free text
  pub license: String,
  /// Copyright year
  pub year: i32,
  /// Name of the project the files belong to
  pub project_name: String,
}

impl HeaderConfig {
  pub fn new(author: impl Into<String>, license: impl Into<String>, year: i32, project_name: impl Into<String>) -> Self {
    Self {
      author: author.into(),
      license: license.into(),
      year,
      project_name: project_name.into(),
    }
  }
}

/// Contents of a `.edheader.toml` file. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
  pub author: Option<String>,
  pub license: Option<String>,
  pub year: Option<i32>,
  pub project_name: Option<String>,
  /// Default `{description}` for add mode
  pub description: Option<String>,
  /// Directory walked when no paths are given (relative to the project root)
  pub source_dir: Option<PathBuf>,
  /// Extra glob patterns excluded from discovery
  #[serde(default)]
  pub ignore: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value is present but unusable.
  #[error("Invalid value for '{key}': {message}")]
  Invalid { key: &'static str, message: String },
}

impl FileConfig {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })
  }

  /// Parse and validate TOML text.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: FileConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;

    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(year) = self.year
      && !(1..=9999).contains(&year)
    {
      return Err(ConfigError::Invalid {
        key: "year",
        message: format!("{year} is not a four-digit year"),
      });
    }

    if self.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
      return Err(ConfigError::Invalid {
        key: "author",
        message: "must not be empty".to_string(),
      });
    }

    if self.license.as_deref().is_some_and(|l| l.trim().is_empty()) {
      return Err(ConfigError::Invalid {
        key: "license",
        message: "must not be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Command-line values that override the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
  pub author: Option<String>,
  pub license: Option<String>,
  pub year: Option<i32>,
  pub project_name: Option<String>,
}

/// Fallback values computed from the environment.
#[derive(Debug, Clone)]
pub struct Defaults {
  pub author: Option<String>,
  pub year: i32,
  pub project_name: String,
}

/// Merges defaults, file config and CLI overrides into the final
/// [`HeaderConfig`]. Later layers win.
pub fn resolve_header_config(defaults: Defaults, file: &FileConfig, cli: CliOverrides) -> HeaderConfig {
  let author = cli
    .author
    .or_else(|| file.author.clone())
    .or(defaults.author)
    .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

  let license = cli
    .license
    .or_else(|| file.license.clone())
    .unwrap_or_else(|| DEFAULT_LICENSE.to_string());

  let year = cli.year.or(file.year).unwrap_or(defaults.year);

  let project_name = cli
    .project_name
    .or_else(|| file.project_name.clone())
    .unwrap_or(defaults.project_name);

  HeaderConfig {
    author,
    license,
    year,
    project_name,
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `EDHEADER_CONFIG` environment variable
/// 3. `.edheader.toml` in the project root
pub fn discover_config_path(explicit_path: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let project_config = project_root.join(DEFAULT_CONFIG_FILENAME);
  if project_config.exists() {
    verbose_log!("Using project config: {}", project_config.display());
    return Some(project_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load the config file if one is found, or an empty config otherwise.
///
/// An explicitly requested file that cannot be read is an error.
pub fn load_config(explicit_path: Option<&Path>, project_root: &Path, no_config: bool) -> Result<FileConfig> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(FileConfig::default());
  }

  match discover_config_path(explicit_path, project_root) {
    Some(path) => FileConfig::load(&path).with_context(|| format!("Failed to load config from {}", path.display())),
    None => Ok(FileConfig::default()),
  }
}
