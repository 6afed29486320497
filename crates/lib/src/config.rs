//! Global build configuration.
//!
//! A `BuildConfig` names the two roots every module path is derived from: the
//! top of the source tree and the intermediates staging directory. It is
//! immutable once constructed and shared by reference for a whole build.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::{DEFAULT_INTERMEDIATES_DIR, INTERMEDIATES_ROOT_ENV, SOURCE_ROOT_ENV};
use crate::util::path::{clean_path, join_clean};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to determine current directory: {0}")]
  CurrentDir(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  source_root: PathBuf,
  intermediates_root: PathBuf,
}

impl BuildConfig {
  /// Both roots are lexically cleaned.
  pub fn new(source_root: impl AsRef<Path>, intermediates_root: impl AsRef<Path>) -> Self {
    Self {
      source_root: clean_path(source_root.as_ref()),
      intermediates_root: clean_path(intermediates_root.as_ref()),
    }
  }

  /// Resolve the configuration from the environment alone.
  ///
  /// See [`BuildConfig::resolve`].
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::resolve(None, None)
  }

  /// Resolve the configuration, preferring explicit values over the
  /// environment and the environment over defaults.
  ///
  /// - source root: `source_root`, then `MODLAYOUT_SOURCE_ROOT`, then the
  ///   current directory
  /// - intermediates root: `intermediates_root`, then
  ///   `MODLAYOUT_INTERMEDIATES_ROOT`, then `<source root>/out/.intermediates`
  ///
  /// Relative paths are taken relative to the current directory.
  pub fn resolve(
    source_root: Option<PathBuf>,
    intermediates_root: Option<PathBuf>,
  ) -> Result<Self, ConfigError> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;

    let source_root = source_root
      .or_else(|| env_path(SOURCE_ROOT_ENV))
      .map(|path| cwd.join(path))
      .unwrap_or_else(|| cwd.clone());

    let intermediates_root = intermediates_root
      .or_else(|| env_path(INTERMEDIATES_ROOT_ENV))
      .map(|path| cwd.join(path))
      .unwrap_or_else(|| join_clean(&source_root, DEFAULT_INTERMEDIATES_DIR));

    let config = Self::new(source_root, intermediates_root);
    debug!(
      source_root = %config.source_root.display(),
      intermediates_root = %config.intermediates_root.display(),
      "resolved build config"
    );
    Ok(config)
  }

  /// Absolute path to the top of the source tree.
  pub fn source_root(&self) -> &Path {
    &self.source_root
  }

  /// Absolute path to the build output staging area.
  pub fn intermediates_root(&self) -> &Path {
    &self.intermediates_root
  }
}

fn env_path(var: &str) -> Option<PathBuf> {
  match std::env::var(var) {
    Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
    _ => None,
  }
}
