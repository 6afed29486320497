//! Test utilities for modlayout-lib.
//!
//! Provides a throwaway source tree on disk with a matching build config.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::BuildConfig;

/// A temporary source root with the intermediates root inside it.
pub struct SourceTree {
  pub config: BuildConfig,
  // Dropping removes the tree.
  _temp: TempDir,
}

impl SourceTree {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    Self {
      config: BuildConfig::new(&root, root.join("out").join(".intermediates")),
      _temp: temp,
    }
  }

  /// Absolute path of `rel` below the source root.
  pub fn path(&self, rel: &str) -> PathBuf {
    self.config.source_root().join(rel)
  }

  pub fn mkdir(&self, rel: &str) {
    std::fs::create_dir_all(self.path(rel)).unwrap();
  }

  /// Create an empty file, along with its parent directories.
  pub fn touch(&self, rel: &str) {
    let path = self.path(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "").unwrap();
  }
}
