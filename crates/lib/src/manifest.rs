//! Module manifests.
//!
//! A manifest is a JSON document listing module declarations:
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "dir": "frameworks/base",
//!       "name": "libfoo",
//!       "sub_dir": "android_arm64",
//!       "module_src_dirs": { "local_include_dirs": ["include"] },
//!       "src_dirs": { "include_dirs": ["external/zlib"] }
//!     }
//!   ]
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::module::ModuleSpec;

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
  #[serde(default)]
  pub modules: Vec<ModuleSpec>,
}

impl Manifest {
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// First module declared with `name`.
  pub fn find(&self, name: &str) -> Option<&ModuleSpec> {
    self.modules.iter().find(|m| m.name == name)
  }
}
