//! Module identity as seen by path derivation.
//!
//! The build graph owns modules; this crate only needs a module's directory,
//! name and variant subdirectory together with the global [`BuildConfig`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;

/// Read-only view of a module supplied by the build graph.
pub trait ModuleContext {
  /// Directory of the module's declaration, relative to the source root.
  fn module_dir(&self) -> &Path;

  fn module_name(&self) -> &str;

  /// Variant discriminator (architecture, build flavor). May be empty.
  fn module_sub_dir(&self) -> &Path;

  fn build_config(&self) -> &BuildConfig;
}

/// A module declaration.
///
/// `module_src_dirs` maps a property name to directories declared relative to
/// the module directory; `src_dirs` maps a property name to directories
/// declared relative to the source root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
  pub dir: PathBuf,
  pub name: String,
  #[serde(default)]
  pub sub_dir: PathBuf,
  #[serde(default)]
  pub module_src_dirs: BTreeMap<String, Vec<String>>,
  #[serde(default)]
  pub src_dirs: BTreeMap<String, Vec<String>>,
}

impl ModuleSpec {
  pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
    Self {
      dir: dir.into(),
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn with_sub_dir(mut self, sub_dir: impl Into<PathBuf>) -> Self {
    self.sub_dir = sub_dir.into();
    self
  }
}

/// A [`ModuleSpec`] bound to the build configuration it is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct Module<'a> {
  config: &'a BuildConfig,
  spec: &'a ModuleSpec,
}

impl<'a> Module<'a> {
  pub fn new(config: &'a BuildConfig, spec: &'a ModuleSpec) -> Self {
    Self { config, spec }
  }

  pub fn spec(&self) -> &'a ModuleSpec {
    self.spec
  }
}

impl ModuleContext for Module<'_> {
  fn module_dir(&self) -> &Path {
    &self.spec.dir
  }

  fn module_name(&self) -> &str {
    &self.spec.name
  }

  fn module_sub_dir(&self) -> &Path {
    &self.spec.sub_dir
  }

  fn build_config(&self) -> &BuildConfig {
    self.config
  }
}
