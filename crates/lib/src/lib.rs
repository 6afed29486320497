//! modlayout-lib: output layouts and source directory checks for build modules
//!
//! This crate provides the path plumbing shared by rule generation:
//! - `layout`: deterministic per-module output directories
//! - `check`: existence checks for declared source directories
//! - `config`: the source and intermediates roots of a build
//! - `manifest`: module declarations loaded from JSON

pub mod check;
pub mod config;
pub mod consts;
pub mod layout;
pub mod manifest;
pub mod module;
pub mod util;

pub use check::{Diagnostics, PropertyError, SrcDirError, check_module, check_module_src_dirs_exist, check_src_dirs_exist};
pub use config::{BuildConfig, ConfigError};
pub use layout::{
  ModuleLayout, OutputDir, RelPathError, module_bin_dir, module_gen_dir, module_go_package_dir, module_include_dir,
  module_js_compiled_dir, module_lib_dir, module_obj_dir, module_out_dir, module_output_dir, module_proto_dir,
  module_src_dir, src_dir_rel_path,
};
pub use manifest::{Manifest, ManifestError};
pub use module::{Module, ModuleContext, ModuleSpec};
