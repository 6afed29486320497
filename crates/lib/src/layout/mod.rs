//! Per-module output directory layout.
//!
//! Every output path of a module lives below its output directory:
//!
//! ```text
//! <intermediates>/<module dir>/<module name>/<sub dir>/
//! ├── bin/        # binaries
//! ├── lib/        # libraries
//! ├── gen/        # generated sources
//! ├── obj/        # object files
//! ├── pkg/        # Go package archives
//! ├── include/    # public headers
//! ├── proto/      # public proto includes
//! └── js/         # compiled JavaScript
//! ```
//!
//! These functions only derive names. They never create directories or check
//! that they exist; output directories appear once the build runs.

mod relpath;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::module::ModuleContext;
use crate::util::path::join_clean;

pub use relpath::{RelPathError, src_dir_rel_path};

/// A fixed subdirectory of a module's output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputDir {
  Bin,
  Lib,
  Gen,
  Obj,
  GoPackage,
  Include,
  Proto,
  JsCompiled,
}

impl OutputDir {
  pub const ALL: [OutputDir; 8] = [
    OutputDir::Bin,
    OutputDir::Lib,
    OutputDir::Gen,
    OutputDir::Obj,
    OutputDir::GoPackage,
    OutputDir::Include,
    OutputDir::Proto,
    OutputDir::JsCompiled,
  ];

  /// Directory name below the module output directory.
  pub fn suffix(self) -> &'static str {
    match self {
      OutputDir::Bin => "bin",
      OutputDir::Lib => "lib",
      OutputDir::Gen => "gen",
      OutputDir::Obj => "obj",
      OutputDir::GoPackage => "pkg",
      OutputDir::Include => "include",
      OutputDir::Proto => "proto",
      OutputDir::JsCompiled => "js",
    }
  }
}

impl fmt::Display for OutputDir {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.suffix())
  }
}

/// Root of all output paths for the module.
pub fn module_out_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  join_clean(
    ctx.build_config().intermediates_root(),
    [
      ctx.module_dir(),
      Path::new(ctx.module_name()),
      ctx.module_sub_dir(),
    ],
  )
}

/// Directory all of the module's declared source paths are relative to.
pub fn module_src_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  join_clean(ctx.build_config().source_root(), [ctx.module_dir()])
}

pub fn module_output_dir<C: ModuleContext + ?Sized>(ctx: &C, kind: OutputDir) -> PathBuf {
  join_clean(&module_out_dir(ctx), [kind.suffix()])
}

/// Module- and variant-specific binary output directory.
pub fn module_bin_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Bin)
}

/// Module- and variant-specific library output directory.
pub fn module_lib_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Lib)
}

/// Directory for generated files.
pub fn module_gen_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Gen)
}

pub fn module_obj_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Obj)
}

/// Package root for the module.
///
/// Final package archives are written here, and dependent modules search it
/// via `-I` arguments.
pub fn module_go_package_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::GoPackage)
}

/// Public include directory.
pub fn module_include_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Include)
}

/// Public proto include directory.
pub fn module_proto_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::Proto)
}

pub fn module_js_compiled_dir<C: ModuleContext + ?Sized>(ctx: &C) -> PathBuf {
  module_output_dir(ctx, OutputDir::JsCompiled)
}

/// Every derived directory of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleLayout {
  pub src: PathBuf,
  pub out: PathBuf,
  pub bin: PathBuf,
  pub lib: PathBuf,
  #[serde(rename = "gen")]
  pub generated: PathBuf,
  pub obj: PathBuf,
  pub go_package: PathBuf,
  pub include: PathBuf,
  pub proto: PathBuf,
  pub js_compiled: PathBuf,
}

impl ModuleLayout {
  pub fn for_module<C: ModuleContext + ?Sized>(ctx: &C) -> Self {
    Self {
      src: module_src_dir(ctx),
      out: module_out_dir(ctx),
      bin: module_bin_dir(ctx),
      lib: module_lib_dir(ctx),
      generated: module_gen_dir(ctx),
      obj: module_obj_dir(ctx),
      go_package: module_go_package_dir(ctx),
      include: module_include_dir(ctx),
      proto: module_proto_dir(ctx),
      js_compiled: module_js_compiled_dir(ctx),
    }
  }

  pub fn output_dir(&self, kind: OutputDir) -> &Path {
    match kind {
      OutputDir::Bin => &self.bin,
      OutputDir::Lib => &self.lib,
      OutputDir::Gen => &self.generated,
      OutputDir::Obj => &self.obj,
      OutputDir::GoPackage => &self.go_package,
      OutputDir::Include => &self.include,
      OutputDir::Proto => &self.proto,
      OutputDir::JsCompiled => &self.js_compiled,
    }
  }

  /// The eight suffix directories, in [`OutputDir::ALL`] order.
  pub fn output_dirs(&self) -> impl Iterator<Item = (OutputDir, &Path)> {
    OutputDir::ALL.into_iter().map(|kind| (kind, self.output_dir(kind)))
  }
}
