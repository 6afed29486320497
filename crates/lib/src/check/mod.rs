//! Existence checks for declared source directories.
//!
//! Each check stats every declared directory and reports every failure; a
//! missing directory never hides the ones after it. Only declared *source*
//! directories are checked. Derived output directories are not expected to
//! exist before the build creates them.

mod diagnostics;

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::layout::module_src_dir;
use crate::module::{Module, ModuleContext};
use crate::util::path::join_clean;

pub use diagnostics::{Diagnostics, PropertyError, SrcDirError};

/// Check directories declared relative to the module directory.
///
/// Missing entries are reported as [`SrcDirError::ModuleDirMissing`] against
/// `property`; any other stat failure as [`SrcDirError::Unreadable`].
pub fn check_module_src_dirs_exist<C, S>(ctx: &C, dirs: &[S], property: &str) -> Diagnostics
where
  C: ModuleContext + ?Sized,
  S: AsRef<str>,
{
  let base = module_src_dir(ctx);
  probe_dirs(&base, dirs, property, |dir| SrcDirError::ModuleDirMissing { dir })
}

/// Check directories declared relative to the top of the source tree.
///
/// Same as [`check_module_src_dirs_exist`] except that entries resolve against
/// the source root and missing ones are [`SrcDirError::TopLevelDirMissing`].
pub fn check_src_dirs_exist<C, S>(ctx: &C, dirs: &[S], property: &str) -> Diagnostics
where
  C: ModuleContext + ?Sized,
  S: AsRef<str>,
{
  let base = ctx.build_config().source_root();
  probe_dirs(base, dirs, property, |dir| SrcDirError::TopLevelDirMissing { dir })
}

/// Run both checks over every property the module declares.
///
/// Module-relative properties are checked first, then top-level ones, each
/// in property name order.
pub fn check_module(module: &Module<'_>) -> Diagnostics {
  let spec = module.spec();
  let mut diagnostics = Diagnostics::new();

  for (property, dirs) in &spec.module_src_dirs {
    diagnostics.merge(check_module_src_dirs_exist(module, dirs.as_slice(), property));
  }
  for (property, dirs) in &spec.src_dirs {
    diagnostics.merge(check_src_dirs_exist(module, dirs.as_slice(), property));
  }

  if !diagnostics.is_empty() {
    debug!(module = %spec.name, errors = diagnostics.len(), "module source directory checks failed");
  }
  diagnostics
}

fn probe_dirs<S, F>(base: &Path, dirs: &[S], property: &str, missing: F) -> Diagnostics
where
  S: AsRef<str>,
  F: Fn(String) -> SrcDirError,
{
  let mut diagnostics = Diagnostics::new();

  for dir in dirs {
    let dir = dir.as_ref();
    let full = join_clean(base, [dir]);
    debug!(property, dir, path = %full.display(), "checking source directory");

    let error = match std::fs::metadata(&full) {
      Ok(_) => continue,
      Err(e) if e.kind() == io::ErrorKind::NotFound => missing(dir.to_string()),
      Err(e) => SrcDirError::Unreadable {
        dir: dir.to_string(),
        message: format!("stat {}: {}", full.display(), e),
      },
    };

    warn!(property, dir, %error, "source directory check failed");
    diagnostics.push(PropertyError::new(property, error));
  }

  diagnostics
}
