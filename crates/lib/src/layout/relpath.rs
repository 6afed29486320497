use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::module::ModuleContext;
use crate::util::path::clean_path;

/// Misuse of [`src_dir_rel_path`] by the caller.
///
/// This is never a configuration problem a user can fix, so it is kept apart
/// from the property errors collected during source directory checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelPathError {
  #[error("{path:?} is not inside {source_root:?}")]
  OutsideSourceRoot { path: PathBuf, source_root: PathBuf },
}

/// Path of `path` relative to the top of the source tree.
///
/// `path` must be lexically inside the source root. Returns `.` for the
/// source root itself.
///
/// # Errors
///
/// Returns [`RelPathError::OutsideSourceRoot`] if `path` is relative or lies
/// outside the source root after cleaning.
pub fn src_dir_rel_path<C: ModuleContext + ?Sized>(ctx: &C, path: &Path) -> Result<PathBuf, RelPathError> {
  let source_root = ctx.build_config().source_root();
  let cleaned = clean_path(path);

  match cleaned.strip_prefix(source_root) {
    Ok(rel) if rel.as_os_str().is_empty() => Ok(PathBuf::from(".")),
    Ok(rel) => Ok(rel.to_path_buf()),
    Err(_) => Err(RelPathError::OutsideSourceRoot {
      path: path.to_path_buf(),
      source_root: source_root.to_path_buf(),
    }),
  }
}
