//! Lexical path helpers.
//!
//! Nothing here touches the filesystem. Joining and cleaning work purely on
//! path components so derived layouts are identical on every machine.

use std::path::{Component, Path, PathBuf};

/// Lexically clean a path.
///
/// `.` components are dropped and `..` collapses against the preceding normal
/// component. A `..` directly under the root is discarded, while leading `..`
/// on a relative path is kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
  let mut cleaned: Vec<Component<'_>> = Vec::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match cleaned.last() {
        Some(Component::Normal(_)) => {
          cleaned.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => cleaned.push(component),
      },
      _ => cleaned.push(component),
    }
  }

  if cleaned.is_empty() {
    return PathBuf::from(".");
  }

  cleaned.iter().collect()
}

/// Join `segments` onto `base` and clean the result.
///
/// Every segment is appended below `base`, even one that is itself absolute:
/// root and prefix components of a segment are ignored. Empty segments
/// contribute nothing.
pub fn join_clean<I, P>(base: &Path, segments: I) -> PathBuf
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  let mut joined = base.to_path_buf();

  for segment in segments {
    for component in segment.as_ref().components() {
      match component {
        Component::RootDir | Component::Prefix(_) => {}
        other => joined.push(other),
      }
    }
  }

  clean_path(&joined)
}
