//! Accumulated property errors.
//!
//! Source directory checks never stop at the first failure. Each failure is
//! recorded as a [`PropertyError`] in a [`Diagnostics`] value that the caller
//! merges into its own report.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a declared source directory failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SrcDirError {
  #[error("module source directory {dir:?} does not exist")]
  ModuleDirMissing { dir: String },

  #[error("top-level source directory {dir:?} does not exist")]
  TopLevelDirMissing { dir: String },

  /// The probe failed for a reason other than absence.
  #[error("{message}")]
  Unreadable { dir: String, message: String },
}

impl SrcDirError {
  /// The directory as it was declared.
  pub fn dir(&self) -> &str {
    match self {
      SrcDirError::ModuleDirMissing { dir }
      | SrcDirError::TopLevelDirMissing { dir }
      | SrcDirError::Unreadable { dir, .. } => dir,
    }
  }
}

/// An error attributed to a module property.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{property}: {error}")]
pub struct PropertyError {
  pub property: String,
  pub error: SrcDirError,
}

impl PropertyError {
  pub fn new(property: impl Into<String>, error: SrcDirError) -> Self {
    Self {
      property: property.into(),
      error,
    }
  }
}

/// Ordered collection of property errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
  errors: Vec<PropertyError>,
}

impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, error: PropertyError) {
    self.errors.push(error);
  }

  /// Append every error from `other`, keeping order.
  pub fn merge(&mut self, other: Diagnostics) {
    self.errors.extend(other.errors);
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn errors(&self) -> &[PropertyError] {
    &self.errors
  }

  pub fn iter(&self) -> std::slice::Iter<'_, PropertyError> {
    self.errors.iter()
  }

  pub fn for_property<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a PropertyError> + 'a {
    self.errors.iter().filter(move |e| e.property == property)
  }

  /// `Ok(())` when nothing was reported.
  pub fn into_result(self) -> Result<(), Diagnostics> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl Extend<PropertyError> for Diagnostics {
  fn extend<T: IntoIterator<Item = PropertyError>>(&mut self, iter: T) {
    self.errors.extend(iter);
  }
}

impl FromIterator<PropertyError> for Diagnostics {
  fn from_iter<T: IntoIterator<Item = PropertyError>>(iter: T) -> Self {
    Self {
      errors: iter.into_iter().collect(),
    }
  }
}

impl IntoIterator for Diagnostics {
  type Item = PropertyError;
  type IntoIter = std::vec::IntoIter<PropertyError>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.into_iter()
  }
}

impl<'a> IntoIterator for &'a Diagnostics {
  type Item = &'a PropertyError;
  type IntoIter = std::slice::Iter<'a, PropertyError>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.iter()
  }
}

impl fmt::Display for Diagnostics {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, error) in self.errors.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{}", error)?;
    }
    Ok(())
  }
}

impl std::error::Error for Diagnostics {}
