//! Shared utilities.
//!
//! Lexical path handling used by every derivation, plus test helpers.

pub mod path;

#[cfg(test)]
pub mod testutil;
