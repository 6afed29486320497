/// Overrides the top of the source tree.
pub const SOURCE_ROOT_ENV: &str = "MODLAYOUT_SOURCE_ROOT";

/// Overrides the intermediates staging directory.
pub const INTERMEDIATES_ROOT_ENV: &str = "MODLAYOUT_INTERMEDIATES_ROOT";

/// Intermediates root relative to the source root when no override is set.
pub const DEFAULT_INTERMEDIATES_DIR: &[&str] = &["out", ".intermediates"];
