use std::path::Path;

use anyhow::{Context, Result};

use modlayout_lib::{BuildConfig, Module, ModuleSpec, src_dir_rel_path};

use crate::output::{OutputFormat, print_json};

pub fn cmd_rel_path(config: &BuildConfig, path: &Path, output: OutputFormat) -> Result<()> {
  // Only the build config of the context matters here.
  let spec = ModuleSpec::default();
  let module = Module::new(config, &spec);

  let path = std::path::absolute(path).with_context(|| format!("Failed to resolve path: {}", path.display()))?;
  let rel = src_dir_rel_path(&module, &path)?;

  if output.is_json() {
    print_json(&serde_json::json!({ "path": path, "relative": rel }))?;
  } else {
    println!("{}", rel.display());
  }

  Ok(())
}
