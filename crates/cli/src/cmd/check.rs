//! Check command implementation.
//!
//! Runs the source directory checks for every module in a manifest and
//! reports all failures before exiting.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use modlayout_lib::{BuildConfig, Manifest, Module, ModuleSpec, check_module};

use crate::output::{OutputFormat, print_error, print_json, print_success};

pub fn cmd_check(
  config: &BuildConfig,
  manifest_path: &Path,
  module: Option<&str>,
  verbose: bool,
  output: OutputFormat,
) -> Result<()> {
  let manifest = Manifest::load(manifest_path).context("Failed to load module manifest")?;

  let specs: Vec<&ModuleSpec> = match module {
    Some(name) => vec![
      manifest
        .find(name)
        .with_context(|| format!("Module not found in manifest: {}", name))?,
    ],
    None => manifest.modules.iter().collect(),
  };
  debug!(manifest = %manifest_path.display(), modules = specs.len(), "checking modules");

  let mut reports = Vec::new();
  let mut error_count = 0;
  let mut failed_modules = 0;

  for spec in &specs {
    let diagnostics = check_module(&Module::new(config, spec));

    if diagnostics.is_empty() {
      if verbose && !output.is_json() {
        print_success(&format!("{}: ok", spec.name));
      }
    } else {
      error_count += diagnostics.len();
      failed_modules += 1;
      if !output.is_json() {
        for error in &diagnostics {
          print_error(&format!("{}: {}", spec.name, error));
        }
      }
    }

    reports.push(serde_json::json!({ "module": spec.name, "errors": diagnostics }));
  }

  if output.is_json() {
    print_json(&serde_json::json!({ "modules_checked": specs.len(), "errors": error_count, "reports": reports }))?;
  }

  if error_count > 0 {
    bail!("{} source directory error(s) in {} module(s)", error_count, failed_modules);
  }

  if !output.is_json() {
    print_success(&format!("All source directories exist ({} module(s) checked)", specs.len()));
  }

  Ok(())
}
