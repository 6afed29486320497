//! Layout command implementation.
//!
//! Prints every derived directory of one module.

use anyhow::Result;

use modlayout_lib::{BuildConfig, Module, ModuleLayout, ModuleSpec};

use crate::output::{OutputFormat, print_info, print_json, print_stat};

pub fn cmd_layout(config: &BuildConfig, spec: &ModuleSpec, output: OutputFormat) -> Result<()> {
  let layout = ModuleLayout::for_module(&Module::new(config, spec));

  if output.is_json() {
    return print_json(&layout);
  }

  print_info(&format!("Module {}", spec.name));
  print_stat("src", &layout.src.display().to_string());
  print_stat("out", &layout.out.display().to_string());
  for (kind, path) in layout.output_dirs() {
    print_stat(kind.suffix(), &path.display().to_string());
  }

  Ok(())
}
