use anyhow::Result;

use modlayout_lib::BuildConfig;

use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(config: &BuildConfig, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    return print_json(config);
  }

  println!("Build config:");
  print_stat("Source root", &config.source_root().display().to_string());
  print_stat("Intermediates root", &config.intermediates_root().display().to_string());
  Ok(())
}
