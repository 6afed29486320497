mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modlayout_lib::{BuildConfig, ModuleSpec};

use crate::cmd::{cmd_check, cmd_info, cmd_layout, cmd_rel_path};
use crate::output::OutputFormat;

/// modlayout - Module output layouts and source directory checks
#[derive(Parser)]
#[command(name = "modlayout")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Top of the source tree (default: $MODLAYOUT_SOURCE_ROOT, then the current directory)
  #[arg(long, global = true)]
  source_root: Option<PathBuf>,

  /// Intermediates staging directory (default: $MODLAYOUT_INTERMEDIATES_ROOT, then <source root>/out/.intermediates)
  #[arg(long, global = true)]
  intermediates_root: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the output layout of a module
  Layout {
    /// Module directory, relative to the source root
    #[arg(long)]
    dir: PathBuf,

    /// Module name
    #[arg(long)]
    name: String,

    /// Variant subdirectory (architecture, build flavor)
    #[arg(long)]
    sub_dir: Option<PathBuf>,
  },

  /// Check that declared source directories exist
  Check {
    /// Path to the module manifest (JSON)
    manifest: PathBuf,

    /// Only check the module with this name
    #[arg(short, long)]
    module: Option<String>,
  },

  /// Print a path relative to the source root
  RelPath {
    /// Path inside the source tree
    path: PathBuf,
  },

  /// Show the resolved build configuration
  Info,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  let config =
    BuildConfig::resolve(cli.source_root, cli.intermediates_root).context("Failed to resolve build configuration")?;

  match cli.command {
    Commands::Layout { dir, name, sub_dir } => {
      let spec = ModuleSpec::new(dir, name).with_sub_dir(sub_dir.unwrap_or_default());
      cmd_layout(&config, &spec, cli.output)
    }
    Commands::Check { manifest, module } => cmd_check(&config, &manifest, module.as_deref(), cli.verbose, cli.output),
    Commands::RelPath { path } => cmd_rel_path(&config, &path, cli.output),
    Commands::Info => cmd_info(&config, cli.output),
  }
}
