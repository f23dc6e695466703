use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gwt_manifest_gen::{GeneratorConfig, ManifestBuilder};

/// Generate the GWT module descriptor listing Java sources and static resources.
#[derive(Parser)]
#[command(name = "gwt-manifest-gen")]
#[command(version)]
struct Cli {
  /// Configuration file (defaults to ./gwt-manifest.json when present)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Source root to scan, overriding the configured one
  #[arg(long)]
  root: Option<PathBuf>,

  /// Manifest destination, overriding the configured one
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Exit with status 1 when the manifest on disk is out of date, without writing it
  #[arg(long, conflicts_with = "stdout")]
  check: bool,

  /// Print the manifest instead of writing it
  #[arg(long)]
  stdout: bool,

  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let base_dir = env::current_dir().context("failed to resolve the working directory")?;
  let (mut config, config_source) = match &cli.config {
    Some(path) => {
      let config = GeneratorConfig::from_path(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
      (config, Some(path.clone()))
    }
    None => GeneratorConfig::discover(&base_dir).context("failed to load configuration")?,
  };

  if let Some(root) = &cli.root {
    config.source_root = root.to_string_lossy().into_owned();
  }
  if let Some(output) = &cli.output {
    config.output = output.to_string_lossy().into_owned();
  }

  let builder = ManifestBuilder::new(config, base_dir).with_config_source(config_source);

  if cli.check {
    let fresh = builder.check().context("manifest check failed")?;
    let output = builder.output_path();
    if fresh {
      log::info!("{} is up to date", output.display());
      return Ok(ExitCode::SUCCESS);
    }
    eprintln!("{} is out of date; rerun gwt-manifest-gen", output.display());
    return Ok(ExitCode::FAILURE);
  }

  if cli.stdout {
    let artifacts = builder.build().context("manifest generation failed")?;
    print!("{}", artifacts.document);
    return Ok(ExitCode::SUCCESS);
  }

  builder.generate().context("manifest generation failed")?;
  Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
  let default_level = match verbose {
    0 => "info",
    1 => "debug",
    _ => "trace",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
    .format_timestamp(None)
    .init();
}
