use clap::Parser;
use std::path::PathBuf;

/// Interactive music catalogue and playlist manager.
#[derive(Debug, Parser)]
#[command(name = "setlist", version, about)]
pub struct Args {
  /// Base directory for configuration (overrides SETLIST_BASE_DIR).
  #[arg(long, value_name = "DIR")]
  pub base_dir: Option<PathBuf>,

  /// TOML seed file with songs, new releases and genres.
  #[arg(long, value_name = "FILE")]
  pub seed: Option<PathBuf>,

  /// Log filter directive, e.g. `debug` or `setlist_core=trace`.
  #[arg(long, value_name = "FILTER")]
  pub log: Option<String>,
}
