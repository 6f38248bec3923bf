use anyhow::{Context, Result};
use clap::Parser;
use setlist_config::{AppConfig, SetlistPaths, TomlConfigBackend, load_seed};
use setlist_core::ports::SystemClock;
use setlist_core::services::CatalogueSession;
use setlist_lib::{args::Args, logging};
use tracing::info;

fn main() -> Result<()> {
  let args = Args::parse();

  let paths = match &args.base_dir {
    Some(base) => SetlistPaths::from_base(base),
    None => SetlistPaths::detect(),
  }
  .context("could not resolve setlist directories")?;

  let backend = TomlConfigBackend::new(&paths);
  let config = AppConfig::load_from(&backend)
    .with_context(|| format!("could not load config from {}", backend.config_file().display()))?;

  logging::init(args.log.as_deref().unwrap_or(&config.log.filter));
  info!(config = %backend.config_file().display(), "configuration loaded");

  let seed_path = args.seed.as_deref().or(config.catalogue.seed_file.as_deref());
  match seed_path {
    Some(path) => info!(seed = %path.display(), "using seed file"),
    None => info!("using built-in catalogue"),
  }
  let seed = load_seed(seed_path).context("could not load catalogue seed")?;

  let session = CatalogueSession::new(seed, SystemClock);
  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  let session = setlist_lib::run(session, &mut stdin.lock(), &mut stdout.lock())?;

  info!(playlists = session.playlists().len(), "session finished");
  Ok(())
}
