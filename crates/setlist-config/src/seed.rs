use crate::paths::ConfigError;
use setlist_core::seed::SeedData;
use std::fs;
use std::path::Path;
use tracing::info;

/// Lee una semilla desde un archivo TOML:
///
/// ```toml
/// genres = ["rock", "pop"]
///
/// [[songs]]
/// id = "S001"
/// title = "Bohemian Rhapsody"
/// artist = "Queen"
/// genre = "rock"
/// duration_seconds = 354
/// release_year = 1975
/// album = "A Night at the Opera"
/// ```
///
/// `new_releases` es opcional y `genres` usa los géneros incorporados si falta.
/// Cada canción se valida al deserializarla.
pub fn load_seed_file(path: &Path) -> Result<SeedData, ConfigError> {
  let content = fs::read_to_string(path)?;
  let seed: SeedData = toml::from_str(&content)
    .map_err(|e| ConfigError::Seed { path: path.to_path_buf(), message: e.message().to_owned() })?;

  info!(
    path = %path.display(),
    songs = seed.songs.len(),
    new_releases = seed.new_releases.len(),
    "seed file loaded"
  );
  Ok(seed)
}

/// Semilla del archivo indicado o, si no hay ninguno, la incorporada.
pub fn load_seed(path: Option<&Path>) -> Result<SeedData, ConfigError> {
  match path {
    Some(path) => load_seed_file(path),
    None => SeedData::builtin().map_err(|e| ConfigError::Other(format!("builtin seed: {e}"))),
  }
}
