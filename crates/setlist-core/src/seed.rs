use serde::Deserialize;

use crate::domain::{Genre, Song};
use crate::errors::ValidationError;

/// Datos con los que arranca una sesión: catálogo inicial, novedades
/// pendientes de integrar y etiquetas de género válidas.
///
/// Se deserializa desde un archivo de semilla; cada canción pasa por
/// [`Song::new`] durante la deserialización.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedData {
  pub songs: Vec<Song>,
  #[serde(default)]
  pub new_releases: Vec<Song>,
  #[serde(default = "Genre::labels")]
  pub genres: Vec<String>,
}

impl SeedData {
  /// Semilla incorporada: S001–S005, las novedades N001–N002 y seis géneros.
  pub fn builtin() -> Result<Self, ValidationError> {
    let songs = vec![
      Song::new("S001", "Bohemian Rhapsody", "Queen", "rock", 354, 1975, "A Night at the Opera")?,
      Song::new("S002", "Billie Jean", "Michael Jackson", "pop", 294, 1982, "Thriller")?,
      Song::new("S003", "Take Five", "Dave Brubeck", "jazz", 324, 1959, "Time Out")?,
      Song::new("S004", "Moonlight Sonata", "Ludwig van Beethoven", "classical", 363, 1801, "Piano Sonatas")?,
      Song::new("S005", "Strobe", "Deadmau5", "electronic", 601, 2009, "For Lack of a Better Name")?,
    ];

    let new_releases = vec![
      Song::new("N001", "Blinding Lights", "The Weeknd", "pop", 200, 2020, "After Hours")?,
      Song::new("N002", "Bamboo", "J Balvin", "hip-hop", 190, 2023, "Colores")?,
    ];

    Ok(Self { songs, new_releases, genres: Genre::labels() })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_seed_has_expected_ids() {
    let seed = SeedData::builtin().unwrap();

    let ids: Vec<&str> = seed.songs.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, ["S001", "S002", "S003", "S004", "S005"]);

    let new_ids: Vec<&str> = seed.new_releases.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(new_ids, ["N001", "N002"]);

    assert_eq!(seed.genres.len(), 6);
  }
}
