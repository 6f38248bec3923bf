use serde::Serialize;
use tracing::debug;

use crate::domain::song::Song;
use crate::stats;

/// El Catálogo: todas las canciones, en orden de inserción, más las etiquetas
/// de género reconocidas.
///
/// Es el único dueño de los datos de cada [`Song`]. Solo crece añadiendo
/// novedades al final, y eso produce un catálogo nuevo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalogue {
  songs: Vec<Song>,
  genres: Vec<String>,
}

impl Catalogue {
  pub fn new(songs: Vec<Song>, genres: Vec<String>) -> Self {
    Self { songs, genres }
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn genres(&self) -> &[String] {
    &self.genres
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  /// Coincidencia exacta (sensible a mayúsculas) con una etiqueta de género.
  pub fn has_genre(&self, genre: &str) -> bool {
    self.genres.iter().any(|g| g == genre)
  }

  /// Catálogo nuevo con `new_releases` concatenadas al final.
  ///
  /// No se eliminan duplicados ni se comprueban colisiones de ID.
  pub fn with_new_releases(&self, new_releases: &[Song]) -> Self {
    let songs = stats::integrate_new_releases(&self.songs, new_releases);
    debug!(before = self.songs.len(), after = songs.len(), "new releases integrated");
    Self { songs, genres: self.genres.clone() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed::SeedData;

  #[test]
  fn integration_leaves_the_original_untouched() {
    let seed = SeedData::builtin().unwrap();
    let catalogue = Catalogue::new(seed.songs.clone(), seed.genres.clone());

    let grown = catalogue.with_new_releases(&seed.new_releases);

    assert_eq!(catalogue.len(), 5);
    assert_eq!(grown.len(), 7);
    assert_eq!(grown.songs()[5].id().as_str(), "N001");
    assert_eq!(grown.genres(), catalogue.genres());
  }

  #[test]
  fn genre_lookup_is_exact() {
    let seed = SeedData::builtin().unwrap();
    let catalogue = Catalogue::new(seed.songs, seed.genres);

    assert!(catalogue.has_genre("hip-hop"));
    assert!(!catalogue.has_genre("Rock"));
  }
}
