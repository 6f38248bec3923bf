use tracing::info;

use crate::domain::{Catalogue, Playlist, Song, SongId};
use crate::errors::{Collection, ValidationError};
use crate::ports::Clock;
use crate::seed::SeedData;
use crate::stats::{self, TotalDuration};

/// Estado de una sesión interactiva sobre el catálogo.
///
/// No añade semántica propia: cada método delega en las operaciones puras
/// del motor y solo guarda sus resultados (catálogo actual, novedades
/// pendientes, playlists creadas).
pub struct CatalogueSession<C>
where
  C: Clock,
{
  catalogue: Catalogue,
  new_releases: Vec<Song>,
  playlists: Vec<Playlist>,
  clock: C,
}

impl<C> CatalogueSession<C>
where
  C: Clock,
{
  pub fn new(seed: SeedData, clock: C) -> Self {
    let SeedData { songs, new_releases, genres } = seed;
    Self { catalogue: Catalogue::new(songs, genres), new_releases, playlists: Vec::new(), clock }
  }

  // -------- QUERY (read) --------

  pub fn catalogue(&self) -> &Catalogue {
    &self.catalogue
  }

  pub fn new_releases(&self) -> &[Song] {
    &self.new_releases
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  /// Número de canciones y duración total, para la cabecera del menú.
  pub fn summary(&self) -> Result<(usize, TotalDuration), ValidationError> {
    let total = stats::calculate_total_duration(self.catalogue.songs())?;
    Ok((self.catalogue.len(), total))
  }

  /// Traduce posiciones de pantalla (base 1) a IDs del catálogo actual.
  pub fn song_ids_at(&self, positions: &[usize]) -> Result<Vec<SongId>, ValidationError> {
    if positions.is_empty() {
      return Err(ValidationError::EmptyCollection(Collection::SongIds));
    }
    let songs = self.catalogue.songs();
    positions
      .iter()
      .map(|&position| {
        position
          .checked_sub(1)
          .and_then(|idx| songs.get(idx))
          .map(|song| song.id().clone())
          .ok_or(ValidationError::SelectionOutOfRange { position, len: songs.len() })
      })
      .collect()
  }

  // -------- COMMAND (write) --------

  /// Valida y guarda una playlist nueva; devuelve la recién creada.
  pub fn create_playlist(&mut self, name: &str, song_ids: &[SongId]) -> Result<&Playlist, ValidationError> {
    let playlist = Playlist::new(name, song_ids, self.catalogue.songs(), &self.clock)?;
    self.playlists.push(playlist);
    let idx = self.playlists.len() - 1;
    Ok(&self.playlists[idx])
  }

  /// Sustituye el catálogo por `catálogo ++ novedades` y devuelve el nuevo total.
  ///
  /// Las novedades no se consumen: integrarlas otra vez las vuelve a añadir.
  pub fn integrate_new_releases(&mut self) -> usize {
    self.catalogue = self.catalogue.with_new_releases(&self.new_releases);
    info!(total = self.catalogue.len(), "catalogue updated with new releases");
    self.catalogue.len()
  }
}
