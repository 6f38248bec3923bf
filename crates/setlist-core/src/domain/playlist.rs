use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::domain::ids::SongId;
use crate::domain::song::Song;
use crate::errors::{Collection, Field, ValidationError};
use crate::ports::Clock;

/// Lista de reproducción: nombre, fecha de creación y referencias ordenadas
/// a canciones del catálogo.
///
/// Solo guarda IDs, nunca copias de [`Song`]. Las referencias se validan al
/// crearla y no se vuelven a comprobar: si el catálogo pierde una canción,
/// los informes simplemente la omiten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
  name: String,
  created: NaiveDate,
  song_ids: Vec<SongId>,
}

impl Playlist {
  /// Crea una playlist con los IDs en el orden dado (se admiten duplicados).
  ///
  /// Falla si el nombre, la lista de IDs o el catálogo están vacíos, o si
  /// algún ID no existe en `songs`; en ese caso el error incluye todos los IDs
  /// desconocidos, no solo el primero.
  pub fn new(
    name: impl Into<String>,
    song_ids: &[SongId],
    songs: &[Song],
    clock: &impl Clock,
  ) -> Result<Self, ValidationError> {
    let name = name.into();
    if name.is_empty() {
      return Err(ValidationError::EmptyField(Field::PlaylistName));
    }
    if song_ids.is_empty() {
      return Err(ValidationError::EmptyCollection(Collection::SongIds));
    }
    if songs.is_empty() {
      return Err(ValidationError::EmptyCollection(Collection::Songs));
    }

    let known: HashSet<&str> = songs.iter().map(|s| s.id().as_str()).collect();
    let unknown: Vec<SongId> =
      song_ids.iter().filter(|id| !known.contains(id.as_str())).cloned().collect();
    if !unknown.is_empty() {
      return Err(ValidationError::UnknownSongIds(unknown));
    }

    let created = clock.today();
    debug!(playlist = %name, songs = song_ids.len(), %created, "playlist created");

    Ok(Self { name, created, song_ids: song_ids.to_vec() })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Fecha de creación; se muestra como `YYYY-MM-DD`.
  pub fn created(&self) -> NaiveDate {
    self.created
  }

  pub fn song_ids(&self) -> &[SongId] {
    &self.song_ids
  }
}
