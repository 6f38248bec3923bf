use crate::domain::ids::SongId;
use crate::errors::{Field, ValidationError};
use serde::{Deserialize, Serialize};

/// La Canción (Song): registro inmutable del catálogo.
///
/// Los campos son privados: una vez construida con [`Song::new`], una canción
/// no cambia. Filtros, ordenaciones e integraciones producen colecciones
/// nuevas con copias de los valores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SongRecord")]
pub struct Song {
  id: SongId,
  title: String,
  artist: String,
  genre: String,
  duration_seconds: u32,
  release_year: i32,
  album: String,
}

impl Song {
  /// Valida cada campo y construye una canción.
  ///
  /// Falla con [`ValidationError`] indicando el campo si algún texto está
  /// vacío o si la duración no es un entero positivo que quepa en `u32`.
  pub fn new(
    id: impl Into<String>,
    title: impl Into<String>,
    artist: impl Into<String>,
    genre: impl Into<String>,
    duration_seconds: i64,
    release_year: i32,
    album: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    let id = require_text(id.into(), Field::SongId)?;
    let title = require_text(title.into(), Field::Title)?;
    let artist = require_text(artist.into(), Field::Artist)?;
    let genre = require_text(genre.into(), Field::Genre)?;

    if duration_seconds <= 0 {
      return Err(ValidationError::NonPositiveDuration(duration_seconds));
    }
    let duration_seconds = u32::try_from(duration_seconds)
      .map_err(|_| ValidationError::DurationOutOfRange(duration_seconds))?;

    let album = require_text(album.into(), Field::Album)?;

    Ok(Self { id: SongId::from(id), title, artist, genre, duration_seconds, release_year, album })
  }

  pub fn id(&self) -> &SongId {
    &self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> &str {
    &self.artist
  }

  pub fn genre(&self) -> &str {
    &self.genre
  }

  /// Duración en segundos (siempre mayor que cero).
  pub fn duration_seconds(&self) -> u32 {
    self.duration_seconds
  }

  pub fn release_year(&self) -> i32 {
    self.release_year
  }

  pub fn album(&self) -> &str {
    &self.album
  }
}

fn require_text(value: String, field: Field) -> Result<String, ValidationError> {
  if value.is_empty() {
    return Err(ValidationError::EmptyField(field));
  }
  Ok(value)
}

/// Forma "cruda" de una canción tal y como llega de un archivo de semilla.
///
/// Solo existe para deserializar: la conversión a [`Song`] pasa siempre por
/// [`Song::new`].
#[derive(Debug, Clone, Deserialize)]
pub struct SongRecord {
  pub id: String,
  pub title: String,
  pub artist: String,
  pub genre: String,
  pub duration_seconds: i64,
  pub release_year: i32,
  pub album: String,
}

impl TryFrom<SongRecord> for Song {
  type Error = ValidationError;

  fn try_from(r: SongRecord) -> Result<Self, Self::Error> {
    Song::new(r.id, r.title, r.artist, r.genre, r.duration_seconds, r.release_year, r.album)
  }
}
