// crates/setlist-core/src/errors.rs
use std::fmt;

use thiserror::Error;

use crate::domain::SongId;

/// Campo de texto obligatorio que no superó la validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  SongId,
  Title,
  Artist,
  Genre,
  Album,
  PlaylistName,
  SortKey,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Field::SongId => "Song ID",
      Field::Title => "Title",
      Field::Artist => "Artist",
      Field::Genre => "Genre",
      Field::Album => "Album",
      Field::PlaylistName => "Playlist name",
      Field::SortKey => "Sort key",
    };
    write!(f, "{text}")
  }
}

/// Colección de entrada que no puede venir vacía.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
  Songs,
  SongIds,
  Genres,
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Collection::Songs => "Songs list",
      Collection::SongIds => "Song IDs list",
      Collection::Genres => "Genres list",
    };
    write!(f, "{text}")
  }
}

/// Único error del motor de catálogo.
///
/// Se produce de forma síncrona cuando una operación recibe argumentos que
/// violan su precondición. Siempre es recuperable: la capa superior (CLI)
/// muestra el mensaje y vuelve al menú.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{0} must be a non-empty string")]
  EmptyField(Field),

  #[error("{0} cannot be empty")]
  EmptyCollection(Collection),

  #[error("Duration must be a positive integer in seconds (got {0})")]
  NonPositiveDuration(i64),

  #[error("Duration {0} is out of range")]
  DurationOutOfRange(i64),

  #[error("Min duration must be a non-negative integer (got {0})")]
  NegativeMinDuration(i64),

  #[error("Max duration must be a positive integer (got {0})")]
  NonPositiveMaxDuration(i64),

  #[error("Min duration must not exceed max duration ({min} > {max})")]
  InvertedDurationRange { min: i64, max: i64 },

  #[error("Seconds must be a non-negative integer (got {0})")]
  NegativeSeconds(i64),

  #[error("Invalid song IDs: {}", join_ids(.0))]
  UnknownSongIds(Vec<SongId>),

  #[error("Invalid sort key '{0}'. Must be one of: title, artist, year, duration, genre, artist_year")]
  InvalidSortKey(String),

  #[error("Invalid song number: {position} (expected 1-{len})")]
  SelectionOutOfRange { position: usize, len: usize },
}

fn join_ids(ids: &[SongId]) -> String {
  ids.iter().map(SongId::as_str).collect::<Vec<_>>().join(", ")
}
