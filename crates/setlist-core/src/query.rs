//! Filtros y ordenaciones sobre colecciones de canciones.
//!
//! Todas las funciones reciben un slice y devuelven un `Vec` nuevo; la entrada
//! nunca se modifica y las coincidencias conservan su orden relativo.

use std::cmp::Ordering;
use std::{fmt, str::FromStr};

use crate::domain::Song;
use crate::errors::{Collection, Field, ValidationError};

fn keep(songs: &[Song], pred: impl Fn(&Song) -> bool) -> Vec<Song> {
  songs.iter().filter(|s| pred(s)).cloned().collect()
}

/// Canciones cuyo género coincide exactamente (sensible a mayúsculas).
pub fn filter_by_genre(songs: &[Song], genre: &str) -> Result<Vec<Song>, ValidationError> {
  if genre.is_empty() {
    return Err(ValidationError::EmptyField(Field::Genre));
  }
  Ok(keep(songs, |s| s.genre() == genre))
}

/// Canciones cuyo artista coincide exactamente (sensible a mayúsculas).
pub fn filter_by_artist(songs: &[Song], artist: &str) -> Result<Vec<Song>, ValidationError> {
  if artist.is_empty() {
    return Err(ValidationError::EmptyField(Field::Artist));
  }
  Ok(keep(songs, |s| s.artist() == artist))
}

/// Canciones con `min <= duración <= max` (ambos extremos incluidos).
pub fn filter_by_duration(songs: &[Song], min: i64, max: i64) -> Result<Vec<Song>, ValidationError> {
  if min < 0 {
    return Err(ValidationError::NegativeMinDuration(min));
  }
  if max <= 0 {
    return Err(ValidationError::NonPositiveMaxDuration(max));
  }
  if min > max {
    return Err(ValidationError::InvertedDurationRange { min, max });
  }
  Ok(keep(songs, |s| (min..=max).contains(&i64::from(s.duration_seconds()))))
}

/// Canciones publicadas en `[decade_start, decade_start + 9]`.
///
/// El año no tiene por qué ser múltiplo de diez: la ventana se calcula
/// literalmente a partir de él.
pub fn filter_by_decade(songs: &[Song], decade_start: i32) -> Vec<Song> {
  let start = i64::from(decade_start);
  let end = start + 9;
  keep(songs, |s| (start..=end).contains(&i64::from(s.release_year())))
}

/// Claves de ordenación reconocidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
  Title,
  Artist,
  Year,
  Duration,
  Genre,
  /// Artista y, en caso de empate, año de publicación.
  ArtistYear,
}

impl SortKey {
  pub const ALL: [SortKey; 6] =
    [SortKey::Title, SortKey::Artist, SortKey::Year, SortKey::Duration, SortKey::Genre, SortKey::ArtistYear];

  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::Title => "title",
      SortKey::Artist => "artist",
      SortKey::Year => "year",
      SortKey::Duration => "duration",
      SortKey::Genre => "genre",
      SortKey::ArtistYear => "artist_year",
    }
  }

  fn compare(&self, a: &Song, b: &Song) -> Ordering {
    match self {
      SortKey::Title => a.title().cmp(b.title()),
      SortKey::Artist => a.artist().cmp(b.artist()),
      SortKey::Year => a.release_year().cmp(&b.release_year()),
      SortKey::Duration => a.duration_seconds().cmp(&b.duration_seconds()),
      SortKey::Genre => a.genre().cmp(b.genre()),
      SortKey::ArtistYear => {
        a.artist().cmp(b.artist()).then_with(|| a.release_year().cmp(&b.release_year()))
      }
    }
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortKey {
  type Err = ValidationError;

  /// Coincidencia exacta con uno de los nombres de [`SortKey::as_str`].
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() {
      return Err(ValidationError::EmptyField(Field::SortKey));
    }
    SortKey::ALL
      .into_iter()
      .find(|k| k.as_str() == s)
      .ok_or_else(|| ValidationError::InvalidSortKey(s.to_owned()))
  }
}

/// Ordena ascendentemente por la clave indicada con un sort estable.
pub fn sort_songs_by(songs: &[Song], key: SortKey) -> Vec<Song> {
  let mut sorted = songs.to_vec();
  sorted.sort_by(|a, b| key.compare(a, b));
  sorted
}

/// Variante que recibe la clave como texto.
///
/// Falla si no hay canciones, si la clave está vacía o si no es una de
/// `title`, `artist`, `year`, `duration`, `genre` o `artist_year`.
pub fn sort_songs(songs: &[Song], key: &str) -> Result<Vec<Song>, ValidationError> {
  if songs.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Songs));
  }
  let key: SortKey = key.parse()?;
  Ok(sort_songs_by(songs, key))
}
