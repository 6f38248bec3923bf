//! Agregados sobre colecciones de canciones.

use std::fmt;

use serde::Serialize;

use crate::domain::Song;
use crate::errors::{Collection, ValidationError};

/// Número de canciones por género, en el orden de los géneros consultados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreDistribution {
  counts: Vec<(String, usize)>,
}

impl GenreDistribution {
  /// Recuento de un género; `None` si no estaba entre los consultados.
  pub fn get(&self, genre: &str) -> Option<usize> {
    self.counts.iter().find(|(g, _)| g == genre).map(|(_, n)| *n)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
    self.counts.iter().map(|(g, n)| (g.as_str(), *n))
  }
}

/// Cuenta cuántas canciones tiene cada género de `genres`.
///
/// Los géneros sin canciones aparecen con 0. Las canciones cuyo género no
/// figura en `genres` no se cuentan en ningún sitio.
pub fn calculate_genre_distribution<S: AsRef<str>>(
  songs: &[Song],
  genres: &[S],
) -> Result<GenreDistribution, ValidationError> {
  if songs.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Songs));
  }
  if genres.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Genres));
  }

  let counts = genres
    .iter()
    .map(|g| {
      let g = g.as_ref();
      (g.to_owned(), songs.iter().filter(|s| s.genre() == g).count())
    })
    .collect();

  Ok(GenreDistribution { counts })
}

/// Duración total desglosada en horas, minutos y segundos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TotalDuration {
  pub hours: u64,
  pub minutes: u64,
  pub seconds: u64,
}

impl TotalDuration {
  pub fn from_seconds(total: u64) -> Self {
    Self { hours: total / 3600, minutes: (total % 3600) / 60, seconds: total % 60 }
  }
}

impl fmt::Display for TotalDuration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
  }
}

/// Suma las duraciones y las desglosa (a diferencia de `M:SS`, aquí los
/// minutos sí se acarrean a horas).
pub fn calculate_total_duration(songs: &[Song]) -> Result<TotalDuration, ValidationError> {
  if songs.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Songs));
  }
  let total: u64 = songs.iter().map(|s| u64::from(s.duration_seconds())).sum();
  Ok(TotalDuration::from_seconds(total))
}

/// Concatenación `songs ++ new_releases`, sin deduplicar ni comprobar IDs.
pub fn integrate_new_releases(songs: &[Song], new_releases: &[Song]) -> Vec<Song> {
  let mut combined = Vec::with_capacity(songs.len() + new_releases.len());
  combined.extend_from_slice(songs);
  combined.extend_from_slice(new_releases);
  combined
}

/// Resumen por artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistStat {
  pub artist: String,
  pub songs: usize,
  /// Título de la primera canción del artista en la colección.
  pub example_title: String,
}

/// Una entrada por artista, en orden de primera aparición.
pub fn artist_statistics(songs: &[Song]) -> Vec<ArtistStat> {
  let mut stats: Vec<ArtistStat> = Vec::new();

  for song in songs {
    match stats.iter_mut().find(|s| s.artist == song.artist()) {
      Some(stat) => stat.songs += 1,
      None => stats.push(ArtistStat {
        artist: song.artist().to_owned(),
        songs: 1,
        example_title: song.title().to_owned(),
      }),
    }
  }

  stats
}
