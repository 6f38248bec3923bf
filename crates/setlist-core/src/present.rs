//! Presentación en texto de canciones, playlists y estadísticas.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use crate::domain::{Playlist, Song};
use crate::errors::{Collection, ValidationError};
use crate::stats::{ArtistStat, GenreDistribution};

/// `M:SS` sin acarrear a horas: los minutos pueden pasar de 59.
fn minutes_seconds(total: u64) -> String {
  format!("{}:{:02}", total / 60, total % 60)
}

/// Formatea segundos como `M:SS` (`354` → `"5:54"`, `3661` → `"61:01"`).
pub fn format_duration(seconds: i64) -> Result<String, ValidationError> {
  let total = u64::try_from(seconds).map_err(|_| ValidationError::NegativeSeconds(seconds))?;
  Ok(minutes_seconds(total))
}

/// Línea `id | título | artista | género | M:SS | año | álbum`.
pub fn format_song(song: &Song) -> String {
  format!(
    "{} | {} | {} | {} | {} | {} | {}",
    song.id(),
    song.title(),
    song.artist(),
    song.genre(),
    minutes_seconds(u64::from(song.duration_seconds())),
    song.release_year(),
    song.album()
  )
}

/// Informe de varias líneas de una playlist.
///
/// Los IDs que no se encuentran en `songs` se omiten de la lista de pistas y
/// de la duración, pero sí cuentan en `Songs:`. La numeración usa la posición
/// en la playlist, así que puede tener huecos.
pub fn format_playlist_info(playlist: &Playlist, songs: &[Song]) -> Result<String, ValidationError> {
  if songs.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Songs));
  }

  // Con IDs repetidos gana la última aparición.
  let lookup: HashMap<&str, &Song> = songs.iter().map(|s| (s.id().as_str(), s)).collect();

  let resolved: Vec<(usize, &Song)> = playlist
    .song_ids()
    .iter()
    .enumerate()
    .filter_map(|(i, id)| lookup.get(id.as_str()).map(|s| (i + 1, *s)))
    .collect();

  let total: u64 = resolved.iter().map(|(_, s)| u64::from(s.duration_seconds())).sum();

  let mut out = String::new();
  let _ = writeln!(out, "Name: {}", playlist.name());
  let _ = writeln!(out, "Created: {}", playlist.created().format("%Y-%m-%d"));
  let _ = writeln!(out, "Songs: {}", playlist.song_ids().len());
  let _ = writeln!(out, "Duration: {}", minutes_seconds(total));
  out.push_str("Tracks:");
  for (position, song) in resolved {
    let _ = write!(
      out,
      "\n  {position}. {} - {} ({})",
      song.title(),
      song.artist(),
      minutes_seconds(u64::from(song.duration_seconds()))
    );
  }

  Ok(out)
}

/// Vista de solo lectura con los campos etiquetados de una canción.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledSong<'a> {
  pub id: &'a str,
  pub title: &'a str,
  pub artist: &'a str,
  pub genre: &'a str,
  pub duration_seconds: u32,
  pub release_year: i32,
  pub album: &'a str,
}

impl<'a> From<&'a Song> for LabeledSong<'a> {
  fn from(song: &'a Song) -> Self {
    Self {
      id: song.id().as_str(),
      title: song.title(),
      artist: song.artist(),
      genre: song.genre(),
      duration_seconds: song.duration_seconds(),
      release_year: song.release_year(),
      album: song.album(),
    }
  }
}

impl LabeledSong<'_> {
  /// Pares `(etiqueta, valor)` en el orden de los campos.
  pub fn fields(&self) -> [(&'static str, String); 7] {
    [
      ("ID", self.id.to_owned()),
      ("Title", self.title.to_owned()),
      ("Artist", self.artist.to_owned()),
      ("Genre", self.genre.to_owned()),
      ("Duration", minutes_seconds(u64::from(self.duration_seconds))),
      ("Year", self.release_year.to_string()),
      ("Album", self.album.to_owned()),
    ]
  }
}

impl fmt::Display for LabeledSong<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let values = self.fields().map(|(_, v)| v);
    write!(f, "{}", values.join(" | "))
  }
}

/// Convierte las canciones en vistas etiquetadas; falla si no hay ninguna.
pub fn labeled_songs(songs: &[Song]) -> Result<Vec<LabeledSong<'_>>, ValidationError> {
  if songs.is_empty() {
    return Err(ValidationError::EmptyCollection(Collection::Songs));
  }
  Ok(songs.iter().map(LabeledSong::from).collect())
}

/// Una línea `Etiqueta: valor` por campo.
pub fn format_labeled(song: &LabeledSong<'_>) -> String {
  song.fields().iter().map(|(label, value)| format!("{label}: {value}")).collect::<Vec<_>>().join("\n")
}

/// Una línea `<género>: <n> songs` por género.
pub fn format_distribution(distribution: &GenreDistribution) -> String {
  distribution.iter().map(|(genre, n)| format!("{genre}: {n} songs")).collect::<Vec<_>>().join("\n")
}

/// Una línea `<artista>: <n> songs (e.g., <título>)` por artista.
pub fn format_artist_statistics(stats: &[ArtistStat]) -> String {
  stats
    .iter()
    .map(|s| format!("{}: {} songs (e.g., {})", s.artist, s.songs, s.example_title))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Genre, SongId};
  use crate::ports::FixedClock;
  use crate::seed::SeedData;
  use crate::stats::{artist_statistics, calculate_genre_distribution};
  use chrono::NaiveDate;

  fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap())
  }

  #[test]
  fn duration_formatting() {
    assert_eq!(format_duration(354).unwrap(), "5:54");
    assert_eq!(format_duration(3661).unwrap(), "61:01");
    assert_eq!(format_duration(0).unwrap(), "0:00");
    assert_eq!(format_duration(59).unwrap(), "0:59");
    assert_eq!(format_duration(-1), Err(ValidationError::NegativeSeconds(-1)));
  }

  #[test]
  fn song_line() {
    let seed = SeedData::builtin().unwrap();
    assert_eq!(
      format_song(&seed.songs[0]),
      "S001 | Bohemian Rhapsody | Queen | rock | 5:54 | 1975 | A Night at the Opera"
    );
  }

  #[test]
  fn playlist_report() {
    let seed = SeedData::builtin().unwrap();
    let ids = [SongId::from("S001"), SongId::from("S003")];
    let playlist = Playlist::new("Classics", &ids, &seed.songs, &clock()).unwrap();

    let report = format_playlist_info(&playlist, &seed.songs).unwrap();
    assert_eq!(
      report,
      "Name: Classics\n\
       Created: 2025-01-09\n\
       Songs: 2\n\
       Duration: 11:18\n\
       Tracks:\n  \
       1. Bohemian Rhapsody - Queen (5:54)\n  \
       2. Take Five - Dave Brubeck (5:24)"
    );
  }

  #[test]
  fn playlist_report_skips_unresolved_ids() {
    let seed = SeedData::builtin().unwrap();
    let ids = [SongId::from("S001"), SongId::from("S002"), SongId::from("S005")];
    let playlist = Playlist::new("Gone", &ids, &seed.songs, &clock()).unwrap();

    // El catálogo actual ya no contiene S002.
    let remaining: Vec<Song> = seed.songs.iter().filter(|s| s.id().as_str() != "S002").cloned().collect();
    let report = format_playlist_info(&playlist, &remaining).unwrap();

    assert!(report.contains("Songs: 3\n"));
    assert!(report.contains("Duration: 15:55\n"));
    assert!(report.contains("  1. Bohemian Rhapsody - Queen (5:54)"));
    assert!(report.contains("  3. Strobe - Deadmau5 (10:01)"));
    assert!(!report.contains("Billie Jean"));
    assert_eq!(format_playlist_info(&playlist, &[]), Err(ValidationError::EmptyCollection(Collection::Songs)));
  }

  #[test]
  fn repeated_song_counts_every_time() {
    let seed = SeedData::builtin().unwrap();
    let ids = [SongId::from("S003"), SongId::from("S001"), SongId::from("S003")];
    let playlist = Playlist::new("Twice", &ids, &seed.songs, &clock()).unwrap();

    let report = format_playlist_info(&playlist, &seed.songs).unwrap();
    assert!(report.contains("Songs: 3\n"));
    assert!(report.contains("Duration: 16:42\n"));
    assert!(report.ends_with(
      "  1. Take Five - Dave Brubeck (5:24)\n  \
       2. Bohemian Rhapsody - Queen (5:54)\n  \
       3. Take Five - Dave Brubeck (5:24)"
    ));
  }

  #[test]
  fn duplicate_catalogue_id_resolves_to_last_entry() {
    let songs = vec![
      Song::new("D1", "First Take", "Band", "rock", 100, 2001, "Demo").unwrap(),
      Song::new("D1", "Final Take", "Band", "rock", 200, 2002, "Album").unwrap(),
    ];
    let playlist = Playlist::new("Dupes", &[SongId::from("D1")], &songs, &clock()).unwrap();

    let report = format_playlist_info(&playlist, &songs).unwrap();
    assert!(report.contains("Duration: 3:20\n"));
    assert!(report.ends_with("  1. Final Take - Band (3:20)"));
    assert!(!report.contains("First Take"));
  }

  #[test]
  fn labeled_view_borrows_every_field() {
    let seed = SeedData::builtin().unwrap();
    let views = labeled_songs(&seed.songs).unwrap();

    assert_eq!(views.len(), 5);
    assert_eq!(views[0].title, "Bohemian Rhapsody");
    assert_eq!(views[0].to_string(), format_song(&seed.songs[0]));
    assert_eq!(
      format_labeled(&views[4]),
      "ID: S005\nTitle: Strobe\nArtist: Deadmau5\nGenre: electronic\nDuration: 10:01\nYear: 2009\nAlbum: For Lack of a Better Name"
    );
    assert_eq!(labeled_songs(&[]), Err(ValidationError::EmptyCollection(Collection::Songs)));
  }

  #[test]
  fn statistics_rendering() {
    let seed = SeedData::builtin().unwrap();
    let dist = calculate_genre_distribution(&seed.songs, &Genre::labels()).unwrap();

    let text = format_distribution(&dist);
    assert!(text.starts_with("rock: 1 songs\npop: 1 songs"));
    assert!(text.ends_with("hip-hop: 0 songs"));

    let artists = format_artist_statistics(&artist_statistics(&seed.songs[..2]));
    assert_eq!(artists, "Queen: 1 songs (e.g., Bohemian Rhapsody)\nMichael Jackson: 1 songs (e.g., Billie Jean)");
  }
}
