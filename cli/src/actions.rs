//! Acciones del menú. Cada una lee lo que necesita de la consola, llama al
//! motor y muestra el resultado; ninguna contiene lógica de catálogo propia.

use setlist_core::domain::{Catalogue, Genre, Song};
use setlist_core::ports::Clock;
use setlist_core::{present, query, stats};
use tracing::debug;

use crate::console::ActionError;
use crate::menu::{self, App, Flow};

fn show_songs<C: Clock>(app: &mut App<'_, C>, header: &str, songs: &[Song]) -> Result<(), ActionError> {
  app.console.say("")?;
  app.console.say(header)?;
  if songs.is_empty() {
    app.console.say("No songs to display.")?;
  }
  for song in songs {
    app.console.say(present::format_song(song))?;
  }
  Ok(())
}

fn invalid_choice<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  app.console.say("Invalid choice.")?;
  Ok(Flow::Continue)
}

pub fn exit<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  app.console.say("Thank you for using Setlist!")?;
  Ok(Flow::Exit)
}

pub fn view_songs<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let songs = app.session.catalogue().songs().to_vec();
  show_songs(app, "Current Song Collection:", &songs)?;
  Ok(Flow::Continue)
}

// -------- Filtros --------

pub fn filter_songs<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  match menu::prompt_and_dispatch(app, &menu::filter_menu(), "Select filter option (1-4): ")? {
    Some(flow) => Ok(flow),
    None => invalid_choice(app),
  }
}

/// Acepta la etiqueta exacta o una variante reconocible de un género
/// incorporado (`"Hip Hop"` → `hip-hop`), siempre que esté en el catálogo.
fn resolve_genre(catalogue: &Catalogue, input: &str) -> Option<String> {
  if catalogue.has_genre(input) {
    return Some(input.to_owned());
  }
  let label = input.parse::<Genre>().ok()?.label();
  catalogue.has_genre(label).then(|| label.to_owned())
}

pub fn filter_genre<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let genres = app.session.catalogue().genres().join(", ");
  app.console.say(format_args!("Available genres: {genres}"))?;

  let input = app.console.ask("Enter genre to filter by: ")?;
  let genre = resolve_genre(app.session.catalogue(), &input)
    .ok_or_else(|| ActionError::Input(format!("Invalid genre. Must be one of: {genres}")))?;

  let filtered = query::filter_by_genre(app.session.catalogue().songs(), &genre)?;
  debug!(%genre, matches = filtered.len(), "filter by genre");
  show_songs(app, "Filtered Results:", &filtered)?;
  Ok(Flow::Continue)
}

pub fn filter_artist<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let artist = app.console.ask("Enter artist to filter by: ")?;
  let filtered = query::filter_by_artist(app.session.catalogue().songs(), &artist)?;
  show_songs(app, "Filtered Results:", &filtered)?;
  Ok(Flow::Continue)
}

pub fn filter_duration<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let min_minutes = app.console.ask_int("Enter minimum duration (minutes): ")?;
  let min_seconds = app.console.ask_int("Enter minimum duration (seconds): ")?;
  let max_minutes = app.console.ask_int("Enter maximum duration (minutes): ")?;
  let max_seconds = app.console.ask_int("Enter maximum duration (seconds): ")?;

  let to_seconds = |minutes: i64, seconds: i64| {
    minutes
      .checked_mul(60)
      .and_then(|m| m.checked_add(seconds))
      .ok_or_else(|| ActionError::Input("duration is too large".into()))
  };
  let min = to_seconds(min_minutes, min_seconds)?;
  let max = to_seconds(max_minutes, max_seconds)?;

  let filtered = query::filter_by_duration(app.session.catalogue().songs(), min, max)?;
  show_songs(app, "Filtered Results:", &filtered)?;
  Ok(Flow::Continue)
}

pub fn filter_decade<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let raw = app.console.ask_int("Enter decade (e.g., 1970 for the 1970s): ")?;
  let decade = i32::try_from(raw).map_err(|_| ActionError::Input(format!("{raw} is not a valid year")))?;

  let filtered = query::filter_by_decade(app.session.catalogue().songs(), decade);
  show_songs(app, "Filtered Results:", &filtered)?;
  Ok(Flow::Continue)
}

// -------- Playlists --------

fn parse_positions(raw: &str) -> Result<Vec<usize>, ActionError> {
  raw
    .split(',')
    .map(|part| {
      let part = part.trim();
      part.parse::<usize>().map_err(|_| ActionError::Input(format!("'{part}' is not a valid song number")))
    })
    .collect()
}

pub fn create_playlist<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  app.console.say("")?;
  app.console.say("Available Songs:")?;
  let listing: Vec<String> = app
    .session
    .catalogue()
    .songs()
    .iter()
    .enumerate()
    .map(|(i, s)| format!("{}. {} - {} by {}", i + 1, s.id(), s.title(), s.artist()))
    .collect();
  for line in listing {
    app.console.say(line)?;
  }

  app.console.say("")?;
  let name = app.console.ask("Enter playlist name: ")?;
  let selection = app.console.ask("Enter song numbers to add (comma-separated): ")?;

  let positions = parse_positions(&selection)?;
  let ids = app.session.song_ids_at(&positions)?;
  let playlist = app.session.create_playlist(&name, &ids)?.clone();
  let info = present::format_playlist_info(&playlist, app.session.catalogue().songs())?;

  app.console.say("")?;
  app.console.say("Playlist Information:")?;
  app.console.say(info)?;
  Ok(Flow::Continue)
}

// -------- Vista etiquetada --------

pub fn labeled_view<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let songs = app.session.catalogue().songs().to_vec();
  let views = present::labeled_songs(&songs)?;

  app.console.say("")?;
  app.console.say("Labeled Song View:")?;
  for view in &views {
    app.console.say(view)?;
  }

  if let Some(first) = views.first() {
    app.console.say("")?;
    app.console.say("Accessing Labeled Fields:")?;
    app.console.say(present::format_labeled(first))?;
  }
  Ok(Flow::Continue)
}

// -------- Estadísticas --------

pub fn statistics<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  match menu::prompt_and_dispatch(app, &menu::statistics_menu(), "Select statistics option (1-3): ")? {
    Some(flow) => Ok(flow),
    None => invalid_choice(app),
  }
}

pub fn genre_distribution<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let catalogue = app.session.catalogue();
  let distribution = stats::calculate_genre_distribution(catalogue.songs(), catalogue.genres())?;

  app.console.say("")?;
  app.console.say("Song Distribution:")?;
  app.console.say(present::format_distribution(&distribution))?;
  Ok(Flow::Continue)
}

pub fn sort<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let keys: Vec<&str> = query::SortKey::ALL.iter().map(|k| k.as_str()).collect();
  app.console.say("")?;
  app.console.say(format_args!("Sort by: {}", keys.join(", ")))?;

  let key = app.console.ask("Enter sort key: ")?;
  let sorted = query::sort_songs(app.session.catalogue().songs(), key.trim())?;
  show_songs(app, "Sorted Results:", &sorted)?;
  Ok(Flow::Continue)
}

pub fn artist_statistics<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let artists = stats::artist_statistics(app.session.catalogue().songs());

  app.console.say("")?;
  app.console.say("Artist Statistics:")?;
  if !artists.is_empty() {
    app.console.say(present::format_artist_statistics(&artists))?;
  }
  Ok(Flow::Continue)
}

// -------- Novedades --------

pub fn integrate_new_releases<C: Clock>(app: &mut App<'_, C>) -> Result<Flow, ActionError> {
  let describe = |songs: &[Song]| -> Vec<String> {
    songs.iter().map(|s| format!("- {}: {} by {}", s.id(), s.title(), s.artist())).collect()
  };
  let current = describe(app.session.catalogue().songs());
  let releases = describe(app.session.new_releases());

  app.console.say("")?;
  app.console.say("Current Songs:")?;
  for line in current {
    app.console.say(line)?;
  }
  app.console.say("")?;
  app.console.say("New Releases:")?;
  for line in releases {
    app.console.say(line)?;
  }

  app.console.say("")?;
  let confirm = app.console.ask("Integrate new releases? (y/n): ")?;
  if confirm.trim().eq_ignore_ascii_case("y") {
    let total = app.session.integrate_new_releases();
    app.console.say(format_args!("Integration complete. New total: {total} songs."))?;
  } else {
    app.console.say("Integration cancelled.")?;
  }
  Ok(Flow::Continue)
}
