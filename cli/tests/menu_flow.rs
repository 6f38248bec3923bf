use std::io::Cursor;

use chrono::NaiveDate;
use setlist_core::ports::FixedClock;
use setlist_core::seed::SeedData;
use setlist_core::services::CatalogueSession;

fn session() -> CatalogueSession<FixedClock> {
  let day = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
  CatalogueSession::new(SeedData::builtin().unwrap(), FixedClock(day))
}

/// Ejecuta el menú con `script` como entrada y devuelve la sesión y lo escrito.
fn drive(script: &str) -> (CatalogueSession<FixedClock>, String) {
  drive_bytes(script.as_bytes())
}

fn drive_bytes(script: &[u8]) -> (CatalogueSession<FixedClock>, String) {
  let mut input = Cursor::new(script.to_vec());
  let mut output = Vec::new();
  let session = setlist_lib::run(session(), &mut input, &mut output).unwrap();
  (session, String::from_utf8(output).unwrap())
}

#[test]
fn banner_shows_catalogue_totals_and_exit_says_goodbye() {
  let (_, out) = drive("0\n");

  assert!(out.contains("===== SETLIST: MUSIC PLAYLIST MANAGER ====="));
  assert!(out.contains("Total Songs: 5"));
  assert!(out.contains("Total Duration: 0h 32m 16s"));
  assert!(out.contains("Enter your choice (0-6): "));
  assert!(out.ends_with("Thank you for using Setlist!\n"));
}

#[test]
fn empty_catalogue_banner_shows_zero_totals() {
  let seed = SeedData { songs: Vec::new(), new_releases: Vec::new(), genres: vec!["rock".into()] };
  let day = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
  let mut input = Cursor::new(b"1\n0\n".to_vec());
  let mut output = Vec::new();

  setlist_lib::run(CatalogueSession::new(seed, FixedClock(day)), &mut input, &mut output).unwrap();
  let out = String::from_utf8(output).unwrap();

  assert!(out.contains("Total Songs: 0"));
  assert!(out.contains("Total Duration: 0h 0m 0s"));
  assert!(out.contains("No songs to display."));
  assert!(out.ends_with("Thank you for using Setlist!\n"));
}

#[test]
fn end_of_input_leaves_the_loop_quietly() {
  let (session, out) = drive("");
  assert!(out.contains("Total Songs: 5"));
  assert!(session.playlists().is_empty());
}

#[test]
fn unknown_choice_is_reported_and_menu_repeats() {
  let (_, out) = drive("9\n0\n");
  assert!(out.contains("Invalid choice. Please try again."));
  assert_eq!(out.matches("Total Songs: 5").count(), 2);
}

#[test]
fn non_utf8_input_returns_to_the_menu() {
  let (_, out) = drive_bytes(b"2\n2\n\xff\xfe\n1\n0\n");

  assert!(out.contains("Error: input is not valid UTF-8"));
  assert!(out.contains("Current Song Collection:"));
  assert!(out.ends_with("Thank you for using Setlist!\n"));
}

#[test]
fn view_lists_every_song() {
  let (_, out) = drive("1\n0\n");
  assert!(out.contains("Current Song Collection:"));
  assert!(out.contains("S001 | Bohemian Rhapsody | Queen | rock | 5:54 | 1975 | A Night at the Opera"));
  assert!(out.contains("S005 | Strobe | Deadmau5 | electronic | 10:01 | 2009 | For Lack of a Better Name"));
}

#[test]
fn genre_filter_accepts_catalogue_labels() {
  let (_, out) = drive("2\n1\njazz\n0\n");
  assert!(out.contains("Available genres: rock, pop, jazz, classical, electronic, hip-hop"));
  assert!(out.contains("Filtered Results:"));
  assert!(out.contains("S003 | Take Five"));
  assert!(!out.contains("S001 | Bohemian Rhapsody"));
}

#[test]
fn invalid_genre_is_recoverable() {
  let (_, out) = drive("2\n1\npolka\n0\n");
  assert!(out.contains("Error: Invalid genre. Must be one of: rock, pop, jazz, classical, electronic, hip-hop"));
  assert!(out.ends_with("Thank you for using Setlist!\n"));
}

#[test]
fn duration_filter_rejects_inverted_range() {
  let (_, out) = drive("2\n3\n6\n0\n5\n0\n0\n");
  assert!(out.contains("Error: "));
  assert!(!out.contains("Filtered Results:"));
}

#[test]
fn duration_filter_uses_minutes_and_seconds() {
  let (_, out) = drive("2\n3\n5\n0\n6\n0\n0\n");
  assert!(out.contains("S001 | Bohemian Rhapsody"));
  assert!(out.contains("S003 | Take Five"));
  assert!(!out.contains("S002 | Billie Jean"));
  assert!(!out.contains("S005 | Strobe"));
}

#[test]
fn decade_without_matches_says_so() {
  let (_, out) = drive("2\n4\n1990\n0\n");
  assert!(out.contains("No songs to display."));
}

#[test]
fn creating_a_playlist_prints_its_report() {
  let (session, out) = drive("3\nRoad Trip\n1, 3\n0\n");

  assert!(out.contains("1. S001 - Bohemian Rhapsody by Queen"));
  assert!(out.contains("Playlist Information:"));
  assert!(out.contains("Name: Road Trip"));
  assert!(out.contains("Created: 2024-05-17"));
  assert!(out.contains("Songs: 2"));
  assert!(out.contains("Duration: 11:18"));
  assert!(out.contains("  1. Bohemian Rhapsody - Queen (5:54)"));
  assert!(out.contains("  2. Take Five - Dave Brubeck (5:24)"));

  assert_eq!(session.playlists().len(), 1);
  assert_eq!(session.playlists()[0].name(), "Road Trip");
}

#[test]
fn playlist_with_bad_selection_is_not_created() {
  let (session, out) = drive("3\nMix\n1, 9\n3\n\n1\n0\n");
  assert!(out.contains("Error: Invalid song number: 9 (expected 1-5)"));
  assert!(out.contains("Error: Playlist name must be a non-empty string"));
  assert!(session.playlists().is_empty());
}

#[test]
fn labeled_view_shows_first_song_fields() {
  let (_, out) = drive("4\n0\n");
  assert!(out.contains("Labeled Song View:"));
  assert!(out.contains("Accessing Labeled Fields:"));
}

#[test]
fn statistics_sort_and_distribution() {
  let (_, out) = drive("5\n1\n5\n2\nduration\n5\n3\n5\n7\n0\n");

  assert!(out.contains("Song Distribution:"));
  assert!(out.contains("rock: 1 songs"));
  assert!(out.contains("hip-hop: 0 songs"));

  assert!(out.contains("Sorted Results:"));
  let take_five = out.find("S003 | Take Five").unwrap();
  let bohemian = out.find("S001 | Bohemian Rhapsody").unwrap();
  assert!(take_five < bohemian);

  assert!(out.contains("Artist Statistics:"));
  assert!(out.contains("Queen: 1 songs (e.g., Bohemian Rhapsody)"));
  assert!(out.contains("Invalid choice."));
}

#[test]
fn unknown_sort_key_is_reported() {
  let (_, out) = drive("5\n2\nmood\n0\n");
  assert!(out.contains("Error: "));
  assert!(out.contains("mood"));
}

#[test]
fn integration_can_be_cancelled_or_confirmed() {
  let (session, out) = drive("6\nn\n6\nY\n0\n");

  assert!(out.contains("New Releases:"));
  assert!(out.contains("- N001: Blinding Lights by The Weeknd"));
  assert!(out.contains("Integration cancelled."));
  assert!(out.contains("Integration complete. New total: 7 songs."));
  assert!(out.contains("Total Songs: 7"));
  assert_eq!(session.catalogue().len(), 7);
}
