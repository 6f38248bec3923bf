use setlist_core::ports::Clock;
use setlist_core::services::CatalogueSession;
use setlist_core::stats::TotalDuration;
use tracing::{debug, warn};

use crate::actions;
use crate::console::{ActionError, Console};

/// Estado compartido por todas las acciones del menú.
pub struct App<'a, C: Clock> {
  pub session: CatalogueSession<C>,
  pub console: Console<'a>,
}

/// Qué hacer después de una acción.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Exit,
}

pub type Handler<C> = fn(&mut App<'_, C>) -> Result<Flow, ActionError>;

/// Entrada de una tabla de despacho: tecla, texto y acción.
pub struct MenuEntry<C: Clock> {
  pub key: &'static str,
  pub label: &'static str,
  pub handler: Handler<C>,
}

impl<C: Clock> MenuEntry<C> {
  fn new(key: &'static str, label: &'static str, handler: Handler<C>) -> Self {
    Self { key, label, handler }
  }
}

pub fn main_menu<C: Clock>() -> [MenuEntry<C>; 7] {
  [
    MenuEntry::new("1", "View Songs", actions::view_songs),
    MenuEntry::new("2", "Filter Songs", actions::filter_songs),
    MenuEntry::new("3", "Create Playlist", actions::create_playlist),
    MenuEntry::new("4", "Labeled Song View", actions::labeled_view),
    MenuEntry::new("5", "Calculate Statistics", actions::statistics),
    MenuEntry::new("6", "Integrate New Releases", actions::integrate_new_releases),
    MenuEntry::new("0", "Exit", actions::exit),
  ]
}

pub fn filter_menu<C: Clock>() -> [MenuEntry<C>; 4] {
  [
    MenuEntry::new("1", "Filter by Genre", actions::filter_genre),
    MenuEntry::new("2", "Filter by Artist", actions::filter_artist),
    MenuEntry::new("3", "Filter by Duration Range", actions::filter_duration),
    MenuEntry::new("4", "Filter by Decade", actions::filter_decade),
  ]
}

pub fn statistics_menu<C: Clock>() -> [MenuEntry<C>; 3] {
  [
    MenuEntry::new("1", "Genre Distribution", actions::genre_distribution),
    MenuEntry::new("2", "Sort Songs", actions::sort),
    MenuEntry::new("3", "Artist Statistics", actions::artist_statistics),
  ]
}

/// Muestra las opciones, lee una y ejecuta su acción.
///
/// Devuelve `None` si la tecla no existe en la tabla.
pub fn prompt_and_dispatch<C: Clock>(
  app: &mut App<'_, C>,
  entries: &[MenuEntry<C>],
  prompt: &str,
) -> Result<Option<Flow>, ActionError> {
  app.console.say("")?;
  for entry in entries {
    app.console.say(format_args!("{}. {}", entry.key, entry.label))?;
  }

  let choice = app.console.ask(prompt)?;
  match entries.iter().find(|e| e.key == choice.trim()) {
    Some(entry) => (entry.handler)(app).map(Some),
    None => Ok(None),
  }
}

fn print_banner<C: Clock>(app: &mut App<'_, C>) -> Result<(), ActionError> {
  // Un catálogo vacío no tiene duración total; la cabecera muestra ceros.
  let (count, total) = if app.session.catalogue().is_empty() {
    debug!("empty catalogue, banner shows zero totals");
    (0, TotalDuration::from_seconds(0))
  } else {
    app.session.summary()?
  };

  app.console.say("")?;
  app.console.say("===== SETLIST: MUSIC PLAYLIST MANAGER =====")?;
  app.console.say(format_args!("Total Songs: {count}"))?;
  app.console.say(format_args!("Total Duration: {total}"))?;
  Ok(())
}

/// Bucle principal: cabecera, menú y despacho hasta `0` o fin de la entrada.
pub fn run_loop<C: Clock>(app: &mut App<'_, C>) -> Result<(), ActionError> {
  let entries = main_menu::<C>();

  loop {
    print_banner(app)?;

    match prompt_and_dispatch(app, &entries, "Enter your choice (0-6): ") {
      Ok(Some(Flow::Exit)) => return Ok(()),
      Ok(Some(Flow::Continue)) => {}
      Ok(None) => app.console.say("Invalid choice. Please try again.")?,
      Err(ActionError::EndOfInput) => return Ok(()),
      Err(e) if e.is_recoverable() => {
        warn!(error = %e, "menu action failed");
        app.console.say(format_args!("Error: {e}"))?;
      }
      Err(e) => return Err(e),
    }
  }
}
