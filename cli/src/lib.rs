//! Menú interactivo sobre el motor de catálogo.
//!
//! El binario solo resuelve configuración y semilla; todo el flujo vive aquí
//! para poder ejecutarlo con entradas guionizadas.

pub mod args;
pub mod console;
pub mod logging;
pub mod menu;

mod actions;

use std::io::{BufRead, Write};

use setlist_core::ports::Clock;
use setlist_core::services::CatalogueSession;

use crate::console::{ActionError, Console};
use crate::menu::App;

/// Ejecuta el menú hasta que el usuario sale o se agota la entrada, y
/// devuelve la sesión con el estado final.
pub fn run<C: Clock>(
  session: CatalogueSession<C>,
  input: &mut dyn BufRead,
  output: &mut dyn Write,
) -> Result<CatalogueSession<C>, ActionError> {
  let mut app = App { session, console: Console::new(input, output) };
  menu::run_loop(&mut app)?;
  Ok(app.session)
}
