use std::fmt::Display;
use std::io::{self, BufRead, Write};

use setlist_core::ValidationError;
use thiserror::Error;

/// Fallo de una acción del menú.
///
/// `Validation` e `Input` son recuperables: se muestran y se vuelve al menú.
#[derive(Debug, Error)]
pub enum ActionError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("{0}")]
  Input(String),

  #[error("end of input")]
  EndOfInput,

  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

impl ActionError {
  pub fn is_recoverable(&self) -> bool {
    matches!(self, ActionError::Validation(_) | ActionError::Input(_))
  }
}

/// Entrada/salida de texto del menú, abstraída para poder guionizarla en tests.
pub struct Console<'a> {
  input: &'a mut dyn BufRead,
  output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
  pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
    Self { input, output }
  }

  /// Escribe una línea completa.
  pub fn say(&mut self, line: impl Display) -> io::Result<()> {
    writeln!(self.output, "{line}")
  }

  /// Muestra `prompt` y lee una línea sin el salto final.
  ///
  /// Una línea que no es UTF-8 se consume entera y se rechaza como entrada
  /// inválida, no como fallo de E/S.
  pub fn ask(&mut self, prompt: &str) -> Result<String, ActionError> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let mut raw = Vec::new();
    if self.input.read_until(b'\n', &mut raw)? == 0 {
      return Err(ActionError::EndOfInput);
    }
    let mut line = String::from_utf8(raw).map_err(|_| ActionError::Input("input is not valid UTF-8".into()))?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
  }

  /// Lee un entero; los espacios alrededor se ignoran.
  pub fn ask_int(&mut self, prompt: &str) -> Result<i64, ActionError> {
    let raw = self.ask(prompt)?;
    raw.trim().parse().map_err(|_| ActionError::Input(format!("'{}' is not a valid integer", raw.trim())))
  }
}
