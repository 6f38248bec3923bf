use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Géneros incluidos en la semilla por defecto del catálogo.
///
/// El catálogo guarda las etiquetas como texto (ver [`Genre::label`]), de modo
/// que un archivo de semilla puede declarar géneros que no estén aquí.
///
/// *Nota:* no se valida el género de cada canción contra esta lista.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
  Rock,
  Pop,
  Jazz,
  Classical,
  Electronic,
  HipHop,
}

impl Genre {
  /// Todos los géneros, en el orden en que se listan al usuario.
  pub const ALL: [Genre; 6] =
    [Genre::Rock, Genre::Pop, Genre::Jazz, Genre::Classical, Genre::Electronic, Genre::HipHop];

  /// Etiqueta canónica tal y como aparece en el campo `genre` de una canción.
  pub fn label(&self) -> &'static str {
    match self {
      Genre::Rock => "rock",
      Genre::Pop => "pop",
      Genre::Jazz => "jazz",
      Genre::Classical => "classical",
      Genre::Electronic => "electronic",
      Genre::HipHop => "hip-hop",
    }
  }

  /// Etiquetas canónicas de [`Genre::ALL`].
  pub fn labels() -> Vec<String> {
    Self::ALL.iter().map(|g| g.label().to_owned()).collect()
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Error producido cuando una cadena no puede convertirse en [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for Genre {
  type Err = GenreParseError;

  /// Intenta convertir una cadena en un [`Genre`].
  ///
  /// Normaliza la cadena eliminando espacios, guiones y mayúsculas, de modo que
  /// `"Hip Hop"`, `"hiphop"` y `"hip-hop"` producen [`Genre::HipHop`].
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', '_'], "");

    let genre = match normalized.as_str() {
      "rock" => Genre::Rock,
      "pop" => Genre::Pop,
      "jazz" => Genre::Jazz,
      "classical" => Genre::Classical,
      "electronic" => Genre::Electronic,
      "hiphop" => Genre::HipHop,
      _ => return Err(GenreParseError { input: s.to_string() }),
    };

    Ok(genre)
  }
}
