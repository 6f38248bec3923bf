use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identificador de una canción dentro del catálogo (`"S001"`, `"N002"`, ...).
///
/// A diferencia de un UUID, el ID lo asigna quien siembra el catálogo, así que
/// se guarda tal cual. La unicidad no se comprueba al integrar novedades.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
  /// Devuelve el texto del identificador.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<&str> for SongId {
  fn from(s: &str) -> Self {
    SongId(s.to_owned())
  }
}

impl From<String> for SongId {
  fn from(s: String) -> Self {
    SongId(s)
  }
}

impl From<SongId> for String {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl AsRef<str> for SongId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for SongId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
