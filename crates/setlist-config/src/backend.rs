use crate::io::atomic_write_str;
use crate::paths::{ConfigError, SetlistPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Escritura con toml_edit para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  /// Lee una sección; `None` si el archivo o la sección no existen.
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend sobre un único archivo `setlist.toml`, una sección por componente.
pub struct TomlConfigBackend {
  config_file: PathBuf,
}

impl TomlConfigBackend {
  pub fn new(paths: &SetlistPaths) -> Self {
    Self { config_file: paths.config_file() }
  }

  /// Backend sobre un archivo arbitrario (tests, `--base-dir`).
  pub fn at(config_file: impl Into<PathBuf>) -> Self {
    Self { config_file: config_file.into() }
  }

  pub fn config_file(&self) -> &Path {
    &self.config_file
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let content = match fs::read_to_string(&self.config_file) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError> {
    let Some(table) = self.read_table()? else {
      debug!(path = %self.config_file.display(), "config file not found");
      return Ok(None);
    };

    table.get(section).map(|value| decode_section(section, value)).transpose()
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&self.config_file) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa con serde y se vuelve a leer como tabla.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    atomic_write_str(&self.config_file, &doc.to_string())?;
    debug!(path = %self.config_file.display(), section, "config section saved");

    Ok(())
  }
}
