use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "SETLIST_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("invalid seed file {path:?}: {message}")]
  Seed { path: PathBuf, message: String },
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct SetlistPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl SetlistPaths {
  /// Resuelve los directorios: `SETLIST_BASE_DIR` si está definida, si no los
  /// directorios de usuario de la plataforma.
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::from_base(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "setlist", "setlist").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  /// Usa `base` como raíz; la configuración vive en `<base>/config`.
  pub fn from_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base_dir = base.as_ref().to_path_buf();
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir, config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("setlist.toml")
  }
}
