use crate::backend::ConfigBackend;
use crate::paths::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Sección `[catalogue]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
  /// Archivo TOML con la semilla; si falta se usa la semilla incorporada.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seed_file: Option<PathBuf>,
}

/// Sección `[log]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
  /// Directiva de `EnvFilter` (`RUST_LOG` tiene prioridad).
  #[serde(default = "default_log_filter")]
  pub filter: String,
}

fn default_log_filter() -> String {
  "warn".into()
}

impl Default for LogConfig {
  fn default() -> Self {
    LogConfig { filter: default_log_filter() }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
  pub catalogue: CatalogueConfig,
  pub log: LogConfig,
}

impl AppConfig {
  /// Carga cada sección. Las que faltan se rellenan con sus valores por
  /// defecto y se escriben en el archivo; las que ya existen no se tocan.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let catalogue = section_or_default::<_, CatalogueConfig>(backend, "catalogue")?;
    let log = section_or_default::<_, LogConfig>(backend, "log")?;

    Ok(Self { catalogue, log })
  }
}

/// Una sección que no se puede escribir no impide arrancar: se avisa y se
/// sigue con el valor por defecto.
fn section_or_default<B, T>(backend: &B, section: &str) -> Result<T, ConfigError>
where
  B: ConfigBackend,
  T: DeserializeOwned + Serialize + Default,
{
  if let Some(value) = backend.load_section(section)? {
    return Ok(value);
  }

  let value = T::default();
  if let Err(e) = backend.save_section(section, &value) {
    warn!(section, error = %e, "could not write default config section");
  }
  Ok(value)
}
