mod backend;
mod io;
mod model;
mod paths;
mod seed;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use model::{AppConfig, CatalogueConfig, LogConfig};
pub use paths::{BASE_DIR_ENV, ConfigError, SetlistPaths};
pub use seed::{load_seed, load_seed_file};
