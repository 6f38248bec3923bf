use tracing_subscriber::EnvFilter;

/// Instala el subscriber global. `RUST_LOG` tiene prioridad sobre `directive`.
///
/// Los logs van a stderr para no mezclarse con el menú.
pub fn init(directive: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
