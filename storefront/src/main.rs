// storefront/src/main.rs

use std::io;
use std::net::TcpListener;
use std::sync::Arc;

use storefront::config::AppConfig;
use storefront::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  storefront::init_tracing(app_config.log_format);
  app_config.log_loaded();
  tracing::info!("Starting thriftstore server...");

  let app_state = match AppState::build(app_config.clone()).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise application state.");
      return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
    }
  };

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);
  let listener = TcpListener::bind(&server_address)?;

  storefront::run(listener, app_state)?.await
}
