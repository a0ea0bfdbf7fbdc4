// storefront/src/lib.rs

//! HTTP surface of the thrift marketplace: product listing and search, per-user
//! carts, and a simulated checkout, backed by PostgreSQL or in-memory stores.

pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

use actix_web::dev::Server;
use actix_web::{web as actix_data, App, HttpServer};
use std::net::TcpListener;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::state::AppState;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let result = match format {
    LogFormat::Pretty => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
  if let Err(e) = result {
    eprintln!("Tracing subscriber already installed: {}", e);
  }
}

/// Builds the server on an already-bound listener. Binding to port 0 lets
/// callers pick a free port and read it back from the listener.
pub fn run(listener: TcpListener, app_state: AppState) -> std::io::Result<Server> {
  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .listen(listener)?
  .run();
  Ok(server)
}
