// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Absent means the catalog and carts live in memory for the process lifetime.
  pub database_url: Option<String>,

  // Populate an empty catalog with the sample listings on startup.
  pub seed_db: bool,

  pub checkout_delay: Duration,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_source(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key lookup; `from_env` passes the process environment.
  pub fn from_source<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL");

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let checkout_delay_ms = get_env("CHECKOUT_DELAY_MS")
      .unwrap_or_else(|| "1500".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CHECKOUT_DELAY_MS: {}", e)))?;

    let log_format = match get_env("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase).as_deref() {
      None | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected pretty or json", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
      checkout_delay: Duration::from_millis(checkout_delay_ms),
      log_format,
    })
  }

  /// Reports the loaded settings. Call once the subscriber is installed.
  pub fn log_loaded(&self) {
    tracing::info!(
      in_memory = self.database_url.is_none(),
      seed_db = self.seed_db,
      checkout_delay_ms = self.checkout_delay.as_millis() as u64,
      log_format = ?self.log_format,
      "Application configuration loaded successfully."
    );
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
