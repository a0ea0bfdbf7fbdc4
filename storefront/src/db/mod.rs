// storefront/src/db/mod.rs

//! PostgreSQL-backed durable store: the catalog and cart records.

pub mod carts;
pub mod catalog;
pub mod seed;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::errors::Result;

pub use carts::PgCartStore;
pub use catalog::PgCatalog;

/// Connects and applies pending migrations.
pub async fn connect(database_url: &str) -> Result<PgPool> {
  let pool = PgPoolOptions::new().max_connections(10).connect(database_url).await?;
  tracing::info!("Successfully connected to the database.");

  sqlx::migrate!("./migrations").run(&pool).await?;
  tracing::info!("Database migrations applied.");

  Ok(pool)
}
