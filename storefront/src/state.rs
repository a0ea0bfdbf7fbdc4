// storefront/src/state.rs

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::db::{self, PgCartStore, PgCatalog};
use crate::errors::Result;
use thriftstore::catalog::seed::sample_products;
use thriftstore::{CartAggregator, CartStore, Catalog, MemoryCartStore, MemoryCatalog};

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<dyn Catalog>,
  pub carts: CartAggregator,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wires the stores together around an already-built catalog and cart store.
  pub fn new(catalog: Arc<dyn Catalog>, cart_store: Arc<dyn CartStore>, config: Arc<AppConfig>) -> Self {
    let carts = CartAggregator::new(catalog.clone(), cart_store);
    AppState { catalog, carts, config }
  }

  /// PostgreSQL stores when `DATABASE_URL` is set, in-process ones otherwise.
  pub async fn build(config: Arc<AppConfig>) -> Result<Self> {
    match config.database_url.clone() {
      Some(url) => {
        let pool = db::connect(&url).await?;
        let catalog = PgCatalog::new(pool.clone());
        if config.seed_db {
          db::seed::seed_if_empty(&catalog).await?;
        }
        Ok(Self::new(Arc::new(catalog), Arc::new(PgCartStore::new(pool)), config))
      }
      None => {
        let catalog = if config.seed_db {
          MemoryCatalog::with_products(sample_products(Utc::now()))
        } else {
          MemoryCatalog::new()
        };
        info!(listings = catalog.len(), "Using in-memory catalog and cart stores");
        Ok(Self::new(Arc::new(catalog), Arc::new(MemoryCartStore::new()), config))
      }
    }
  }
}
