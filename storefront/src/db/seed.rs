// storefront/src/db/seed.rs

use chrono::Utc;
use tracing::info;

use super::PgCatalog;
use thriftstore::catalog::seed::sample_products;
use thriftstore::Result;

/// Inserts the sample listings when the products table is empty.
/// Returns how many listings were written.
pub async fn seed_if_empty(catalog: &PgCatalog) -> Result<usize> {
  let existing = catalog.count().await?;
  if existing > 0 {
    info!(existing, "Catalog already populated; skipping seed");
    return Ok(0);
  }

  let products = sample_products(Utc::now());
  for product in &products {
    catalog.insert(product).await?;
  }
  info!(count = products.len(), "Seeded sample listings");
  Ok(products.len())
}
