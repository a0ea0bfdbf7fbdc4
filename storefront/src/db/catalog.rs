// storefront/src/db/catalog.rs

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::models::ProductRow;
use thriftstore::{Catalog, Category, Error as StoreError, NewProductInput, Product, ProductId, Result};

const PRODUCT_COLUMNS: &str =
  "id, name, description, price, category, item_condition, image_url, seller_id, created_at";

#[derive(Debug, Clone)]
pub struct PgCatalog {
  pool: PgPool,
}

impl PgCatalog {
  pub fn new(pool: PgPool) -> Self {
    PgCatalog { pool }
  }

  pub async fn count(&self) -> Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await
      .map_err(StoreError::transport)
  }

  /// Stores an already-built listing.
  pub async fn insert(&self, product: &Product) -> Result<()> {
    sqlx::query(
      "INSERT INTO products (id, name, description, price, category, item_condition, image_url, seller_id, created_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(product.id.as_str())
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.category.as_str())
    .bind(product.condition.as_str())
    .bind(&product.image_url)
    .bind(&product.seller_id)
    .bind(product.created_at)
    .execute(&self.pool)
    .await
    .map_err(StoreError::transport)?;
    Ok(())
  }

  async fn fetch_rows(&self, sql: &str, bind: Option<&str>) -> Result<Vec<Product>> {
    let mut query = sqlx::query_as::<_, ProductRow>(sql);
    if let Some(value) = bind {
      query = query.bind(value);
    }
    let rows = query.fetch_all(&self.pool).await.map_err(StoreError::transport)?;
    rows.into_iter().map(Product::try_from).collect()
  }
}

/// Escapes LIKE wildcards so the term is matched literally.
fn like_pattern(term: &str) -> String {
  let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
  format!("%{}%", escaped)
}

#[async_trait]
impl Catalog for PgCatalog {
  async fn list_all(&self) -> Result<Vec<Product>> {
    let sql = format!("SELECT {} FROM products ORDER BY created_at ASC, id ASC", PRODUCT_COLUMNS);
    self.fetch_rows(&sql, None).await
  }

  async fn get_by_id(&self, id: &ProductId) -> Result<Product> {
    let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
    let row: Option<ProductRow> = sqlx::query_as(&sql)
      .bind(id.as_str())
      .fetch_optional(&self.pool)
      .await
      .map_err(StoreError::transport)?;
    match row {
      Some(row) => Product::try_from(row),
      None => Err(StoreError::not_found("Product not found")),
    }
  }

  async fn list_by_category(&self, category: Category) -> Result<Vec<Product>> {
    let sql = format!(
      "SELECT {} FROM products WHERE category = $1 ORDER BY created_at ASC, id ASC",
      PRODUCT_COLUMNS
    );
    self.fetch_rows(&sql, Some(category.as_str())).await
  }

  #[instrument(name = "pg_catalog::search", skip(self))]
  async fn search(&self, term: &str) -> Result<Vec<Product>> {
    if term.is_empty() {
      return self.list_all().await;
    }
    let sql = format!(
      "SELECT {} FROM products WHERE name ILIKE $1 OR description ILIKE $1 ORDER BY created_at ASC, id ASC",
      PRODUCT_COLUMNS
    );
    self.fetch_rows(&sql, Some(&like_pattern(term))).await
  }

  async fn create(&self, input: NewProductInput) -> Result<Product> {
    let product = input.validate()?.into_listing(Utc::now());
    self.insert(&product).await?;
    info!(product_id = %product.id, name = %product.name, "Listing created");
    Ok(product)
  }
}

#[cfg(test)]
mod tests {
  use super::like_pattern;

  #[test]
  fn like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    assert_eq!(like_pattern("jacket"), "%jacket%");
  }
}
