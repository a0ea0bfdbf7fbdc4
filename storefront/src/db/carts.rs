// storefront/src/db/carts.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::models::CartItemRow;
use thriftstore::{CartLine, CartStore, Error as StoreError, Result, StoredCart, UserId};

/// Cart records in `carts` / `cart_items`. A cart row with no items is an
/// empty cart that still exists; only `delete` removes the record.
#[derive(Debug, Clone)]
pub struct PgCartStore {
  pool: PgPool,
}

impl PgCartStore {
  pub fn new(pool: PgPool) -> Self {
    PgCartStore { pool }
  }
}

#[async_trait]
impl CartStore for PgCartStore {
  async fn load(&self, user: &UserId) -> Result<Option<StoredCart>> {
    let exists: Option<String> = sqlx::query_scalar("SELECT user_id FROM carts WHERE user_id = $1")
      .bind(user.as_str())
      .fetch_optional(&self.pool)
      .await
      .map_err(StoreError::transport)?;
    if exists.is_none() {
      return Ok(None);
    }

    let rows: Vec<CartItemRow> = sqlx::query_as(
      "SELECT user_id, product_id, quantity, position FROM cart_items WHERE user_id = $1 ORDER BY position ASC",
    )
    .bind(user.as_str())
    .fetch_all(&self.pool)
    .await
    .map_err(StoreError::transport)?;

    let lines = rows.into_iter().map(CartLine::try_from).collect::<Result<Vec<_>>>()?;
    Ok(Some(StoredCart {
      user: user.clone(),
      lines,
    }))
  }

  #[instrument(name = "pg_carts::save", skip_all, fields(user = %cart.user, lines = cart.lines.len()), err(Display))]
  async fn save(&self, cart: &StoredCart) -> Result<()> {
    let mut tx = self.pool.begin().await.map_err(StoreError::transport)?;

    sqlx::query(
      "INSERT INTO carts (user_id, updated_at) VALUES ($1, NOW()) \
       ON CONFLICT (user_id) DO UPDATE SET updated_at = EXCLUDED.updated_at",
    )
    .bind(cart.user.as_str())
    .execute(&mut *tx)
    .await
    .map_err(StoreError::transport)?;

    sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
      .bind(cart.user.as_str())
      .execute(&mut *tx)
      .await
      .map_err(StoreError::transport)?;

    for (position, line) in cart.lines.iter().enumerate() {
      let quantity = i32::try_from(line.quantity)
        .map_err(|_| StoreError::validation(format!("Quantity {} is too large", line.quantity)))?;
      let position = i32::try_from(position).map_err(|_| StoreError::validation("Cart has too many lines"))?;
      sqlx::query("INSERT INTO cart_items (user_id, product_id, quantity, position) VALUES ($1, $2, $3, $4)")
        .bind(cart.user.as_str())
        .bind(line.product_id.as_str())
        .bind(quantity)
        .bind(position)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::transport)?;
    }

    tx.commit().await.map_err(StoreError::transport)?;
    Ok(())
  }

  async fn delete(&self, user: &UserId) -> Result<()> {
    sqlx::query("DELETE FROM carts WHERE user_id = $1")
      .bind(user.as_str())
      .execute(&self.pool)
      .await
      .map_err(StoreError::transport)?;
    Ok(())
  }
}
