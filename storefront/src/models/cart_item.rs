// storefront/src/models/cart_item.rs

use sqlx::FromRow;

use thriftstore::{CartLine, Error as StoreError, ProductId};

/// A `cart_items` row. `position` preserves the order lines were first added.
#[derive(Debug, Clone, FromRow)]
pub struct CartItemRow {
  pub user_id: String,
  pub product_id: String,
  pub quantity: i32,
  pub position: i32,
}

impl TryFrom<CartItemRow> for CartLine {
  type Error = StoreError;

  fn try_from(row: CartItemRow) -> Result<Self, Self::Error> {
    let quantity = u32::try_from(row.quantity)
      .ok()
      .filter(|q| *q > 0)
      .ok_or_else(|| StoreError::validation(format!("Stored quantity {} is not positive", row.quantity)))?;
    Ok(CartLine {
      product_id: ProductId::new(row.product_id),
      quantity,
    })
  }
}
