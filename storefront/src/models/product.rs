// storefront/src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use thriftstore::{Error as StoreError, Product, ProductId};

/// A `products` row. Category and condition are stored as their display
/// names and only become enums when converted into a [`Product`].
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category: String,
  #[sqlx(rename = "item_condition")]
  pub condition: String,
  pub image_url: String,
  pub seller_id: String,
  pub created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
  type Error = StoreError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    Ok(Product {
      id: ProductId::new(row.id),
      name: row.name,
      description: row.description,
      price: row.price,
      category: row.category.parse()?,
      condition: row.condition.parse()?,
      image_url: row.image_url,
      seller_id: row.seller_id,
      created_at: row.created_at,
    })
  }
}
