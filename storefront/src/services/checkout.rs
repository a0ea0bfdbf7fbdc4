// storefront/src/services/checkout.rs

//! Simulated order placement. Nothing is charged and no order is stored;
//! the cart is emptied after a fixed processing delay.

use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use thriftstore::{CartAggregator, UserId};

#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
  pub reference: String,
  pub item_count: u64,
  pub total: Decimal,
}

#[instrument(name = "checkout::simulate", skip_all, fields(user = %user))]
pub async fn simulate_checkout(carts: &CartAggregator, user: &UserId, delay: Duration) -> AppResult<CheckoutReceipt> {
  let cart = carts.get_cart(user).await?;
  if cart.is_empty() {
    return Err(AppError::Validation("Cart is empty".to_string()));
  }

  let item_count = cart.count();
  let total = cart.total()?;
  info!(item_count, %total, "Simulating order placement");
  tokio::time::sleep(delay).await; // Simulate processing

  carts.clear(user).await?;

  let reference = format!("mock_order_{}", Uuid::new_v4());
  info!(order_reference = %reference, "Order placed");
  Ok(CheckoutReceipt {
    reference,
    item_count,
    total,
  })
}
